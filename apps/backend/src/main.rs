use actix_web::{web, App, HttpServer};
use bowling_backend::config::app::AppConfig;
use bowling_backend::extractors::JsonBodyLimit;
use bowling_backend::infra::state::build_state;
use bowling_backend::middleware::cors::cors_middleware;
use bowling_backend::middleware::request_trace::RequestTrace;
use bowling_backend::middleware::structured_logger::StructuredLogger;
use bowling_backend::middleware::trace_span::TraceSpan;
use bowling_backend::routes;
use bowling_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables come from the runtime (docker env_file, or a sourced .env locally)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        db_kind = ?config.db_kind,
        "Starting bowling backend"
    );

    let app_state = match build_state().with_db(config.db_profile.clone()).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);
    let body_limit = web::Data::new(JsonBodyLimit(config.max_json_payload_size));
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .app_data(body_limit.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
