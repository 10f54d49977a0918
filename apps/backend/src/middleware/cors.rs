use actix_cors::Cors;
use actix_web::http::header;

use crate::middleware::request_trace::TRACE_ID_HEADER;

/// CORS for the scoring API: explicit origins, only the methods the routes use.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static(TRACE_ID_HEADER)])
        .max_age(3600);

    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
