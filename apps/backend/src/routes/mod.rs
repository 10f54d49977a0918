use actix_web::web;

pub mod games;
pub mod health;

/// Register every route; shared by `main.rs` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games and rolls: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
