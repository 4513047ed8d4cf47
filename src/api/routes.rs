// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::analyzer::service_info))
        .route(
            "/generate",
            web::post().to(handlers::generator::generate_password),
        )
        .route(
            "/analyze",
            web::post().to(handlers::analyzer::analyze_password),
        );
}
