// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            // POST: Generate a password
            .route(
                "/password",
                web::post().to(handlers::generator::generate_password),
            )
            // POST: Score an arbitrary password
            .route(
                "/strength",
                web::post().to(handlers::generator::analyze_strength),
            ),
    );

    // System routes
    cfg.route("/health", web::get().to(handlers::system::health));
}
