// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // GET: Run the generation pipeline
            .route("/password", web::get().to(handlers::password::generate_password))
            // POST: Replace the active wordlist from the configured asset
            .route("/reload-wordlist", web::post().to(handlers::password::reload_wordlist))
            // GET: Liveness probe
            .route("/health", web::get().to(handlers::system::health)),
    );
}
