// src/api/mod.rs
use actix_web::{middleware, web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

pub mod types;
pub mod routes;
pub mod handlers;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::password::generate_password,
        crate::api::handlers::password::reload_wordlist,
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::models::PipelineResult,
            crate::api::types::ErrorResponse,
            crate::api::types::ReloadResponse,
            crate::api::types::HealthResponse
        )
    ),
    tags(
        (name = "Password", description = "Password generation pipeline"),
        (name = "Wordlist", description = "Weak-password wordlist management"),
        (name = "System", description = "System status endpoints")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Password generation and strength estimation API",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config, port: u16) -> std::io::Result<()> {
    log::info!("Starting passforge API server on port {}", port);

    let address = config.web_address.clone();
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            // Basic hardening headers on every response
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-XSS-Protection", "1; mode=block"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Content-Security-Policy", "default-src 'self'")),
            )
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}
