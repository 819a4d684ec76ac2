// src/api/handlers/password.rs
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use crate::api::types::{ErrorResponse, ReloadResponse};
use crate::core::config::Config;
use crate::pipeline::Pipeline;
use crate::wordlist;

/// Generate a secure password
///
/// Runs the full generation pipeline and returns the accepted password with
/// its entropy estimate and simulated crack time.
#[utoipa::path(
    get,
    path = "/api/password",
    tag = "Password",
    responses(
        (status = 200, description = "Generated password", body = crate::models::PipelineResult),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_password(config: web::Data<Config>) -> impl Responder {
    let pipeline = Pipeline::from_config(&config);

    // Pure CPU work; keep it off the actix workers.
    let outcome = web::block(move || pipeline.run()).await;

    match outcome {
        Ok(Ok(result)) => HttpResponse::Ok().json(result),
        Ok(Err(e)) => {
            error!("Password pipeline failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate password".to_string(),
            })
        }
        Err(e) => {
            error!("Password pipeline task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate password".to_string(),
            })
        }
    }
}

/// Reload the weak-password wordlist
///
/// Re-reads the configured wordlist asset and atomically replaces the active
/// set. In-flight generations keep working against a complete set.
#[utoipa::path(
    post,
    path = "/api/reload-wordlist",
    tag = "Wordlist",
    responses(
        (status = 200, description = "Wordlist replaced", body = ReloadResponse)
    )
)]
pub async fn reload_wordlist() -> impl Responder {
    let count = wordlist::reload();
    info!("Wordlist reloaded, {} entries active", count);
    HttpResponse::Ok().json(ReloadResponse { success: true, count })
}
