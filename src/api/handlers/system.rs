// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};

use crate::api::types::HealthResponse;

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        message: "Le serveur fonctionne correctement".to_string(),
    })
}
