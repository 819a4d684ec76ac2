// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Generic failure message; internal detail is never exposed
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReloadResponse {
    /// Whether the reload completed
    pub success: bool,
    /// Number of entries in the active wordlist after the reload
    pub count: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" when the server is able to answer
    pub status: String,
    pub message: String,
}
