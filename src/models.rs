// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Final product of one pipeline invocation. Constructed fresh per call and
/// never persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    /// The accepted password, exactly the configured target length
    pub password: String,
    /// Estimated strength in entropy bits
    pub bits: u32,
    /// Human-readable simulated crack time
    pub crack_time: String,
}
