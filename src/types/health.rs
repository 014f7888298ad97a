use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "empty-check-api")]
    pub service: String,
    #[schema(example = "2026-01-19 12:00:00")]
    pub timestamp: String,
}
