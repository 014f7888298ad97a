use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

fn default_check_empty() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckRequest {
    #[serde(default)]
    #[schema(value_type = Object, example = json!([1, 2, 3]))]
    pub data: Value,
    #[serde(default = "default_check_empty")]
    #[schema(example = true)]
    pub check_empty: bool,
    #[serde(default)]
    #[schema(example = 0)]
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "data is empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = true)]
    pub is_empty: Option<bool>,
    #[schema(example = "2026-01-19 12:00:00")]
    pub timestamp: String,
    #[schema(example = 0.42)]
    pub processing_time_ms: f64,
}
