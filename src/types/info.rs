use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoResponse {
    #[schema(example = "empty-check-api")]
    pub service: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = "running")]
    pub status: String,
    #[schema(value_type = Object)]
    pub endpoints: BTreeMap<String, String>,
}
