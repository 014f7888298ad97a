use crate::types::common::SERVICE_NAME;
use crate::types::info::ServiceInfoResponse;
use rocket::serde::json::Json;
use rocket::Route;
use std::collections::BTreeMap;

#[utoipa::path(
    get,
    path = "/",
    tag = "Info",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfoResponse),
    )
)]
#[get("/")]
pub async fn get_info() -> Json<ServiceInfoResponse> {
    let endpoints = BTreeMap::from([
        ("GET /".to_string(), "service metadata".to_string()),
        ("GET /api/health".to_string(), "health check".to_string()),
        (
            "POST /api/check-empty".to_string(),
            "classify a JSON value as empty or non-empty".to_string(),
        ),
        (
            "GET /api/empty".to_string(),
            "canned empty response".to_string(),
        ),
    ]);

    Json(ServiceInfoResponse {
        service: SERVICE_NAME.into(),
        version: env!("CARGO_PKG_VERSION").into(),
        status: "running".into(),
        endpoints,
    })
}

pub fn routes() -> Vec<Route> {
    rocket::routes![get_info]
}
