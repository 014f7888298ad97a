use crate::types::common::{timestamp_now, SERVICE_NAME};
use crate::types::health::HealthResponse;
use rocket::serde::json::Json;
use rocket::Route;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
#[get("/health")]
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        service: SERVICE_NAME.into(),
        timestamp: timestamp_now(),
    })
}

pub fn routes() -> Vec<Route> {
    rocket::routes![get_health]
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::client;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn test_health_reports_ok() {
        let client = client().await;
        let response = client.get("/api/health").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value =
            serde_json::from_str(&response.into_string().await.expect("response body"))
                .expect("valid json");
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "empty-check-api");
        assert!(body["timestamp"].is_string());
    }
}
