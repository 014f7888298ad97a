use crate::emptiness;
use crate::error::{ApiError, ApiErrorResponse};
use crate::fairings::TracingSpan;
use crate::types::check::{CheckRequest, CheckResponse};
use crate::types::common::timestamp_now;
use rocket::response::status::NoContent;
use rocket::serde::json::{self, Json};
use rocket::Route;
use std::time::{Duration, Instant};
use tracing::Instrument;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[utoipa::path(
    post,
    path = "/api/check-empty",
    tag = "Check",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Check result", body = CheckResponse),
        (status = 400, description = "Bad request", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    )
)]
#[post("/check-empty", data = "<request>")]
pub async fn post_check_empty(
    request: Result<Json<CheckRequest>, json::Error<'_>>,
    span: TracingSpan,
) -> Result<Json<CheckResponse>, ApiError> {
    let started = Instant::now();
    async move {
        let request = match request {
            Ok(body) => body.into_inner(),
            Err(json::Error::Io(e)) => {
                return Err(ApiError::BadRequest(format!(
                    "failed to read request body: {e}"
                )));
            }
            Err(json::Error::Parse(_, e)) => {
                return Err(ApiError::BadRequest(format!("invalid request body: {e}")));
            }
        };

        tracing::info!(
            check_empty = request.check_empty,
            timeout_ms = request.timeout,
            "request received"
        );

        if request.timeout > 0 {
            tokio::time::sleep(Duration::from_millis(request.timeout)).await;
        }

        let is_empty = request
            .check_empty
            .then(|| emptiness::is_empty(&request.data));
        let message = match is_empty {
            Some(true) => "data is empty",
            Some(false) => "data is not empty",
            None => "check skipped",
        };

        let processing_time_ms = round2(started.elapsed().as_secs_f64() * 1000.0);
        tracing::info!(is_empty = ?is_empty, processing_time_ms, "check completed");

        Ok(Json(CheckResponse {
            success: true,
            message: message.into(),
            is_empty,
            timestamp: timestamp_now(),
            processing_time_ms,
        }))
    }
    .instrument(span.0)
    .await
}

#[utoipa::path(
    get,
    path = "/api/empty",
    tag = "Check",
    responses(
        (status = 204, description = "Canned empty response with no body"),
    )
)]
#[get("/empty")]
pub async fn get_empty() -> NoContent {
    NoContent
}

pub fn routes() -> Vec<Route> {
    rocket::routes![post_check_empty, get_empty]
}
