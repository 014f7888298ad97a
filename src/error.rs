use crate::fairings::request_span_for;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorDetail {
    #[schema(example = "BAD_REQUEST")]
    pub code: String,
    #[schema(example = "invalid request body")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"error": {"code": "BAD_REQUEST", "message": "invalid request body"}}))]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'static> {
        let ApiError::BadRequest(message) = self;
        let status = Status::BadRequest;

        request_span_for(req).in_scope(|| {
            tracing::warn!(status = status.code, error_message = %message, "request failed");
        });

        let body = ApiErrorResponse {
            error: ApiErrorDetail {
                code: "BAD_REQUEST".to_string(),
                message,
            },
        };
        let inner = Json(body).respond_to(req).map_err(|s| {
            tracing::error!(status = %s.code, "failed to serialize error response");
            s
        })?;
        Ok(Response::build_from(inner).status(status).finalize())
    }
}
