use crate::types::common::SERVICE_NAME;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::request::{FromRequest, Outcome};
use rocket::{Data, Request, Response};
use std::time::Instant;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "X-Request-Id";
const PROCESS_TIME_HEADER: &str = "X-Process-Time";
const SERVICE_HEADER: &str = "X-Service";
const REQUEST_ID_MAX_LEN: usize = 128;

pub struct RequestLogger;

pub struct TracingSpan(pub tracing::Span);

struct RequestMeta {
    started_at: Instant,
    request_id: String,
    span: tracing::Span,
}

impl RequestMeta {
    fn fallback() -> Self {
        Self {
            started_at: Instant::now(),
            request_id: "unknown".to_string(),
            span: tracing::Span::none(),
        }
    }
}

fn acceptable_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= REQUEST_ID_MAX_LEN
        && id.is_ascii()
        && !id.chars().any(char::is_control)
}

fn extract_request_id(req: &Request<'_>) -> String {
    req.headers()
        .get_one(REQUEST_ID_HEADER)
        .map(str::trim)
        .filter(|id| acceptable_request_id(id))
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub(crate) fn request_span_for(req: &Request<'_>) -> tracing::Span {
    req.local_cache(RequestMeta::fallback).span.clone()
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for TracingSpan {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(TracingSpan(request_span_for(req)))
    }
}

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let request_id = extract_request_id(req);
        let span = tracing::info_span!(
            "request",
            method = %req.method(),
            uri = %req.uri(),
            request_id = %request_id,
        );
        span.in_scope(|| tracing::info!("request started"));
        req.local_cache(|| RequestMeta {
            started_at: Instant::now(),
            request_id,
            span,
        });
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let meta = req.local_cache(RequestMeta::fallback);
        let duration_ms = meta.started_at.elapsed().as_secs_f64() * 1000.0;
        let status = res.status().code;

        meta.span.in_scope(|| match status {
            500.. => tracing::error!(status, duration_ms, "request completed"),
            400..=499 => tracing::warn!(status, duration_ms, "request completed"),
            _ => tracing::info!(status, duration_ms, "request completed"),
        });

        res.set_header(Header::new(REQUEST_ID_HEADER, meta.request_id.clone()));
        res.set_header(Header::new(
            PROCESS_TIME_HEADER,
            format!("{duration_ms:.2} ms"),
        ));
        res.set_header(Header::new(SERVICE_HEADER, SERVICE_NAME));
    }
}
