mod request_logger;

pub(crate) use request_logger::request_span_for;
pub use request_logger::{RequestLogger, TracingSpan};
