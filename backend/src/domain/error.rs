//! Transport-agnostic error type shared by domain services and adapters.
//!
//! Inbound adapters map [`Error`] onto protocol-specific envelopes; see
//! `inbound::http::error` for the Actix mapping.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A backing store is unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    InternalError,
}

/// Error payload returned to clients.
///
/// ## Invariants
/// - `message` is human readable and safe to show to users; internal detail is
///   redacted by the HTTP adapter before serialisation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[schema(example = "Name is required")]
    pub message: String,
    /// Correlation identifier for tracing this error across systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    pub trace_id: Option<String>,
    /// Supplementary structured details, e.g. per-field validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the ambient trace identifier when one is
    /// in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach a trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn constructors_set_codes() {
        assert_eq!(Error::invalid_request("bad").code, ErrorCode::InvalidRequest);
        assert_eq!(Error::not_found("missing").code, ErrorCode::NotFound);
        assert_eq!(
            Error::service_unavailable("down").code,
            ErrorCode::ServiceUnavailable
        );
        assert_eq!(Error::internal("boom").code, ErrorCode::InternalError);
    }

    #[rstest]
    fn details_and_trace_id_round_trip_through_json() {
        let error = Error::not_found("employee not found")
            .with_trace_id("abc")
            .with_details(json!({ "id": "123" }));

        let serialised = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(serialised["code"], "not_found");
        assert_eq!(serialised["traceId"], "abc");
        assert_eq!(serialised["details"]["id"], "123");
    }

    #[rstest]
    fn optional_fields_are_omitted_when_absent() {
        let error = Error::invalid_request("bad");
        let serialised = serde_json::to_value(&error).expect("serialise error");
        assert!(serialised.get("traceId").is_none());
        assert!(serialised.get("details").is_none());
    }
}
