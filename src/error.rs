use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "TranscriptionJobName", "Settings.MaxSpeakerLabels")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected range, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "preflight", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Transcribe client.
/// Aggregates transport, serialization, and service-reported failures into
/// actionable, high-level categories.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// The service rejected the call. This is a pass-through carrier for the
    /// server-supplied error code and message; no recovery is attempted here.
    #[error("Service error {type_code}: {message}")]
    Service {
        kind: ServiceErrorKind,
        type_code: String,
        message: String,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new validation error without structured context
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error without structured context
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Build a `Service` error from a server-reported error code and message.
    pub fn service(type_code: impl Into<String>, message: impl Into<String>) -> Self {
        let type_code = type_code.into();
        Error::Service {
            kind: ServiceErrorKind::from_type_code(&type_code),
            type_code,
            message: message.into(),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// Whether retrying the same call can reasonably succeed.
    ///
    /// Only service-reported throttling and server faults qualify; everything
    /// else fails the same way on a second attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Service { kind, .. } => kind.retryable(),
            _ => false,
        }
    }
}

/// Service-reported error classes.
///
/// The service signals failures with a modeled exception code; each code maps
/// to one variant here, with retryability and fault-side metadata.
///
/// | Code                       | Fault  | Retryable |
/// |----------------------------|--------|-----------|
/// | `BadRequestException`      | client | no        |
/// | `ConflictException`        | client | no        |
/// | `NotFoundException`        | client | no        |
/// | `LimitExceededException`   | client | yes       |
/// | `InternalFailureException` | server | yes       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// The request didn't pass one or more service-side validation tests.
    /// For example, getting a transcript for a job that is not yet in a
    /// terminal state, or referencing a job that doesn't exist.
    BadRequest,
    /// A resource with the requested name already exists.
    Conflict,
    /// An internal error on the service side.
    InternalFailure,
    /// Too many requests, or the account hit a service quota.
    LimitExceeded,
    /// The requested resource couldn't be found.
    NotFound,
    /// The error code didn't match any modeled exception.
    Unclassified,
}

impl ServiceErrorKind {
    /// Map a server-reported error code to a kind.
    ///
    /// Accepts both the bare code (`BadRequestException`) and the namespaced
    /// form some deserializers surface (`com.example#BadRequestException`).
    pub fn from_type_code(code: &str) -> Self {
        let bare = code.rsplit('#').next().unwrap_or(code);
        match bare {
            "BadRequestException" => Self::BadRequest,
            "ConflictException" => Self::Conflict,
            "InternalFailureException" => Self::InternalFailure,
            "LimitExceededException" => Self::LimitExceeded,
            "NotFoundException" => Self::NotFound,
            _ => Self::Unclassified,
        }
    }

    /// Returns the canonical code string (e.g., `"BadRequestException"`).
    #[inline]
    pub fn type_code(&self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequestException",
            Self::Conflict => "ConflictException",
            Self::InternalFailure => "InternalFailureException",
            Self::LimitExceeded => "LimitExceededException",
            Self::NotFound => "NotFoundException",
            Self::Unclassified => "UnclassifiedException",
        }
    }

    /// Whether the service may accept a retried call.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::InternalFailure | Self::LimitExceeded)
    }

    /// Which side of the wire is at fault: `"client"` or `"server"`.
    #[inline]
    pub fn fault(&self) -> &'static str {
        match self {
            Self::InternalFailure | Self::Unclassified => "server",
            _ => "client",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_kind_round_trips_modeled_codes() {
        for code in [
            "BadRequestException",
            "ConflictException",
            "InternalFailureException",
            "LimitExceededException",
            "NotFoundException",
        ] {
            let kind = ServiceErrorKind::from_type_code(code);
            assert_eq!(kind.type_code(), code);
        }
    }

    #[test]
    fn service_kind_strips_namespace_prefix() {
        let kind = ServiceErrorKind::from_type_code("com.amazonaws.transcribe#NotFoundException");
        assert_eq!(kind, ServiceErrorKind::NotFound);
    }

    #[test]
    fn unmodeled_code_is_unclassified_and_not_retryable() {
        let kind = ServiceErrorKind::from_type_code("SerializationException");
        assert_eq!(kind, ServiceErrorKind::Unclassified);
        assert!(!kind.retryable());
    }

    #[test]
    fn service_error_preserves_server_message() {
        let err = Error::service(
            "BadRequestException",
            "The requested job couldn't be found or is not in a terminal state.",
        );
        assert!(err.to_string().contains("BadRequestException"));
        assert!(err.to_string().contains("terminal state"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn limit_exceeded_is_retryable() {
        let err = Error::service("LimitExceededException", "Rate exceeded");
        assert!(err.is_retryable());
    }

    #[test]
    fn context_formats_into_display() {
        let err = Error::validation_with_context(
            "value out of range",
            ErrorContext::new()
                .with_field_path("MediaSampleRateHertz")
                .with_source("preflight"),
        );
        let text = err.to_string();
        assert!(text.contains("field: MediaSampleRateHertz"));
        assert!(text.contains("source: preflight"));
    }
}
