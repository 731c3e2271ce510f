//! Dispatch seam between the typed client and the surrounding SDK runtime.
//!
//! The client never opens a socket. Every operation is handed to a
//! caller-supplied [`Dispatcher`] as an operation name plus a JSON payload;
//! signing, connection management, and the actual HTTP exchange live behind
//! that trait, outside this crate.

use async_trait::async_trait;

/// Identifies a single service call to the dispatcher.
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Wire-level operation name, e.g. `"StartTranscriptionJob"`.
    pub operation: &'static str,
    /// Client-generated correlation id. The transport may forward it as a
    /// header; applications can use it to link logs across layers.
    pub client_request_id: String,
}

impl OperationContext {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            client_request_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// The transport contract the surrounding runtime implements.
///
/// `dispatch` receives the serialized request body and returns the raw
/// response body. Service-level rejections are reported as
/// [`TransportError::Service`] with the server's error code and message
/// passed through untouched.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(
        &self,
        op: &OperationContext,
        payload: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The service answered with a modeled error. `error_type` is the
    /// server-reported exception code, `message` the human-readable reason.
    #[error("service returned {error_type}: {message}")]
    Service { error_type: String, message: String },

    /// Anything that kept the exchange from completing.
    #[error("transport error: {0}")]
    Other(String),
}
