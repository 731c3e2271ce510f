//! Builder for [`TranscribeClient`].

use super::TranscribeClient;
use crate::error::{Error, ErrorContext};
use crate::transport::Dispatcher;
use crate::Result;
use std::sync::Arc;

/// Assembles a [`TranscribeClient`] from a dispatcher and client options.
///
/// The dispatcher is the one mandatory piece: it is the bridge to the
/// surrounding runtime that signs and sends requests.
pub struct TranscribeClientBuilder {
    dispatcher: Option<Arc<dyn Dispatcher>>,
    validate_requests: bool,
}

impl TranscribeClientBuilder {
    pub fn new() -> Self {
        Self {
            dispatcher: None,
            validate_requests: true,
        }
    }

    /// Set the transport implementation that will carry every operation.
    pub fn dispatcher(mut self, dispatcher: impl Dispatcher + 'static) -> Self {
        self.dispatcher = Some(Arc::new(dispatcher));
        self
    }

    /// Like [`dispatcher`](Self::dispatcher), for an already-shared instance.
    pub fn dispatcher_arc(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Toggle client-side preflight validation of documented field formats.
    /// On by default; switch off to send requests exactly as constructed.
    pub fn validate_requests(mut self, validate: bool) -> Self {
        self.validate_requests = validate;
        self
    }

    pub fn build(self) -> Result<TranscribeClient> {
        let dispatcher = self.dispatcher.ok_or_else(|| {
            Error::configuration_with_context(
                "a dispatcher is required",
                ErrorContext::new().with_source("client_builder"),
            )
        })?;
        Ok(TranscribeClient {
            dispatcher,
            validate_requests: self.validate_requests,
        })
    }
}

impl Default for TranscribeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
