//! # transcribe-lib-rust
//!
//! Typed Rust client for the Amazon Transcribe API: request/response models,
//! service errors, and a pluggable dispatch layer.
//!
//! ## Overview
//!
//! This library models the transcription service's wire schema as plain Rust
//! types and exposes one method per service operation on
//! [`TranscribeClient`]. It deliberately stops at the dispatch boundary: the
//! surrounding runtime supplies a [`Dispatcher`] that signs and sends the
//! serialized request, so signing, retries, connection pooling, and the HTTP
//! exchange itself live outside this crate.
//!
//! ## Core Philosophy
//!
//! - **Schema-Faithful**: every record serializes to the exact wire shape
//!   (PascalCase names, epoch-second timestamps, closed enum spellings)
//! - **Permissive Models**: all fields are optional; required-ness is the
//!   service's decision, surfaced as typed service errors
//! - **Transport-Agnostic**: one [`Dispatcher`] trait is the only seam to the
//!   outside world, which also makes the whole client trivially testable
//! - **Type-Safe**: closed string enumerations are real enums with exact
//!   wire spellings and `FromStr`/`Display` round-tripping
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use transcribe_lib_rust::{TranscribeClient, Media, LanguageCode};
//! use transcribe_lib_rust::jobs::{GetTranscriptionJobRequest, StartTranscriptionJobRequest};
//! # use transcribe_lib_rust::transport::{Dispatcher, OperationContext, TransportError};
//! # struct MyDispatcher;
//! # #[async_trait::async_trait]
//! # impl Dispatcher for MyDispatcher {
//! #     async fn dispatch(&self, _: &OperationContext, _: serde_json::Value)
//! #         -> Result<serde_json::Value, TransportError> { unimplemented!() }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> transcribe_lib_rust::Result<()> {
//!     let client = TranscribeClient::builder()
//!         .dispatcher(MyDispatcher /* your transport binding */)
//!         .build()?;
//!
//!     let request = StartTranscriptionJobRequest::new(
//!         "meeting-2024.05",
//!         Media::from_uri("s3://recordings/meeting.wav"),
//!     )
//!     .with_language_code(LanguageCode::EnUs);
//!
//!     let started = client.start_transcription_job(request).await?;
//!     let name = started
//!         .transcription_job
//!         .and_then(|job| job.transcription_job_name)
//!         .expect("service echoes the job name");
//!
//!     let job = client
//!         .get_transcription_job(GetTranscriptionJobRequest::new(name))
//!         .await?;
//!     println!("{:?}", job.transcription_job.and_then(|j| j.transcription_job_status));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Service client and builder |
//! | [`transport`] | Dispatcher trait the surrounding runtime implements |
//! | [`types`] | Shared records and closed enumerations |
//! | [`jobs`] | Standard transcription jobs |
//! | [`medical`] | Medical transcription jobs |
//! | [`scribe`] | Medical scribe jobs |
//! | [`analytics`] | Call analytics jobs |
//! | [`vocabulary`] | Custom vocabularies and vocabulary filters |
//! | [`language_model`] | Custom language models |
//! | [`tags`] | Resource tagging operations |

pub mod analytics;
pub mod client;
pub mod jobs;
pub mod language_model;
pub mod medical;
pub mod scribe;
pub mod tags;
pub mod transport;
pub mod types;
pub mod vocabulary;

// Re-export main types for convenience
pub use client::{TranscribeClient, TranscribeClientBuilder};
pub use transport::{Dispatcher, OperationContext, TransportError};
pub use types::{
    ContentRedaction, LanguageCode, Media, MediaFormat, Tag, Transcript, TranscriptionJobStatus,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ServiceErrorKind};
