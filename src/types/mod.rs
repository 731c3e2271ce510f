//! Core type definitions shared by every job family.
//!
//! ## Overview
//!
//! The model types mirror the service's wire schema one to one: PascalCase
//! field names, epoch-second timestamps, and closed string enumerations.
//! Every field is optional; the service decides which are required per
//! operation, and the optional client preflight
//! ([`crate::client::TranscribeClientBuilder::validate_requests`]) checks the
//! documented formats before a request leaves the process.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Media`] | Location of the input media file |
//! | [`Transcript`] | Location of a finished transcript |
//! | [`Tag`] | Key:value label attached to a resource |
//! | [`ContentRedaction`] | Transcript redaction settings |
//! | [`LanguageCode`] | Supported media languages |
//! | [`TranscriptionJobStatus`] | Job lifecycle states |

pub mod common;
pub mod enums;

pub use common::{ContentRedaction, Media, Tag, Transcript};
pub use enums::{
    BaseModelName, CallAnalyticsJobStatus, ClmLanguageCode, LanguageCode, MediaFormat,
    MedicalContentIdentificationType, MedicalJobType, MedicalScribeJobStatus,
    MedicalScribeLanguageCode, MedicalScribeParticipantRole, ModelStatus, OutputLocationType,
    ParticipantRole, PiiEntityType, RedactionOutput, RedactionType, Specialty, SubtitleFormat,
    TranscriptionJobStatus, VocabularyFilterMethod, VocabularyState,
};
