//! Records describing medical transcription jobs.

use crate::types::{
    LanguageCode, Media, MediaFormat, MedicalContentIdentificationType, MedicalJobType,
    OutputLocationType, Specialty, Tag, TranscriptionJobStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location of a finished medical transcript. Medical output always lands in
/// a caller-owned bucket, so this is a plain object URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscript {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_file_uri: Option<String>,
}

/// Optional processing toggles for a medical transcription job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscriptionSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_speaker_labels: Option<bool>,
    /// 2-10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speaker_labels: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_identification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alternatives: Option<bool>,
    /// 2-10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_alternatives: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_name: Option<String>,
}

/// A server-side asynchronous medical transcription task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscriptionJob {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_transcription_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_status: Option<TranscriptionJobStatus>,
    /// US English (`en-US`) is the only language the medical engine accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    /// 16000-48000 Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_sample_rate_hertz: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<MedicalTranscript>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    /// Set when the status is `FAILED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<MedicalTranscriptionSetting>,
    /// Labels personal health information identified in the transcript.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_identification_type: Option<MedicalContentIdentificationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<MedicalJobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Abbreviated description of a medical transcription job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalTranscriptionJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_transcription_job_name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_status: Option<TranscriptionJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location_type: Option<OutputLocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_identification_type: Option<MedicalContentIdentificationType>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<MedicalJobType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_serializes_under_the_wire_name_type() {
        let job = MedicalTranscriptionJob {
            medical_transcription_job_name: Some("visit-42".into()),
            job_type: Some(MedicalJobType::Conversation),
            specialty: Some(Specialty::PrimaryCare),
            ..Default::default()
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["Type"], "CONVERSATION");
        assert_eq!(json["Specialty"], "PRIMARYCARE");
        assert!(json.get("JobType").is_none());
    }

    #[test]
    fn summary_equality_is_structural() {
        let a = MedicalTranscriptionJobSummary {
            medical_transcription_job_name: Some("visit-42".into()),
            transcription_job_status: Some(TranscriptionJobStatus::Queued),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.transcription_job_status = Some(TranscriptionJobStatus::Failed);
        assert_ne!(a, b);
    }
}
