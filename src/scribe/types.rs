//! Records describing medical scribe jobs, which produce a clinical note in
//! addition to the transcript.

use crate::types::{
    Media, MedicalScribeJobStatus, MedicalScribeLanguageCode, MedicalScribeParticipantRole,
    Tag, VocabularyFilterMethod,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the scribe output landed: the verbatim transcript and the generated
/// clinical document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_document_uri: Option<String>,
}

/// Processing toggles for a scribe job.
///
/// Exactly one of `channel_identification` and `show_speaker_labels` must be
/// enabled; `max_speaker_labels` is required with the latter, and
/// `vocabulary_filter_method` is required when a filter name is set. The
/// service enforces all of this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_speaker_labels: Option<bool>,
    /// 2-10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speaker_labels: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_identification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_filter_method: Option<VocabularyFilterMethod>,
}

/// Maps an audio channel to the participant speaking on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeChannelDefinition {
    /// 0 for the first channel, 1 for the second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_role: Option<MedicalScribeParticipantRole>,
}

impl MedicalScribeChannelDefinition {
    pub fn new(channel_id: i32, participant_role: MedicalScribeParticipantRole) -> Self {
        Self {
            channel_id: Some(channel_id),
            participant_role: Some(participant_role),
        }
    }
}

/// A server-side asynchronous medical scribe task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeJob {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_status: Option<MedicalScribeJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<MedicalScribeLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_output: Option<MedicalScribeOutput>,
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
    pub settings: Option<MedicalScribeSettings>,
    /// Role granting access to the input bucket, output bucket, and KMS key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_definitions: Option<Vec<MedicalScribeChannelDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Abbreviated description of a medical scribe job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalScribeJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<MedicalScribeLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_status: Option<MedicalScribeJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_definitions_keep_insertion_order() {
        let job = MedicalScribeJob {
            channel_definitions: Some(vec![
                MedicalScribeChannelDefinition::new(0, MedicalScribeParticipantRole::Clinician),
                MedicalScribeChannelDefinition::new(1, MedicalScribeParticipantRole::Patient),
            ]),
            ..Default::default()
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["ChannelDefinitions"][0]["ChannelId"], 0);
        assert_eq!(json["ChannelDefinitions"][0]["ParticipantRole"], "CLINICIAN");
        assert_eq!(json["ChannelDefinitions"][1]["ParticipantRole"], "PATIENT");
    }

    #[test]
    fn output_uris_round_trip() {
        let output = MedicalScribeOutput {
            transcript_file_uri: Some("s3://clinic/scribe/transcript.json".into()),
            clinical_document_uri: Some("s3://clinic/scribe/note.json".into()),
        };
        let json = serde_json::to_value(&output).unwrap();
        let back: MedicalScribeOutput = serde_json::from_value(json).unwrap();
        assert_eq!(back, output);
    }
}
