//! Records describing call analytics jobs: two-channel agent/customer audio
//! transcribed with per-channel attribution.

use crate::jobs::LanguageIdSettings;
use crate::types::{
    CallAnalyticsJobStatus, ContentRedaction, LanguageCode, Media, MediaFormat, ParticipantRole,
    Transcript, VocabularyFilterMethod,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps an audio channel to the participant speaking on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelDefinition {
    /// 0 for the first channel, 1 for the second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_role: Option<ParticipantRole>,
}

impl ChannelDefinition {
    pub fn new(channel_id: i32, participant_role: ParticipantRole) -> Self {
        Self {
            channel_id: Some(channel_id),
            participant_role: Some(participant_role),
        }
    }
}

/// Processing settings for a call analytics job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallAnalyticsJobSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_filter_name: Option<String>,
    /// Required when `vocabulary_filter_name` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_filter_method: Option<VocabularyFilterMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_redaction: Option<ContentRedaction>,
    /// Candidate languages for automatic identification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Vec<LanguageCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id_settings: Option<HashMap<LanguageCode, LanguageIdSettings>>,
}

/// A server-side asynchronous call analytics task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallAnalyticsJob {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_status: Option<CallAnalyticsJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    /// 8000-48000 Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_sample_rate_hertz: Option<i32>,
    /// Call analytics accepts mp3, mp4, wav, flac, ogg, and webm input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Transcript>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    /// Set when the status is `FAILED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Role used to read the input media and write the analytics output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    /// Confidence (0-1) in the identified language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_language_score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<CallAnalyticsJobSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_definitions: Option<Vec<ChannelDefinition>>,
}

/// Abbreviated description of a call analytics job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallAnalyticsJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_status: Option<CallAnalyticsJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_nest_redaction_and_language_id() {
        let mut id_settings = HashMap::new();
        id_settings.insert(LanguageCode::EsUs, LanguageIdSettings::default());
        let settings = CallAnalyticsJobSettings {
            vocabulary_name: Some("support-terms".into()),
            language_options: Some(vec![LanguageCode::EnUs, LanguageCode::EsUs]),
            language_id_settings: Some(id_settings),
            ..Default::default()
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["VocabularyName"], "support-terms");
        assert_eq!(json["LanguageOptions"][1], "es-US");
        assert!(json["LanguageIdSettings"]["es-US"].is_object());
    }

    #[test]
    fn job_with_identified_score_still_compares_structurally() {
        let a = CallAnalyticsJob {
            call_analytics_job_name: Some("call-311".into()),
            identified_language_score: Some(0.93),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.identified_language_score = Some(0.71);
        assert_ne!(a, b);
    }
}
