//! Request and response payloads for the transcription-job operations.

use super::types::{
    JobExecutionSettings, LanguageIdSettings, ModelSettings, Settings, Subtitles,
    TranscriptionJob, TranscriptionJobSummary,
};
use crate::types::{ContentRedaction, LanguageCode, Media, MediaFormat, Tag, TranscriptionJobStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Starts an asynchronous job to transcribe speech to text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartTranscriptionJobRequest {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`; must be unique within the
    /// account or the service answers with `ConflictException`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_name: Option<String>,
    /// Leave unset and enable `identify_language` to let the service detect
    /// the language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    /// 8000-48000 Hz. Omit to let the service read it from the media header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_sample_rate_hertz: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// Bucket for the finished transcript, without any `s3://` prefix.
    /// Unset means the transcript lives in a service-managed bucket and the
    /// response carries a time-limited download URI instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,
    #[serde(rename = "OutputEncryptionKMSKeyId", skip_serializing_if = "Option::is_none")]
    pub output_encryption_kms_key_id: Option<String>,
    #[serde(rename = "KMSEncryptionContext", skip_serializing_if = "Option::is_none")]
    pub kms_encryption_context: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_settings: Option<ModelSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_execution_settings: Option<JobExecutionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_redaction: Option<ContentRedaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identify_language: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identify_multiple_languages: Option<bool>,
    /// Candidate languages to restrict automatic identification to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Vec<LanguageCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitles: Option<Subtitles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id_settings: Option<HashMap<LanguageCode, LanguageIdSettings>>,
}

impl StartTranscriptionJobRequest {
    pub fn new(job_name: impl Into<String>, media: Media) -> Self {
        Self {
            transcription_job_name: Some(job_name.into()),
            media: Some(media),
            ..Default::default()
        }
    }

    pub fn with_language_code(mut self, language_code: LanguageCode) -> Self {
        self.language_code = Some(language_code);
        self
    }

    pub fn with_media_sample_rate_hertz(mut self, hertz: i32) -> Self {
        self.media_sample_rate_hertz = Some(hertz);
        self
    }

    pub fn with_media_format(mut self, media_format: MediaFormat) -> Self {
        self.media_format = Some(media_format);
        self
    }

    pub fn with_output_bucket_name(mut self, bucket: impl Into<String>) -> Self {
        self.output_bucket_name = Some(bucket.into());
        self
    }

    pub fn with_output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    pub fn with_output_encryption_kms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.output_encryption_kms_key_id = Some(key_id.into());
        self
    }

    pub fn with_kms_encryption_context(mut self, context: HashMap<String, String>) -> Self {
        self.kms_encryption_context = Some(context);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_model_settings(mut self, model_settings: ModelSettings) -> Self {
        self.model_settings = Some(model_settings);
        self
    }

    pub fn with_job_execution_settings(mut self, settings: JobExecutionSettings) -> Self {
        self.job_execution_settings = Some(settings);
        self
    }

    pub fn with_content_redaction(mut self, redaction: ContentRedaction) -> Self {
        self.content_redaction = Some(redaction);
        self
    }

    pub fn with_identify_language(mut self, identify: bool) -> Self {
        self.identify_language = Some(identify);
        self
    }

    pub fn with_identify_multiple_languages(mut self, identify: bool) -> Self {
        self.identify_multiple_languages = Some(identify);
        self
    }

    pub fn with_language_options(mut self, options: Vec<LanguageCode>) -> Self {
        self.language_options = Some(options);
        self
    }

    pub fn with_subtitles(mut self, subtitles: Subtitles) -> Self {
        self.subtitles = Some(subtitles);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_language_id_settings(
        mut self,
        settings: HashMap<LanguageCode, LanguageIdSettings>,
    ) -> Self {
        self.language_id_settings = Some(settings);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartTranscriptionJobResponse {
    /// The job as the service accepted it, with status `QUEUED` or
    /// `IN_PROGRESS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job: Option<TranscriptionJob>,
}

/// Returns details about a transcription job, including the transcript
/// location once the job reaches `COMPLETED`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_name: Option<String>,
}

impl GetTranscriptionJobRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            transcription_job_name: Some(job_name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTranscriptionJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job: Option<TranscriptionJob>,
}

/// Lists transcription jobs, newest first, optionally filtered by status or
/// name substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTranscriptionJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TranscriptionJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 1-100; the service default is 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListTranscriptionJobsRequest {
    pub fn with_status(mut self, status: TranscriptionJobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_job_name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.job_name_contains = Some(fragment.into());
        self
    }

    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTranscriptionJobsResponse {
    /// Echo of the status filter, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TranscriptionJobStatus>,
    /// Present when more results remain; pass it back verbatim to continue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_summaries: Option<Vec<TranscriptionJobSummary>>,
}

/// Removes a transcription job and its transcript from the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_job_name: Option<String>,
}

impl DeleteTranscriptionJobRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            transcription_job_name: Some(job_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluent_setters_round_trip() {
        let request = StartTranscriptionJobRequest::new("meeting-1", Media::from_uri("s3://b/a.wav"))
            .with_language_code(LanguageCode::EnUs)
            .with_media_format(MediaFormat::Wav)
            .with_media_sample_rate_hertz(16_000)
            .with_output_bucket_name("transcripts")
            .with_tags(vec![Tag::new("team", "support")]);

        assert_eq!(request.transcription_job_name.as_deref(), Some("meeting-1"));
        assert_eq!(request.language_code, Some(LanguageCode::EnUs));
        assert_eq!(request.media_sample_rate_hertz, Some(16_000));
        assert_eq!(request.output_bucket_name.as_deref(), Some("transcripts"));
        assert_eq!(request.tags.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn kms_fields_use_exact_wire_names() {
        let request = StartTranscriptionJobRequest::new("m", Media::from_uri("s3://b/a.wav"))
            .with_output_encryption_kms_key_id("alias/ExampleAlias")
            .with_kms_encryption_context(HashMap::from([("scope".to_string(), "audio".to_string())]));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["OutputEncryptionKMSKeyId"], "alias/ExampleAlias");
        assert_eq!(json["KMSEncryptionContext"]["scope"], "audio");
        assert!(json.get("OutputEncryptionKmsKeyId").is_none());
    }

    #[test]
    fn unset_fields_are_omitted_from_the_payload() {
        let request = StartTranscriptionJobRequest::new("m", Media::from_uri("s3://b/a.wav"));
        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("TranscriptionJobName"));
        assert!(object.contains_key("Media"));
    }

    #[test]
    fn list_request_serializes_filters() {
        let request = ListTranscriptionJobsRequest::default()
            .with_status(TranscriptionJobStatus::Completed)
            .with_max_results(25);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Status"], "COMPLETED");
        assert_eq!(json["MaxResults"], 25);
    }
}
