//! Request and response payloads for the medical transcription operations.

use super::types::{
    MedicalTranscriptionJob, MedicalTranscriptionJobSummary, MedicalTranscriptionSetting,
};
use crate::types::{
    LanguageCode, Media, MediaFormat, MedicalContentIdentificationType, MedicalJobType,
    Specialty, Tag, TranscriptionJobStatus,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Starts an asynchronous medical transcription job.
///
/// Unlike the standard engine, medical output always goes to a caller-owned
/// bucket, so `output_bucket_name` is expected by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartMedicalTranscriptionJobRequest {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_transcription_job_name: Option<String>,
    /// Only `en-US` is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    /// 16000-48000 Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_sample_rate_hertz: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// Bucket name without any `s3://` prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,
    #[serde(rename = "OutputEncryptionKMSKeyId", skip_serializing_if = "Option::is_none")]
    pub output_encryption_kms_key_id: Option<String>,
    #[serde(rename = "KMSEncryptionContext", skip_serializing_if = "Option::is_none")]
    pub kms_encryption_context: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<MedicalTranscriptionSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_identification_type: Option<MedicalContentIdentificationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<MedicalJobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl StartMedicalTranscriptionJobRequest {
    pub fn new(job_name: impl Into<String>, media: Media) -> Self {
        Self {
            medical_transcription_job_name: Some(job_name.into()),
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

    pub fn with_settings(mut self, settings: MedicalTranscriptionSetting) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_content_identification_type(
        mut self,
        content_identification_type: MedicalContentIdentificationType,
    ) -> Self {
        self.content_identification_type = Some(content_identification_type);
        self
    }

    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.specialty = Some(specialty);
        self
    }

    pub fn with_job_type(mut self, job_type: MedicalJobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartMedicalTranscriptionJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_transcription_job: Option<MedicalTranscriptionJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicalTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_transcription_job_name: Option<String>,
}

impl GetMedicalTranscriptionJobRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            medical_transcription_job_name: Some(job_name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicalTranscriptionJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_transcription_job: Option<MedicalTranscriptionJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMedicalTranscriptionJobsRequest {
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

impl ListMedicalTranscriptionJobsRequest {
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
pub struct ListMedicalTranscriptionJobsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TranscriptionJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_transcription_job_summaries: Option<Vec<MedicalTranscriptionJobSummary>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMedicalTranscriptionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_transcription_job_name: Option<String>,
}

impl DeleteMedicalTranscriptionJobRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            medical_transcription_job_name: Some(job_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_round_trips_through_json() {
        let request = StartMedicalTranscriptionJobRequest::new(
            "visit-42",
            Media::from_uri("s3://clinic/visit-42.flac"),
        )
        .with_language_code(LanguageCode::EnUs)
        .with_media_sample_rate_hertz(48_000)
        .with_output_bucket_name("clinic-transcripts")
        .with_specialty(Specialty::PrimaryCare)
        .with_job_type(MedicalJobType::Dictation);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["MedicalTranscriptionJobName"], "visit-42");
        assert_eq!(json["Type"], "DICTATION");

        let back: StartMedicalTranscriptionJobRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
