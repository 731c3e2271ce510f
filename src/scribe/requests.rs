//! Request and response payloads for the medical scribe operations.

use super::types::{
    MedicalScribeChannelDefinition, MedicalScribeJob, MedicalScribeJobSummary,
    MedicalScribeSettings,
};
use crate::types::{Media, MedicalScribeJobStatus, Tag};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Starts an asynchronous medical scribe job.
///
/// The service expects `media`, `output_bucket_name`, `data_access_role_arn`,
/// and `settings` to all be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartMedicalScribeJobRequest {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`; unique within the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// Bucket name without any `s3://` prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_bucket_name: Option<String>,
    #[serde(rename = "OutputEncryptionKMSKeyId", skip_serializing_if = "Option::is_none")]
    pub output_encryption_kms_key_id: Option<String>,
    #[serde(rename = "KMSEncryptionContext", skip_serializing_if = "Option::is_none")]
    pub kms_encryption_context: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<MedicalScribeSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_definitions: Option<Vec<MedicalScribeChannelDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl StartMedicalScribeJobRequest {
    pub fn new(job_name: impl Into<String>, media: Media) -> Self {
        Self {
            medical_scribe_job_name: Some(job_name.into()),
            media: Some(media),
            ..Default::default()
        }
    }

    pub fn with_output_bucket_name(mut self, bucket: impl Into<String>) -> Self {
        self.output_bucket_name = Some(bucket.into());
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

    pub fn with_data_access_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.data_access_role_arn = Some(role_arn.into());
        self
    }

    pub fn with_settings(mut self, settings: MedicalScribeSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_channel_definitions(
        mut self,
        channel_definitions: Vec<MedicalScribeChannelDefinition>,
    ) -> Self {
        self.channel_definitions = Some(channel_definitions);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartMedicalScribeJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job: Option<MedicalScribeJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicalScribeJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_name: Option<String>,
}

impl GetMedicalScribeJobRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            medical_scribe_job_name: Some(job_name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMedicalScribeJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job: Option<MedicalScribeJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMedicalScribeJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicalScribeJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 1-100; the service default is 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListMedicalScribeJobsRequest {
    pub fn with_status(mut self, status: MedicalScribeJobStatus) -> Self {
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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMedicalScribeJobsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicalScribeJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_summaries: Option<Vec<MedicalScribeJobSummary>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMedicalScribeJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_scribe_job_name: Option<String>,
}

impl DeleteMedicalScribeJobRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            medical_scribe_job_name: Some(job_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MedicalScribeParticipantRole;

    #[test]
    fn start_request_carries_the_scribe_specific_fields() {
        let request = StartMedicalScribeJobRequest::new(
            "consult-7",
            Media::from_uri("s3://clinic/consult-7.wav"),
        )
        .with_output_bucket_name("clinic-notes")
        .with_data_access_role_arn("arn:aws:iam::111122223333:role/ScribeAccess")
        .with_settings(MedicalScribeSettings {
            channel_identification: Some(true),
            ..Default::default()
        })
        .with_channel_definitions(vec![MedicalScribeChannelDefinition::new(
            0,
            MedicalScribeParticipantRole::Clinician,
        )]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["MedicalScribeJobName"], "consult-7");
        assert_eq!(json["OutputBucketName"], "clinic-notes");
        assert_eq!(json["Settings"]["ChannelIdentification"], true);

        let back: StartMedicalScribeJobRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
