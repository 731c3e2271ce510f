//! Request and response payloads for the call analytics operations.

use super::types::{
    CallAnalyticsJob, CallAnalyticsJobSettings, CallAnalyticsJobSummary, ChannelDefinition,
};
use crate::types::{CallAnalyticsJobStatus, Media};
use serde::{Deserialize, Serialize};

/// Starts an asynchronous call analytics job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartCallAnalyticsJobRequest {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`; unique within the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// Full object URI (or URI prefix) for the output, unlike the
    /// bucket-name/key split the other job families use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<String>,
    #[serde(rename = "OutputEncryptionKMSKeyId", skip_serializing_if = "Option::is_none")]
    pub output_encryption_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<CallAnalyticsJobSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_definitions: Option<Vec<ChannelDefinition>>,
}

impl StartCallAnalyticsJobRequest {
    pub fn new(job_name: impl Into<String>, media: Media) -> Self {
        Self {
            call_analytics_job_name: Some(job_name.into()),
            media: Some(media),
            ..Default::default()
        }
    }

    pub fn with_output_location(mut self, output_location: impl Into<String>) -> Self {
        self.output_location = Some(output_location.into());
        self
    }

    pub fn with_output_encryption_kms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.output_encryption_kms_key_id = Some(key_id.into());
        self
    }

    pub fn with_data_access_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.data_access_role_arn = Some(role_arn.into());
        self
    }

    pub fn with_settings(mut self, settings: CallAnalyticsJobSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_channel_definitions(mut self, channel_definitions: Vec<ChannelDefinition>) -> Self {
        self.channel_definitions = Some(channel_definitions);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartCallAnalyticsJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job: Option<CallAnalyticsJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCallAnalyticsJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_name: Option<String>,
}

impl GetCallAnalyticsJobRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            call_analytics_job_name: Some(job_name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCallAnalyticsJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job: Option<CallAnalyticsJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCallAnalyticsJobsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CallAnalyticsJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 1-100; the service default is 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListCallAnalyticsJobsRequest {
    pub fn with_status(mut self, status: CallAnalyticsJobStatus) -> Self {
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
pub struct ListCallAnalyticsJobsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CallAnalyticsJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_summaries: Option<Vec<CallAnalyticsJobSummary>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCallAnalyticsJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_analytics_job_name: Option<String>,
}

impl DeleteCallAnalyticsJobRequest {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            call_analytics_job_name: Some(job_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParticipantRole;

    #[test]
    fn start_request_round_trips() {
        let request = StartCallAnalyticsJobRequest::new(
            "call-311",
            Media::from_uri("s3://contact-center/call-311.wav"),
        )
        .with_output_location("s3://contact-center/analytics/")
        .with_data_access_role_arn("arn:aws:iam::111122223333:role/AnalyticsAccess")
        .with_channel_definitions(vec![
            ChannelDefinition::new(0, ParticipantRole::Agent),
            ChannelDefinition::new(1, ParticipantRole::Customer),
        ]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["CallAnalyticsJobName"], "call-311");
        assert_eq!(json["OutputLocation"], "s3://contact-center/analytics/");

        let back: StartCallAnalyticsJobRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
