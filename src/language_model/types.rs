//! Records describing custom language models.

use crate::types::{BaseModelName, ClmLanguageCode, ModelStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the training (and optional tuning) text lives, and the role that can
/// read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputDataConfig {
    #[serde(rename = "S3Uri", skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(rename = "TuningDataS3Uri", skip_serializing_if = "Option::is_none")]
    pub tuning_data_s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
}

impl InputDataConfig {
    pub fn new(s3_uri: impl Into<String>, data_access_role_arn: impl Into<String>) -> Self {
        Self {
            s3_uri: Some(s3_uri.into()),
            tuning_data_s3_uri: None,
            data_access_role_arn: Some(data_access_role_arn.into()),
        }
    }

    pub fn with_tuning_data_s3_uri(mut self, uri: impl Into<String>) -> Self {
        self.tuning_data_s3_uri = Some(uri.into());
        self
    }
}

/// A custom language model and its training state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageModel {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<ClmLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_name: Option<BaseModelName>,
    /// Only a `COMPLETED` model can be used in a job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_status: Option<ModelStatus>,
    /// True when a newer base model exists and this model can be retrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_availability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
}
