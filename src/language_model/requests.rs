//! Request and response payloads for the custom language model operations.

use super::types::{InputDataConfig, LanguageModel};
use crate::types::{BaseModelName, ClmLanguageCode, ModelStatus, Tag};
use serde::{Deserialize, Serialize};

/// Starts training a custom language model from text in object storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLanguageModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<ClmLanguageCode>,
    /// `WideBand` for audio sampled at 16 kHz or higher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_name: Option<BaseModelName>,
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`; unique within the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateLanguageModelRequest {
    pub fn new(
        model_name: impl Into<String>,
        language_code: ClmLanguageCode,
        base_model_name: BaseModelName,
        input_data_config: InputDataConfig,
    ) -> Self {
        Self {
            language_code: Some(language_code),
            base_model_name: Some(base_model_name),
            model_name: Some(model_name.into()),
            input_data_config: Some(input_data_config),
            tags: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLanguageModelResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<ClmLanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model_name: Option<BaseModelName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    /// `IN_PROGRESS` until training finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_status: Option<ModelStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLanguageModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl DescribeLanguageModelRequest {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: Some(model_name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLanguageModelResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_model: Option<LanguageModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLanguageModelsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_equals: Option<ModelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// 1-100; the service default is 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListLanguageModelsRequest {
    pub fn with_status_equals(mut self, status: ModelStatus) -> Self {
        self.status_equals = Some(status);
        self
    }

    pub fn with_name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.name_contains = Some(fragment.into());
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
pub struct ListLanguageModelsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<LanguageModel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLanguageModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl DeleteLanguageModelRequest {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: Some(model_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_round_trips() {
        let request = CreateLanguageModelRequest::new(
            "support-calls",
            ClmLanguageCode::EnUs,
            BaseModelName::WideBand,
            InputDataConfig::new(
                "s3://corpus/training/",
                "arn:aws:iam::111122223333:role/CorpusAccess",
            ),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["LanguageCode"], "en-US");
        assert_eq!(json["InputDataConfig"]["S3Uri"], "s3://corpus/training/");
        let back: CreateLanguageModelRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
