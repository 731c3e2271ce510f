//! Records describing custom vocabularies and vocabulary filters.

use crate::types::{LanguageCode, VocabularyState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a custom vocabulary, as returned by the list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VocabularyInfo {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime<Utc>>,
    /// Only a `READY` vocabulary can be used in a job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_state: Option<VocabularyState>,
}

/// Summary of a vocabulary filter, as returned by the list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VocabularyFilterInfo {
    /// 1-200 characters, `^[0-9a-zA-Z._-]+$`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn vocabulary_info_round_trips() {
        let info = VocabularyInfo {
            vocabulary_name: Some("street-names".into()),
            language_code: Some(LanguageCode::EnAu),
            last_modified_time: Some(Utc.timestamp_opt(1_651_000_000, 0).unwrap()),
            vocabulary_state: Some(VocabularyState::Ready),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["VocabularyState"], "READY");
        let back: VocabularyInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, info);
    }
}
