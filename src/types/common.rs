//! Records shared across every job family.

use super::enums::{PiiEntityType, RedactionOutput, RedactionType};
use serde::{Deserialize, Serialize};

/// A key:value label attached to a service resource.
///
/// Keys are 1-128 characters, values 0-256; the service enforces both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Location of the input media file.
///
/// URIs must point into object storage (`s3://...`) or be HTTP(S) reachable,
/// 1-2000 characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Media {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_file_uri: Option<String>,
    /// Set only for call analytics jobs that produced a redacted copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redacted_media_file_uri: Option<String>,
}

impl Media {
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            media_file_uri: Some(uri.into()),
            redacted_media_file_uri: None,
        }
    }
}

/// Location of a finished transcript.
///
/// For jobs that wrote to a caller-owned bucket this is a plain object URI;
/// for service-managed output it is a time-limited download URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transcript {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redacted_transcript_file_uri: Option<String>,
}

/// Settings for transcript redaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentRedaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redaction_type: Option<RedactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redaction_output: Option<RedactionOutput>,
    /// Which PII categories to redact. Unset means all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii_entity_types: Option<Vec<PiiEntityType>>,
}

impl ContentRedaction {
    pub fn new(redaction_type: RedactionType, redaction_output: RedactionOutput) -> Self {
        Self {
            redaction_type: Some(redaction_type),
            redaction_output: Some(redaction_output),
            pii_entity_types: None,
        }
    }

    pub fn with_pii_entity_types(mut self, entity_types: Vec<PiiEntityType>) -> Self {
        self.pii_entity_types = Some(entity_types);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_equality_is_structural() {
        let a = Tag::new("Department", "Sales");
        let b = Tag::new("Department", "Sales");
        let c = Tag::new("Department", "Support");
        assert_eq!(a, b);
        assert_ne!(a, c);

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn media_serializes_under_wire_names_and_omits_unset() {
        let media = Media::from_uri("s3://bucket/meeting.wav");
        let json = serde_json::to_value(&media).unwrap();
        assert_eq!(json["MediaFileUri"], "s3://bucket/meeting.wav");
        assert!(json.get("RedactedMediaFileUri").is_none());
    }

    #[test]
    fn content_redaction_round_trips() {
        let redaction = ContentRedaction::new(RedactionType::Pii, RedactionOutput::Redacted)
            .with_pii_entity_types(vec![PiiEntityType::Ssn, PiiEntityType::Email]);
        let json = serde_json::to_value(&redaction).unwrap();
        assert_eq!(json["RedactionType"], "PII");
        assert_eq!(json["RedactionOutput"], "redacted");
        assert_eq!(json["PiiEntityTypes"][0], "SSN");

        let back: ContentRedaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, redaction);
    }
}
