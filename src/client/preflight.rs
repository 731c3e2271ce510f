//! Client-side request validation.
//!
//! The service documents a format for every constrained field (name patterns,
//! ARN shapes, sample-rate ranges) and rejects violations with
//! `BadRequestException`. Preflight applies the same checks before a request
//! leaves the process, so the caller gets a structured [`Error::Validation`]
//! with the offending field path instead of a round trip.
//!
//! Only fields that are present are checked; whether a field is required at
//! all is the service's call. Preflight is on by default and can be switched
//! off via [`TranscribeClientBuilder::validate_requests`](super::TranscribeClientBuilder::validate_requests).

use crate::analytics::StartCallAnalyticsJobRequest;
use crate::error::{Error, ErrorContext};
use crate::jobs::{Settings, StartTranscriptionJobRequest};
use crate::language_model::{CreateLanguageModelRequest, InputDataConfig};
use crate::medical::{MedicalTranscriptionSetting, StartMedicalTranscriptionJobRequest};
use crate::scribe::{MedicalScribeSettings, StartMedicalScribeJobRequest};
use crate::types::Media;
use crate::vocabulary::{
    CreateMedicalVocabularyRequest, CreateVocabularyFilterRequest, CreateVocabularyRequest,
    UpdateMedicalVocabularyRequest, UpdateVocabularyFilterRequest, UpdateVocabularyRequest,
};
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// `^[0-9a-zA-Z._-]+$`, 1-200: job, vocabulary, filter, and model names.
static RESOURCE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-zA-Z._-]+$").unwrap());

/// IAM role ARNs, 20-2048 characters.
static IAM_ROLE_ARN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^arn:(aws|aws-cn|aws-us-gov|aws-iso-?[a-z]?):iam::[0-9]{0,63}:role/[A-Za-z0-9:_/+=,@.-]{0,1024}$")
        .unwrap()
});

/// Media and output URIs, 1-2000 characters.
static STORAGE_URI: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(s3://|http(s*)://).+$").unwrap());

/// Training-data URIs for language models.
static S3_URI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^s3://[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9](/.*)?$").unwrap());

/// Output bucket names, at most 64 characters, without the `s3://` prefix.
static BUCKET_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9]$").unwrap());

/// KMS key ids, aliases, and ARNs, 1-2048 characters.
static KMS_KEY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9:_/+=,@.-]{0,2048}$").unwrap());

/// ARNs of taggable service resources, 1-1011 characters.
static RESOURCE_ARN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^arn:aws(-[^:]+)?:transcribe:[a-zA-Z0-9-]*:[0-9]{12}:[a-zA-Z-]*/[0-9a-zA-Z._-]+$")
        .unwrap()
});

fn invalid(field: &str, details: impl Into<String>) -> Error {
    Error::validation_with_context(
        format!("{field} is not valid"),
        ErrorContext::new()
            .with_field_path(field)
            .with_details(details)
            .with_source("preflight"),
    )
}

pub(crate) fn resource_name(field: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else { return Ok(()) };
    if value.is_empty() || value.len() > 200 {
        return Err(invalid(field, "length must be 1-200"));
    }
    if !RESOURCE_NAME.is_match(value) {
        return Err(invalid(field, "allowed characters are 0-9 a-z A-Z . _ -"));
    }
    Ok(())
}

pub(crate) fn iam_role_arn(field: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else { return Ok(()) };
    if value.len() < 20 || value.len() > 2048 || !IAM_ROLE_ARN.is_match(value) {
        return Err(invalid(field, "expected an IAM role ARN like arn:aws:iam::111122223333:role/Admin"));
    }
    Ok(())
}

pub(crate) fn storage_uri(field: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else { return Ok(()) };
    if value.len() > 2000 || !STORAGE_URI.is_match(value) {
        return Err(invalid(field, "expected an s3:// or http(s):// URI of at most 2000 characters"));
    }
    Ok(())
}

pub(crate) fn media(media: Option<&Media>) -> Result<()> {
    let Some(media) = media else { return Ok(()) };
    storage_uri("Media.MediaFileUri", media.media_file_uri.as_deref())?;
    storage_uri("Media.RedactedMediaFileUri", media.redacted_media_file_uri.as_deref())
}

pub(crate) fn output_bucket(field: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else { return Ok(()) };
    if value.len() > 64 || !BUCKET_NAME.is_match(value) {
        return Err(invalid(field, "expected a bucket name without the s3:// prefix"));
    }
    Ok(())
}

pub(crate) fn kms_key_id(field: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else { return Ok(()) };
    if value.is_empty() || value.len() > 2048 || !KMS_KEY_ID.is_match(value) {
        return Err(invalid(field, "expected a KMS key id, alias, or ARN"));
    }
    Ok(())
}

pub(crate) fn resource_arn(field: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else { return Ok(()) };
    if value.is_empty() || value.len() > 1011 || !RESOURCE_ARN.is_match(value) {
        return Err(invalid(field, "expected a transcribe resource ARN"));
    }
    Ok(())
}

/// `min` is 8000 for the standard and analytics engines, 16000 for medical.
pub(crate) fn sample_rate(field: &str, value: Option<i32>, min: i32) -> Result<()> {
    let Some(value) = value else { return Ok(()) };
    if value < min || value > 48_000 {
        return Err(invalid(field, format!("sample rate must be {min}-48000 Hz")));
    }
    Ok(())
}

fn bounded(field: &str, value: Option<i32>, min: i32, max: i32) -> Result<()> {
    let Some(value) = value else { return Ok(()) };
    if value < min || value > max {
        return Err(invalid(field, format!("value must be {min}-{max}")));
    }
    Ok(())
}

pub(crate) fn max_results(value: Option<i32>) -> Result<()> {
    bounded("MaxResults", value, 1, 100)
}

fn settings(settings: Option<&Settings>) -> Result<()> {
    let Some(settings) = settings else { return Ok(()) };
    resource_name("Settings.VocabularyName", settings.vocabulary_name.as_deref())?;
    resource_name("Settings.VocabularyFilterName", settings.vocabulary_filter_name.as_deref())?;
    bounded("Settings.MaxSpeakerLabels", settings.max_speaker_labels, 2, 10)?;
    bounded("Settings.MaxAlternatives", settings.max_alternatives, 2, 10)
}

fn medical_settings(settings: Option<&MedicalTranscriptionSetting>) -> Result<()> {
    let Some(settings) = settings else { return Ok(()) };
    resource_name("Settings.VocabularyName", settings.vocabulary_name.as_deref())?;
    bounded("Settings.MaxSpeakerLabels", settings.max_speaker_labels, 2, 10)?;
    bounded("Settings.MaxAlternatives", settings.max_alternatives, 2, 10)
}

fn scribe_settings(settings: Option<&MedicalScribeSettings>) -> Result<()> {
    let Some(settings) = settings else { return Ok(()) };
    resource_name("Settings.VocabularyName", settings.vocabulary_name.as_deref())?;
    resource_name("Settings.VocabularyFilterName", settings.vocabulary_filter_name.as_deref())?;
    bounded("Settings.MaxSpeakerLabels", settings.max_speaker_labels, 2, 10)
}

pub(crate) fn start_transcription_job(request: &StartTranscriptionJobRequest) -> Result<()> {
    resource_name("TranscriptionJobName", request.transcription_job_name.as_deref())?;
    media(request.media.as_ref())?;
    sample_rate("MediaSampleRateHertz", request.media_sample_rate_hertz, 8000)?;
    output_bucket("OutputBucketName", request.output_bucket_name.as_deref())?;
    kms_key_id("OutputEncryptionKMSKeyId", request.output_encryption_kms_key_id.as_deref())?;
    settings(request.settings.as_ref())?;
    if let Some(model_settings) = &request.model_settings {
        resource_name("ModelSettings.LanguageModelName", model_settings.language_model_name.as_deref())?;
    }
    if let Some(execution) = &request.job_execution_settings {
        iam_role_arn("JobExecutionSettings.DataAccessRoleArn", execution.data_access_role_arn.as_deref())?;
    }
    Ok(())
}

pub(crate) fn start_medical_transcription_job(
    request: &StartMedicalTranscriptionJobRequest,
) -> Result<()> {
    resource_name("MedicalTranscriptionJobName", request.medical_transcription_job_name.as_deref())?;
    media(request.media.as_ref())?;
    sample_rate("MediaSampleRateHertz", request.media_sample_rate_hertz, 16_000)?;
    output_bucket("OutputBucketName", request.output_bucket_name.as_deref())?;
    kms_key_id("OutputEncryptionKMSKeyId", request.output_encryption_kms_key_id.as_deref())?;
    medical_settings(request.settings.as_ref())
}

pub(crate) fn start_medical_scribe_job(request: &StartMedicalScribeJobRequest) -> Result<()> {
    resource_name("MedicalScribeJobName", request.medical_scribe_job_name.as_deref())?;
    media(request.media.as_ref())?;
    output_bucket("OutputBucketName", request.output_bucket_name.as_deref())?;
    kms_key_id("OutputEncryptionKMSKeyId", request.output_encryption_kms_key_id.as_deref())?;
    iam_role_arn("DataAccessRoleArn", request.data_access_role_arn.as_deref())?;
    scribe_settings(request.settings.as_ref())
}

pub(crate) fn start_call_analytics_job(request: &StartCallAnalyticsJobRequest) -> Result<()> {
    resource_name("CallAnalyticsJobName", request.call_analytics_job_name.as_deref())?;
    media(request.media.as_ref())?;
    storage_uri("OutputLocation", request.output_location.as_deref())?;
    kms_key_id("OutputEncryptionKMSKeyId", request.output_encryption_kms_key_id.as_deref())?;
    iam_role_arn("DataAccessRoleArn", request.data_access_role_arn.as_deref())?;
    if let Some(settings) = &request.settings {
        resource_name("Settings.VocabularyName", settings.vocabulary_name.as_deref())?;
        resource_name("Settings.VocabularyFilterName", settings.vocabulary_filter_name.as_deref())?;
        resource_name("Settings.LanguageModelName", settings.language_model_name.as_deref())?;
    }
    Ok(())
}

pub(crate) fn create_vocabulary(request: &CreateVocabularyRequest) -> Result<()> {
    resource_name("VocabularyName", request.vocabulary_name.as_deref())?;
    storage_uri("VocabularyFileUri", request.vocabulary_file_uri.as_deref())
}

pub(crate) fn update_vocabulary(request: &UpdateVocabularyRequest) -> Result<()> {
    resource_name("VocabularyName", request.vocabulary_name.as_deref())?;
    storage_uri("VocabularyFileUri", request.vocabulary_file_uri.as_deref())
}

pub(crate) fn create_medical_vocabulary(request: &CreateMedicalVocabularyRequest) -> Result<()> {
    resource_name("VocabularyName", request.vocabulary_name.as_deref())?;
    storage_uri("VocabularyFileUri", request.vocabulary_file_uri.as_deref())
}

pub(crate) fn update_medical_vocabulary(request: &UpdateMedicalVocabularyRequest) -> Result<()> {
    resource_name("VocabularyName", request.vocabulary_name.as_deref())?;
    storage_uri("VocabularyFileUri", request.vocabulary_file_uri.as_deref())
}

pub(crate) fn create_vocabulary_filter(request: &CreateVocabularyFilterRequest) -> Result<()> {
    resource_name("VocabularyFilterName", request.vocabulary_filter_name.as_deref())?;
    storage_uri("VocabularyFilterFileUri", request.vocabulary_filter_file_uri.as_deref())
}

pub(crate) fn update_vocabulary_filter(request: &UpdateVocabularyFilterRequest) -> Result<()> {
    resource_name("VocabularyFilterName", request.vocabulary_filter_name.as_deref())?;
    storage_uri("VocabularyFilterFileUri", request.vocabulary_filter_file_uri.as_deref())
}

pub(crate) fn create_language_model(request: &CreateLanguageModelRequest) -> Result<()> {
    resource_name("ModelName", request.model_name.as_deref())?;
    input_data_config(request.input_data_config.as_ref())
}

fn input_data_config(config: Option<&InputDataConfig>) -> Result<()> {
    let Some(config) = config else { return Ok(()) };
    for (field, uri) in [
        ("InputDataConfig.S3Uri", config.s3_uri.as_deref()),
        ("InputDataConfig.TuningDataS3Uri", config.tuning_data_s3_uri.as_deref()),
    ] {
        if let Some(uri) = uri {
            if uri.len() > 2000 || !S3_URI.is_match(uri) {
                return Err(invalid(field, "expected an s3:// URI"));
            }
        }
    }
    iam_role_arn("InputDataConfig.DataAccessRoleArn", config.data_access_role_arn.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaFormat;

    #[test]
    fn accepts_a_well_formed_start_request() {
        let request = StartTranscriptionJobRequest::new(
            "meeting-2024.05",
            Media::from_uri("s3://recordings/meeting.wav"),
        )
        .with_media_format(MediaFormat::Wav)
        .with_media_sample_rate_hertz(44_100)
        .with_output_bucket_name("transcripts")
        .with_output_encryption_kms_key_id("alias/ExampleAlias");
        assert!(start_transcription_job(&request).is_ok());
    }

    #[test]
    fn rejects_a_job_name_with_spaces() {
        let request =
            StartTranscriptionJobRequest::new("meeting one", Media::from_uri("s3://b/a.wav"));
        let err = start_transcription_job(&request).unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("TranscriptionJobName")
        );
    }

    #[test]
    fn rejects_a_name_longer_than_200_characters() {
        let request = StartTranscriptionJobRequest::new("a".repeat(201), Media::default());
        assert!(start_transcription_job(&request).is_err());
    }

    #[test]
    fn rejects_out_of_range_sample_rates_per_engine() {
        let standard = StartTranscriptionJobRequest::new("j", Media::default())
            .with_media_sample_rate_hertz(7999);
        assert!(start_transcription_job(&standard).is_err());

        // 8 kHz audio is fine for the standard engine but below the medical floor.
        let medical = StartMedicalTranscriptionJobRequest::new("j", Media::default())
            .with_media_sample_rate_hertz(8000);
        assert!(start_medical_transcription_job(&medical).is_err());

        let medical_ok = StartMedicalTranscriptionJobRequest::new("j", Media::default())
            .with_media_sample_rate_hertz(16_000);
        assert!(start_medical_transcription_job(&medical_ok).is_ok());
    }

    #[test]
    fn rejects_a_media_uri_without_a_storage_scheme() {
        let request =
            StartTranscriptionJobRequest::new("j", Media::from_uri("file:///tmp/audio.wav"));
        let err = start_transcription_job(&request).unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("Media.MediaFileUri")
        );
    }

    #[test]
    fn rejects_a_malformed_iam_role_arn() {
        let request = StartMedicalScribeJobRequest::new("j", Media::default())
            .with_data_access_role_arn("arn:aws:s3:::not-a-role");
        assert!(start_medical_scribe_job(&request).is_err());

        let request = StartMedicalScribeJobRequest::new("j", Media::default())
            .with_data_access_role_arn("arn:aws:iam::111122223333:role/ScribeAccess");
        assert!(start_medical_scribe_job(&request).is_ok());
    }

    #[test]
    fn rejects_a_bucket_name_with_uppercase_or_prefix() {
        let request = StartTranscriptionJobRequest::new("j", Media::default())
            .with_output_bucket_name("s3://transcripts");
        assert!(start_transcription_job(&request).is_err());

        let request = StartTranscriptionJobRequest::new("j", Media::default())
            .with_output_bucket_name("Transcripts");
        assert!(start_transcription_job(&request).is_err());
    }

    #[test]
    fn rejects_speaker_label_counts_outside_2_to_10() {
        let request = StartTranscriptionJobRequest::new("j", Media::default()).with_settings(
            Settings {
                show_speaker_labels: Some(true),
                max_speaker_labels: Some(11),
                ..Default::default()
            },
        );
        let err = start_transcription_job(&request).unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("Settings.MaxSpeakerLabels")
        );
    }

    #[test]
    fn rejects_out_of_range_max_results() {
        assert!(max_results(Some(0)).is_err());
        assert!(max_results(Some(101)).is_err());
        assert!(max_results(Some(100)).is_ok());
        assert!(max_results(None).is_ok());
    }

    #[test]
    fn validates_language_model_input_uris() {
        let request = CreateLanguageModelRequest::new(
            "support-calls",
            crate::types::ClmLanguageCode::EnUs,
            crate::types::BaseModelName::WideBand,
            InputDataConfig::new("https://example.com/corpus", "arn:aws:iam::111122223333:role/R"),
        );
        let err = create_language_model(&request).unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("InputDataConfig.S3Uri")
        );
    }

    #[test]
    fn validates_taggable_resource_arns() {
        assert!(resource_arn(
            "ResourceArn",
            Some("arn:aws:transcribe:us-west-2:111122223333:transcription-job/meeting-1"),
        )
        .is_ok());
        assert!(resource_arn("ResourceArn", Some("arn:aws:transcribe:bad")).is_err());
        assert!(resource_arn("ResourceArn", None).is_ok());
    }

    #[test]
    fn absent_fields_are_not_checked() {
        // Preflight checks formats, not presence; an empty request passes.
        assert!(start_transcription_job(&StartTranscriptionJobRequest::default()).is_ok());
        assert!(start_call_analytics_job(&StartCallAnalyticsJobRequest::default()).is_ok());
    }
}
