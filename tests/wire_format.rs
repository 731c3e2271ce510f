//! Wire-shape tests across the model surface: PascalCase names, closed enum
//! spellings, epoch-second timestamps, and omission of unset fields.

use serde_json::json;
use std::collections::HashMap;
use transcribe_lib_rust::analytics::{CallAnalyticsJobSettings, StartCallAnalyticsJobRequest};
use transcribe_lib_rust::jobs::{
    GetTranscriptionJobResponse, LanguageIdSettings, ListTranscriptionJobsResponse, Settings,
    StartTranscriptionJobRequest, Subtitles,
};
use transcribe_lib_rust::medical::MedicalTranscriptionJob;
use transcribe_lib_rust::scribe::GetMedicalScribeJobResponse;
use transcribe_lib_rust::types::{
    ContentRedaction, LanguageCode, Media, MediaFormat, PiiEntityType, RedactionOutput,
    RedactionType, SubtitleFormat, Tag, TranscriptionJobStatus, VocabularyFilterMethod,
};

#[test]
fn start_request_serializes_every_set_field_once() {
    let request = StartTranscriptionJobRequest::new(
        "meeting-2024.05",
        Media::from_uri("s3://recordings/meeting.wav"),
    )
    .with_language_code(LanguageCode::EnUs)
    .with_media_format(MediaFormat::Wav)
    .with_media_sample_rate_hertz(44_100)
    .with_settings(Settings {
        vocabulary_name: Some("street-names".into()),
        show_speaker_labels: Some(true),
        max_speaker_labels: Some(4),
        vocabulary_filter_name: Some("profanity".into()),
        vocabulary_filter_method: Some(VocabularyFilterMethod::Mask),
        ..Default::default()
    })
    .with_content_redaction(
        ContentRedaction::new(RedactionType::Pii, RedactionOutput::RedactedAndUnredacted)
            .with_pii_entity_types(vec![PiiEntityType::Ssn]),
    )
    .with_subtitles(Subtitles {
        formats: Some(vec![SubtitleFormat::Vtt, SubtitleFormat::Srt]),
        output_start_index: Some(1),
    })
    .with_tags(vec![Tag::new("team", "support")]);

    let payload = serde_json::to_value(&request).unwrap();
    let object = payload.as_object().unwrap();

    // A JSON object cannot hold a duplicate key, so presence plus the exact
    // expected key count shows each set field appears exactly once.
    let expected = [
        "TranscriptionJobName",
        "LanguageCode",
        "MediaSampleRateHertz",
        "MediaFormat",
        "Media",
        "Settings",
        "ContentRedaction",
        "Subtitles",
        "Tags",
    ];
    assert_eq!(object.len(), expected.len());
    for key in expected {
        assert!(object.contains_key(key), "missing {key}");
    }

    assert_eq!(payload["Settings"]["VocabularyFilterMethod"], "mask");
    assert_eq!(payload["ContentRedaction"]["RedactionOutput"], "redacted_and_unredacted");
    assert_eq!(payload["Subtitles"]["Formats"], json!(["vtt", "srt"]));
}

#[test]
fn get_response_decodes_a_realistic_service_answer() {
    let body = json!({
        "TranscriptionJob": {
            "TranscriptionJobName": "meeting-2024.05",
            "TranscriptionJobStatus": "COMPLETED",
            "LanguageCode": "en-US",
            "MediaSampleRateHertz": 44100,
            "MediaFormat": "wav",
            "Media": { "MediaFileUri": "s3://recordings/meeting.wav" },
            "Transcript": { "TranscriptFileUri": "s3://out/meeting-2024.05.json" },
            "CreationTime": 1_651_000_000,
            "StartTime": 1_651_000_002,
            "CompletionTime": 1_651_000_090,
            "Settings": {
                "ShowSpeakerLabels": true,
                "MaxSpeakerLabels": 4
            },
            "IdentifyLanguage": true,
            "IdentifiedLanguageScore": 0.9712,
            "Tags": [ { "Key": "team", "Value": "support" } ]
        }
    });

    let response: GetTranscriptionJobResponse = serde_json::from_value(body).unwrap();
    let job = response.transcription_job.unwrap();
    assert_eq!(job.transcription_job_status, Some(TranscriptionJobStatus::Completed));
    assert_eq!(job.media_format, Some(MediaFormat::Wav));
    assert_eq!(job.settings.unwrap().max_speaker_labels, Some(4));
    assert!(job.identified_language_score.unwrap() > 0.97);
    assert_eq!(
        job.completion_time.unwrap().timestamp() - job.start_time.unwrap().timestamp(),
        88
    );
    assert_eq!(job.tags.unwrap()[0], Tag::new("team", "support"));
}

#[test]
fn list_response_tolerates_missing_collections() {
    // A page with no summaries at all still decodes.
    let response: ListTranscriptionJobsResponse = serde_json::from_value(json!({
        "Status": "QUEUED"
    }))
    .unwrap();
    assert_eq!(response.status, Some(TranscriptionJobStatus::Queued));
    assert!(response.transcription_job_summaries.is_none());
    assert!(response.next_token.is_none());
}

#[test]
fn unknown_enum_values_fail_loudly() {
    let result: Result<GetTranscriptionJobResponse, _> = serde_json::from_value(json!({
        "TranscriptionJob": { "TranscriptionJobStatus": "ARCHIVED" }
    }));
    assert!(result.is_err());
}

#[test]
fn medical_job_round_trips_with_the_renamed_type_field() {
    let body = json!({
        "MedicalTranscriptionJobName": "visit-42",
        "TranscriptionJobStatus": "QUEUED",
        "LanguageCode": "en-US",
        "Specialty": "PRIMARYCARE",
        "Type": "CONVERSATION",
        "ContentIdentificationType": "PHI"
    });
    let job: MedicalTranscriptionJob = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(serde_json::to_value(&job).unwrap(), body);
}

#[test]
fn scribe_response_decodes_output_and_channels() {
    let response: GetMedicalScribeJobResponse = serde_json::from_value(json!({
        "MedicalScribeJob": {
            "MedicalScribeJobName": "consult-7",
            "MedicalScribeJobStatus": "COMPLETED",
            "LanguageCode": "en-US",
            "MedicalScribeOutput": {
                "TranscriptFileUri": "s3://clinic/consult-7/transcript.json",
                "ClinicalDocumentUri": "s3://clinic/consult-7/note.json"
            },
            "ChannelDefinitions": [
                { "ChannelId": 0, "ParticipantRole": "CLINICIAN" },
                { "ChannelId": 1, "ParticipantRole": "PATIENT" }
            ]
        }
    }))
    .unwrap();

    let job = response.medical_scribe_job.unwrap();
    let output = job.medical_scribe_output.unwrap();
    assert!(output.clinical_document_uri.unwrap().ends_with("note.json"));
    assert_eq!(job.channel_definitions.unwrap().len(), 2);
}

#[test]
fn analytics_settings_serialize_language_id_map_keys_as_codes() {
    let request = StartCallAnalyticsJobRequest::new("call-311", Media::from_uri("s3://cc/call.wav"))
        .with_settings(CallAnalyticsJobSettings {
            language_options: Some(vec![LanguageCode::EnUs, LanguageCode::EsUs]),
            language_id_settings: Some(HashMap::from([(
                LanguageCode::EsUs,
                LanguageIdSettings {
                    vocabulary_name: Some("es-terms".into()),
                    ..Default::default()
                },
            )])),
            ..Default::default()
        });

    let payload = serde_json::to_value(&request).unwrap();
    assert_eq!(
        payload["Settings"]["LanguageIdSettings"]["es-US"]["VocabularyName"],
        "es-terms"
    );
}
