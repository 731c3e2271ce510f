//! Integration tests for TranscribeClient against an in-process dispatcher.
//!
//! The dispatcher is the crate's only transport seam, so a scripted
//! implementation exercises the full request path: preflight, serialization,
//! operation naming, response decoding, and service-error mapping.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use transcribe_lib_rust::jobs::{
    DeleteTranscriptionJobRequest, GetTranscriptionJobRequest, ListTranscriptionJobsRequest,
    StartTranscriptionJobRequest,
};
use transcribe_lib_rust::tags::TagResourceRequest;
use transcribe_lib_rust::transport::{Dispatcher, OperationContext, TransportError};
use transcribe_lib_rust::vocabulary::ListVocabulariesRequest;
use transcribe_lib_rust::{
    Error, LanguageCode, Media, ServiceErrorKind, Tag, TranscribeClient, TranscriptionJobStatus,
};

/// Scripted dispatcher: answers from a queue and records every call.
struct ScriptedDispatcher {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedDispatcher {
    fn new(replies: Vec<Result<Value, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for ScriptedDispatcher {
    async fn dispatch(
        &self,
        op: &OperationContext,
        payload: Value,
    ) -> Result<Value, TransportError> {
        assert!(
            !op.client_request_id.is_empty(),
            "every call must carry a correlation id"
        );
        self.calls
            .lock()
            .unwrap()
            .push((op.operation.to_string(), payload));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted reply".into())))
    }
}

fn client_with(dispatcher: Arc<ScriptedDispatcher>) -> TranscribeClient {
    TranscribeClient::builder()
        .dispatcher_arc(dispatcher)
        .build()
        .expect("builder with dispatcher must succeed")
}

#[tokio::test]
async fn start_job_sends_wire_payload_and_decodes_response() {
    let dispatcher = ScriptedDispatcher::new(vec![Ok(json!({
        "TranscriptionJob": {
            "TranscriptionJobName": "meeting-1",
            "TranscriptionJobStatus": "IN_PROGRESS",
            "LanguageCode": "en-US",
            "CreationTime": 1_651_000_000,
            "Media": { "MediaFileUri": "s3://recordings/meeting.wav" }
        }
    }))]);
    let client = client_with(dispatcher.clone());

    let response = client
        .start_transcription_job(
            StartTranscriptionJobRequest::new("meeting-1", Media::from_uri("s3://recordings/meeting.wav"))
                .with_language_code(LanguageCode::EnUs),
        )
        .await
        .unwrap();

    let job = response.transcription_job.unwrap();
    assert_eq!(job.transcription_job_status, Some(TranscriptionJobStatus::InProgress));
    assert_eq!(
        job.creation_time.map(|t| t.timestamp()),
        Some(1_651_000_000)
    );

    let calls = dispatcher.calls();
    assert_eq!(calls.len(), 1);
    let (operation, payload) = &calls[0];
    assert_eq!(operation, "StartTranscriptionJob");
    assert_eq!(payload["TranscriptionJobName"], "meeting-1");
    assert_eq!(payload["LanguageCode"], "en-US");
    assert_eq!(payload["Media"]["MediaFileUri"], "s3://recordings/meeting.wav");
    // Unset request fields never reach the wire.
    assert!(payload.get("Settings").is_none());
    assert!(payload.get("OutputBucketName").is_none());
}

#[tokio::test]
async fn get_job_uses_its_own_operation_name() {
    let dispatcher = ScriptedDispatcher::new(vec![Ok(json!({
        "TranscriptionJob": {
            "TranscriptionJobName": "meeting-1",
            "TranscriptionJobStatus": "COMPLETED",
            "Transcript": { "TranscriptFileUri": "s3://out/meeting-1.json" }
        }
    }))]);
    let client = client_with(dispatcher.clone());

    let response = client
        .get_transcription_job(GetTranscriptionJobRequest::new("meeting-1"))
        .await
        .unwrap();

    assert_eq!(dispatcher.calls()[0].0, "GetTranscriptionJob");
    let transcript = response.transcription_job.unwrap().transcript.unwrap();
    assert_eq!(
        transcript.transcript_file_uri.as_deref(),
        Some("s3://out/meeting-1.json")
    );
}

#[tokio::test]
async fn delete_job_accepts_an_empty_reply_body() {
    let dispatcher = ScriptedDispatcher::new(vec![Ok(Value::Null)]);
    let client = client_with(dispatcher.clone());

    client
        .delete_transcription_job(DeleteTranscriptionJobRequest::new("meeting-1"))
        .await
        .unwrap();

    assert_eq!(dispatcher.calls()[0].0, "DeleteTranscriptionJob");
}

#[tokio::test]
async fn service_rejection_maps_to_a_typed_error_with_the_server_message() {
    let dispatcher = ScriptedDispatcher::new(vec![Err(TransportError::Service {
        error_type: "BadRequestException".into(),
        message: "The requested job couldn't be found.".into(),
    })]);
    let client = client_with(dispatcher);

    let err = client
        .get_transcription_job(GetTranscriptionJobRequest::new("missing"))
        .await
        .unwrap_err();

    match err {
        Error::Service { kind, message, .. } => {
            assert_eq!(kind, ServiceErrorKind::BadRequest);
            assert_eq!(message, "The requested job couldn't be found.");
        }
        other => panic!("expected a service error, got: {other}"),
    }
}

#[tokio::test]
async fn throttling_is_surfaced_as_retryable() {
    let dispatcher = ScriptedDispatcher::new(vec![Err(TransportError::Service {
        error_type: "LimitExceededException".into(),
        message: "Rate exceeded".into(),
    })]);
    let client = client_with(dispatcher);

    let err = client
        .list_transcription_jobs(ListTranscriptionJobsRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn preflight_rejects_before_the_dispatcher_sees_the_call() {
    let dispatcher = ScriptedDispatcher::new(vec![]);
    let client = client_with(dispatcher.clone());

    let err = client
        .start_transcription_job(StartTranscriptionJobRequest::new(
            "bad name with spaces",
            Media::from_uri("s3://b/a.wav"),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    assert!(dispatcher.calls().is_empty());
}

#[tokio::test]
async fn preflight_can_be_disabled_on_the_builder() {
    let dispatcher = ScriptedDispatcher::new(vec![Ok(json!({}))]);
    let client = TranscribeClient::builder()
        .dispatcher_arc(dispatcher.clone())
        .validate_requests(false)
        .build()
        .unwrap();

    // Same malformed name now travels to the dispatcher untouched.
    client
        .start_transcription_job(StartTranscriptionJobRequest::new(
            "bad name with spaces",
            Media::from_uri("s3://b/a.wav"),
        ))
        .await
        .unwrap();

    assert_eq!(dispatcher.calls().len(), 1);
    assert_eq!(dispatcher.calls()[0].1["TranscriptionJobName"], "bad name with spaces");
}

#[tokio::test]
async fn list_vocabularies_decodes_summaries_in_order() {
    let dispatcher = ScriptedDispatcher::new(vec![Ok(json!({
        "Status": "READY",
        "NextToken": "page-2",
        "Vocabularies": [
            { "VocabularyName": "alpha", "LanguageCode": "en-US", "VocabularyState": "READY" },
            { "VocabularyName": "beta", "LanguageCode": "de-DE", "VocabularyState": "READY" }
        ]
    }))]);
    let client = client_with(dispatcher);

    let response = client
        .list_vocabularies(ListVocabulariesRequest::default().with_max_results(2))
        .await
        .unwrap();

    let names: Vec<_> = response
        .vocabularies
        .unwrap()
        .into_iter()
        .filter_map(|v| v.vocabulary_name)
        .collect();
    assert_eq!(names, vec!["alpha", "beta"]);
    assert_eq!(response.next_token.as_deref(), Some("page-2"));
}

#[tokio::test]
async fn tag_resource_round_trips_an_empty_response_object() {
    let dispatcher = ScriptedDispatcher::new(vec![Ok(json!({}))]);
    let client = client_with(dispatcher.clone());

    client
        .tag_resource(TagResourceRequest::new(
            "arn:aws:transcribe:us-west-2:111122223333:transcription-job/meeting-1",
            vec![Tag::new("team", "support")],
        ))
        .await
        .unwrap();

    let (operation, payload) = &dispatcher.calls()[0];
    assert_eq!(operation, "TagResource");
    assert_eq!(payload["Tags"][0]["Key"], "team");
}

#[tokio::test]
async fn transport_failures_pass_through_unclassified() {
    let dispatcher = ScriptedDispatcher::new(vec![Err(TransportError::Other(
        "connection reset".into(),
    ))]);
    let client = client_with(dispatcher);

    let err = client
        .get_transcription_job(GetTranscriptionJobRequest::new("meeting-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(!err.is_retryable());
}
