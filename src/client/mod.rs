//! The typed service client.
//!
//! [`TranscribeClient`] owns no connection state. Every operation method
//! serializes its request, hands it to the caller-supplied
//! [`Dispatcher`](crate::transport::Dispatcher), and decodes the typed
//! response, mapping service-reported rejections into
//! [`Error::Service`](crate::Error::Service). Preflight validation of
//! documented field formats runs first unless disabled on the builder.

mod builder;
mod preflight;

pub use builder::TranscribeClientBuilder;

use crate::analytics::{
    DeleteCallAnalyticsJobRequest, GetCallAnalyticsJobRequest, GetCallAnalyticsJobResponse,
    ListCallAnalyticsJobsRequest, ListCallAnalyticsJobsResponse, StartCallAnalyticsJobRequest,
    StartCallAnalyticsJobResponse,
};
use crate::jobs::{
    DeleteTranscriptionJobRequest, GetTranscriptionJobRequest, GetTranscriptionJobResponse,
    ListTranscriptionJobsRequest, ListTranscriptionJobsResponse, StartTranscriptionJobRequest,
    StartTranscriptionJobResponse,
};
use crate::language_model::{
    CreateLanguageModelRequest, CreateLanguageModelResponse, DeleteLanguageModelRequest,
    DescribeLanguageModelRequest, DescribeLanguageModelResponse, ListLanguageModelsRequest,
    ListLanguageModelsResponse,
};
use crate::medical::{
    DeleteMedicalTranscriptionJobRequest, GetMedicalTranscriptionJobRequest,
    GetMedicalTranscriptionJobResponse, ListMedicalTranscriptionJobsRequest,
    ListMedicalTranscriptionJobsResponse, StartMedicalTranscriptionJobRequest,
    StartMedicalTranscriptionJobResponse,
};
use crate::scribe::{
    DeleteMedicalScribeJobRequest, GetMedicalScribeJobRequest, GetMedicalScribeJobResponse,
    ListMedicalScribeJobsRequest, ListMedicalScribeJobsResponse, StartMedicalScribeJobRequest,
    StartMedicalScribeJobResponse,
};
use crate::tags::{
    ListTagsForResourceRequest, ListTagsForResourceResponse, TagResourceRequest,
    TagResourceResponse, UntagResourceRequest, UntagResourceResponse,
};
use crate::transport::{Dispatcher, OperationContext, TransportError};
use crate::vocabulary::{
    CreateMedicalVocabularyRequest, CreateMedicalVocabularyResponse,
    CreateVocabularyFilterRequest, CreateVocabularyFilterResponse, CreateVocabularyRequest,
    CreateVocabularyResponse, DeleteMedicalVocabularyRequest, DeleteVocabularyFilterRequest,
    DeleteVocabularyRequest, GetMedicalVocabularyRequest, GetMedicalVocabularyResponse,
    GetVocabularyFilterRequest, GetVocabularyFilterResponse, GetVocabularyRequest,
    GetVocabularyResponse, ListMedicalVocabulariesRequest, ListMedicalVocabulariesResponse,
    ListVocabulariesRequest, ListVocabulariesResponse, ListVocabularyFiltersRequest,
    ListVocabularyFiltersResponse, UpdateMedicalVocabularyRequest,
    UpdateMedicalVocabularyResponse, UpdateVocabularyFilterRequest,
    UpdateVocabularyFilterResponse, UpdateVocabularyRequest, UpdateVocabularyResponse,
};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Typed client for the transcription service.
///
/// Cheap to clone; clones share the dispatcher.
#[derive(Clone)]
pub struct TranscribeClient {
    pub(crate) dispatcher: Arc<dyn Dispatcher>,
    pub(crate) validate_requests: bool,
}

impl TranscribeClient {
    pub fn builder() -> TranscribeClientBuilder {
        TranscribeClientBuilder::new()
    }

    async fn call<Req, Resp>(&self, operation: &'static str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let value = self.dispatch(operation, request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Variant of [`call`](Self::call) for operations whose success answer has
    /// no body.
    async fn call_unit<Req: Serialize>(
        &self,
        operation: &'static str,
        request: &Req,
    ) -> Result<()> {
        self.dispatch(operation, request).await.map(|_| ())
    }

    async fn dispatch<Req: Serialize>(
        &self,
        operation: &'static str,
        request: &Req,
    ) -> Result<serde_json::Value> {
        let op = OperationContext::new(operation);
        let payload = serde_json::to_value(request)?;
        let start = Instant::now();

        match self.dispatcher.dispatch(&op, payload).await {
            Ok(value) => {
                debug!(
                    operation,
                    client_request_id = op.client_request_id.as_str(),
                    duration_ms = start.elapsed().as_millis(),
                    "transcribe request completed"
                );
                // Empty success bodies may surface as null; decode them as {}.
                if value.is_null() {
                    Ok(serde_json::Value::Object(Default::default()))
                } else {
                    Ok(value)
                }
            }
            Err(TransportError::Service { error_type, message }) => {
                info!(
                    operation,
                    client_request_id = op.client_request_id.as_str(),
                    error_type = error_type.as_str(),
                    duration_ms = start.elapsed().as_millis(),
                    "transcribe request rejected by service"
                );
                Err(Error::service(error_type, message))
            }
            Err(other) => {
                info!(
                    operation,
                    client_request_id = op.client_request_id.as_str(),
                    duration_ms = start.elapsed().as_millis(),
                    "transcribe request failed in transport"
                );
                Err(Error::Transport(other))
            }
        }
    }

    // -- Transcription jobs -------------------------------------------------

    /// Start an asynchronous job to transcribe speech to text.
    pub async fn start_transcription_job(
        &self,
        request: StartTranscriptionJobRequest,
    ) -> Result<StartTranscriptionJobResponse> {
        if self.validate_requests {
            preflight::start_transcription_job(&request)?;
        }
        self.call("StartTranscriptionJob", &request).await
    }

    /// Return information about a transcription job. Once the status is
    /// `COMPLETED`, the response carries the transcript location.
    pub async fn get_transcription_job(
        &self,
        request: GetTranscriptionJobRequest,
    ) -> Result<GetTranscriptionJobResponse> {
        if self.validate_requests {
            preflight::resource_name(
                "TranscriptionJobName",
                request.transcription_job_name.as_deref(),
            )?;
        }
        self.call("GetTranscriptionJob", &request).await
    }

    /// List transcription jobs, optionally filtered by status or name.
    pub async fn list_transcription_jobs(
        &self,
        request: ListTranscriptionJobsRequest,
    ) -> Result<ListTranscriptionJobsResponse> {
        if self.validate_requests {
            preflight::max_results(request.max_results)?;
        }
        self.call("ListTranscriptionJobs", &request).await
    }

    /// Delete a previously submitted transcription job and its transcript.
    pub async fn delete_transcription_job(
        &self,
        request: DeleteTranscriptionJobRequest,
    ) -> Result<()> {
        if self.validate_requests {
            preflight::resource_name(
                "TranscriptionJobName",
                request.transcription_job_name.as_deref(),
            )?;
        }
        self.call_unit("DeleteTranscriptionJob", &request).await
    }

    // -- Medical transcription jobs -----------------------------------------

    /// Start a transcription job with the medical engine.
    pub async fn start_medical_transcription_job(
        &self,
        request: StartMedicalTranscriptionJobRequest,
    ) -> Result<StartMedicalTranscriptionJobResponse> {
        if self.validate_requests {
            preflight::start_medical_transcription_job(&request)?;
        }
        self.call("StartMedicalTranscriptionJob", &request).await
    }

    pub async fn get_medical_transcription_job(
        &self,
        request: GetMedicalTranscriptionJobRequest,
    ) -> Result<GetMedicalTranscriptionJobResponse> {
        if self.validate_requests {
            preflight::resource_name(
                "MedicalTranscriptionJobName",
                request.medical_transcription_job_name.as_deref(),
            )?;
        }
        self.call("GetMedicalTranscriptionJob", &request).await
    }

    pub async fn list_medical_transcription_jobs(
        &self,
        request: ListMedicalTranscriptionJobsRequest,
    ) -> Result<ListMedicalTranscriptionJobsResponse> {
        if self.validate_requests {
            preflight::max_results(request.max_results)?;
        }
        self.call("ListMedicalTranscriptionJobs", &request).await
    }

    pub async fn delete_medical_transcription_job(
        &self,
        request: DeleteMedicalTranscriptionJobRequest,
    ) -> Result<()> {
        if self.validate_requests {
            preflight::resource_name(
                "MedicalTranscriptionJobName",
                request.medical_transcription_job_name.as_deref(),
            )?;
        }
        self.call_unit("DeleteMedicalTranscriptionJob", &request).await
    }

    // -- Medical scribe jobs ------------------------------------------------

    /// Start a medical scribe job, which produces a clinical note alongside
    /// the transcript.
    pub async fn start_medical_scribe_job(
        &self,
        request: StartMedicalScribeJobRequest,
    ) -> Result<StartMedicalScribeJobResponse> {
        if self.validate_requests {
            preflight::start_medical_scribe_job(&request)?;
        }
        self.call("StartMedicalScribeJob", &request).await
    }

    pub async fn get_medical_scribe_job(
        &self,
        request: GetMedicalScribeJobRequest,
    ) -> Result<GetMedicalScribeJobResponse> {
        if self.validate_requests {
            preflight::resource_name(
                "MedicalScribeJobName",
                request.medical_scribe_job_name.as_deref(),
            )?;
        }
        self.call("GetMedicalScribeJob", &request).await
    }

    pub async fn list_medical_scribe_jobs(
        &self,
        request: ListMedicalScribeJobsRequest,
    ) -> Result<ListMedicalScribeJobsResponse> {
        if self.validate_requests {
            preflight::max_results(request.max_results)?;
        }
        self.call("ListMedicalScribeJobs", &request).await
    }

    pub async fn delete_medical_scribe_job(
        &self,
        request: DeleteMedicalScribeJobRequest,
    ) -> Result<()> {
        if self.validate_requests {
            preflight::resource_name(
                "MedicalScribeJobName",
                request.medical_scribe_job_name.as_deref(),
            )?;
        }
        self.call_unit("DeleteMedicalScribeJob", &request).await
    }

    // -- Call analytics jobs ------------------------------------------------

    /// Start an analytics job over two-channel agent/customer audio.
    pub async fn start_call_analytics_job(
        &self,
        request: StartCallAnalyticsJobRequest,
    ) -> Result<StartCallAnalyticsJobResponse> {
        if self.validate_requests {
            preflight::start_call_analytics_job(&request)?;
        }
        self.call("StartCallAnalyticsJob", &request).await
    }

    pub async fn get_call_analytics_job(
        &self,
        request: GetCallAnalyticsJobRequest,
    ) -> Result<GetCallAnalyticsJobResponse> {
        if self.validate_requests {
            preflight::resource_name(
                "CallAnalyticsJobName",
                request.call_analytics_job_name.as_deref(),
            )?;
        }
        self.call("GetCallAnalyticsJob", &request).await
    }

    pub async fn list_call_analytics_jobs(
        &self,
        request: ListCallAnalyticsJobsRequest,
    ) -> Result<ListCallAnalyticsJobsResponse> {
        if self.validate_requests {
            preflight::max_results(request.max_results)?;
        }
        self.call("ListCallAnalyticsJobs", &request).await
    }

    pub async fn delete_call_analytics_job(
        &self,
        request: DeleteCallAnalyticsJobRequest,
    ) -> Result<()> {
        if self.validate_requests {
            preflight::resource_name(
                "CallAnalyticsJobName",
                request.call_analytics_job_name.as_deref(),
            )?;
        }
        self.call_unit("DeleteCallAnalyticsJob", &request).await
    }

    // -- Custom vocabularies ------------------------------------------------

    /// Create a custom vocabulary the transcription engines can draw on.
    pub async fn create_vocabulary(
        &self,
        request: CreateVocabularyRequest,
    ) -> Result<CreateVocabularyResponse> {
        if self.validate_requests {
            preflight::create_vocabulary(&request)?;
        }
        self.call("CreateVocabulary", &request).await
    }

    pub async fn get_vocabulary(
        &self,
        request: GetVocabularyRequest,
    ) -> Result<GetVocabularyResponse> {
        if self.validate_requests {
            preflight::resource_name("VocabularyName", request.vocabulary_name.as_deref())?;
        }
        self.call("GetVocabulary", &request).await
    }

    pub async fn list_vocabularies(
        &self,
        request: ListVocabulariesRequest,
    ) -> Result<ListVocabulariesResponse> {
        if self.validate_requests {
            preflight::max_results(request.max_results)?;
        }
        self.call("ListVocabularies", &request).await
    }

    /// Replace the contents of an existing vocabulary.
    pub async fn update_vocabulary(
        &self,
        request: UpdateVocabularyRequest,
    ) -> Result<UpdateVocabularyResponse> {
        if self.validate_requests {
            preflight::update_vocabulary(&request)?;
        }
        self.call("UpdateVocabulary", &request).await
    }

    pub async fn delete_vocabulary(&self, request: DeleteVocabularyRequest) -> Result<()> {
        if self.validate_requests {
            preflight::resource_name("VocabularyName", request.vocabulary_name.as_deref())?;
        }
        self.call_unit("DeleteVocabulary", &request).await
    }

    // -- Medical vocabularies -----------------------------------------------

    pub async fn create_medical_vocabulary(
        &self,
        request: CreateMedicalVocabularyRequest,
    ) -> Result<CreateMedicalVocabularyResponse> {
        if self.validate_requests {
            preflight::create_medical_vocabulary(&request)?;
        }
        self.call("CreateMedicalVocabulary", &request).await
    }

    pub async fn get_medical_vocabulary(
        &self,
        request: GetMedicalVocabularyRequest,
    ) -> Result<GetMedicalVocabularyResponse> {
        if self.validate_requests {
            preflight::resource_name("VocabularyName", request.vocabulary_name.as_deref())?;
        }
        self.call("GetMedicalVocabulary", &request).await
    }

    pub async fn list_medical_vocabularies(
        &self,
        request: ListMedicalVocabulariesRequest,
    ) -> Result<ListMedicalVocabulariesResponse> {
        if self.validate_requests {
            preflight::max_results(request.max_results)?;
        }
        self.call("ListMedicalVocabularies", &request).await
    }

    pub async fn update_medical_vocabulary(
        &self,
        request: UpdateMedicalVocabularyRequest,
    ) -> Result<UpdateMedicalVocabularyResponse> {
        if self.validate_requests {
            preflight::update_medical_vocabulary(&request)?;
        }
        self.call("UpdateMedicalVocabulary", &request).await
    }

    pub async fn delete_medical_vocabulary(
        &self,
        request: DeleteMedicalVocabularyRequest,
    ) -> Result<()> {
        if self.validate_requests {
            preflight::resource_name("VocabularyName", request.vocabulary_name.as_deref())?;
        }
        self.call_unit("DeleteMedicalVocabulary", &request).await
    }

    // -- Vocabulary filters -------------------------------------------------

    /// Create a filter that masks, removes, or tags unwanted words in
    /// transcripts.
    pub async fn create_vocabulary_filter(
        &self,
        request: CreateVocabularyFilterRequest,
    ) -> Result<CreateVocabularyFilterResponse> {
        if self.validate_requests {
            preflight::create_vocabulary_filter(&request)?;
        }
        self.call("CreateVocabularyFilter", &request).await
    }

    pub async fn get_vocabulary_filter(
        &self,
        request: GetVocabularyFilterRequest,
    ) -> Result<GetVocabularyFilterResponse> {
        if self.validate_requests {
            preflight::resource_name(
                "VocabularyFilterName",
                request.vocabulary_filter_name.as_deref(),
            )?;
        }
        self.call("GetVocabularyFilter", &request).await
    }

    pub async fn list_vocabulary_filters(
        &self,
        request: ListVocabularyFiltersRequest,
    ) -> Result<ListVocabularyFiltersResponse> {
        if self.validate_requests {
            preflight::max_results(request.max_results)?;
        }
        self.call("ListVocabularyFilters", &request).await
    }

    pub async fn update_vocabulary_filter(
        &self,
        request: UpdateVocabularyFilterRequest,
    ) -> Result<UpdateVocabularyFilterResponse> {
        if self.validate_requests {
            preflight::update_vocabulary_filter(&request)?;
        }
        self.call("UpdateVocabularyFilter", &request).await
    }

    pub async fn delete_vocabulary_filter(
        &self,
        request: DeleteVocabularyFilterRequest,
    ) -> Result<()> {
        if self.validate_requests {
            preflight::resource_name(
                "VocabularyFilterName",
                request.vocabulary_filter_name.as_deref(),
            )?;
        }
        self.call_unit("DeleteVocabularyFilter", &request).await
    }

    // -- Custom language models ---------------------------------------------

    /// Start training a custom language model from caller-supplied text.
    pub async fn create_language_model(
        &self,
        request: CreateLanguageModelRequest,
    ) -> Result<CreateLanguageModelResponse> {
        if self.validate_requests {
            preflight::create_language_model(&request)?;
        }
        self.call("CreateLanguageModel", &request).await
    }

    pub async fn describe_language_model(
        &self,
        request: DescribeLanguageModelRequest,
    ) -> Result<DescribeLanguageModelResponse> {
        if self.validate_requests {
            preflight::resource_name("ModelName", request.model_name.as_deref())?;
        }
        self.call("DescribeLanguageModel", &request).await
    }

    pub async fn list_language_models(
        &self,
        request: ListLanguageModelsRequest,
    ) -> Result<ListLanguageModelsResponse> {
        if self.validate_requests {
            preflight::max_results(request.max_results)?;
        }
        self.call("ListLanguageModels", &request).await
    }

    pub async fn delete_language_model(
        &self,
        request: DeleteLanguageModelRequest,
    ) -> Result<()> {
        if self.validate_requests {
            preflight::resource_name("ModelName", request.model_name.as_deref())?;
        }
        self.call_unit("DeleteLanguageModel", &request).await
    }

    // -- Tagging ------------------------------------------------------------

    pub async fn list_tags_for_resource(
        &self,
        request: ListTagsForResourceRequest,
    ) -> Result<ListTagsForResourceResponse> {
        if self.validate_requests {
            preflight::resource_arn("ResourceArn", request.resource_arn.as_deref())?;
        }
        self.call("ListTagsForResource", &request).await
    }

    pub async fn tag_resource(&self, request: TagResourceRequest) -> Result<TagResourceResponse> {
        if self.validate_requests {
            preflight::resource_arn("ResourceArn", request.resource_arn.as_deref())?;
        }
        self.call("TagResource", &request).await
    }

    pub async fn untag_resource(
        &self,
        request: UntagResourceRequest,
    ) -> Result<UntagResourceResponse> {
        if self.validate_requests {
            preflight::resource_arn("ResourceArn", request.resource_arn.as_deref())?;
        }
        self.call("UntagResource", &request).await
    }
}
