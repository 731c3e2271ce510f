//! Standard transcription jobs: start, poll, list, delete.

mod requests;
mod types;

pub use requests::{
    DeleteTranscriptionJobRequest, GetTranscriptionJobRequest, GetTranscriptionJobResponse,
    ListTranscriptionJobsRequest, ListTranscriptionJobsResponse, StartTranscriptionJobRequest,
    StartTranscriptionJobResponse,
};
pub use types::{
    JobExecutionSettings, LanguageCodeItem, LanguageIdSettings, ModelSettings, Settings,
    Subtitles, SubtitlesOutput, TranscriptionJob, TranscriptionJobSummary,
};
