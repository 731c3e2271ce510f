//! Medical transcription jobs. Same lifecycle as the standard engine, with a
//! medical vocabulary, PHI labeling, and stricter input requirements.

mod requests;
mod types;

pub use requests::{
    DeleteMedicalTranscriptionJobRequest, GetMedicalTranscriptionJobRequest,
    GetMedicalTranscriptionJobResponse, ListMedicalTranscriptionJobsRequest,
    ListMedicalTranscriptionJobsResponse, StartMedicalTranscriptionJobRequest,
    StartMedicalTranscriptionJobResponse,
};
pub use types::{
    MedicalTranscript, MedicalTranscriptionJob, MedicalTranscriptionJobSummary,
    MedicalTranscriptionSetting,
};
