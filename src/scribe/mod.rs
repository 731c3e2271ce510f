//! Medical scribe jobs: transcription plus a generated clinical note.

mod requests;
mod types;

pub use requests::{
    DeleteMedicalScribeJobRequest, GetMedicalScribeJobRequest, GetMedicalScribeJobResponse,
    ListMedicalScribeJobsRequest, ListMedicalScribeJobsResponse, StartMedicalScribeJobRequest,
    StartMedicalScribeJobResponse,
};
pub use types::{
    MedicalScribeChannelDefinition, MedicalScribeJob, MedicalScribeJobSummary,
    MedicalScribeOutput, MedicalScribeSettings,
};
