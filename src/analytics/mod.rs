//! Call analytics jobs: two-channel contact-center audio with per-participant
//! attribution.

mod requests;
mod types;

pub use requests::{
    DeleteCallAnalyticsJobRequest, GetCallAnalyticsJobRequest, GetCallAnalyticsJobResponse,
    ListCallAnalyticsJobsRequest, ListCallAnalyticsJobsResponse, StartCallAnalyticsJobRequest,
    StartCallAnalyticsJobResponse,
};
pub use types::{
    CallAnalyticsJob, CallAnalyticsJobSettings, CallAnalyticsJobSummary, ChannelDefinition,
};
