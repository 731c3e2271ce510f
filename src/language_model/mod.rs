//! Custom language models trained on caller-supplied text corpora.

mod requests;
mod types;

pub use requests::{
    CreateLanguageModelRequest, CreateLanguageModelResponse, DeleteLanguageModelRequest,
    DescribeLanguageModelRequest, DescribeLanguageModelResponse, ListLanguageModelsRequest,
    ListLanguageModelsResponse,
};
pub use types::{InputDataConfig, LanguageModel};
