//! Custom vocabularies, medical vocabularies, and vocabulary filters.

mod requests;
mod types;

pub use requests::{
    CreateMedicalVocabularyRequest, CreateMedicalVocabularyResponse, CreateVocabularyFilterRequest,
    CreateVocabularyFilterResponse, CreateVocabularyRequest, CreateVocabularyResponse,
    DeleteMedicalVocabularyRequest, DeleteVocabularyFilterRequest, DeleteVocabularyRequest,
    GetMedicalVocabularyRequest, GetMedicalVocabularyResponse, GetVocabularyFilterRequest,
    GetVocabularyFilterResponse, GetVocabularyRequest, GetVocabularyResponse,
    ListMedicalVocabulariesRequest, ListMedicalVocabulariesResponse, ListVocabulariesRequest,
    ListVocabulariesResponse, ListVocabularyFiltersRequest, ListVocabularyFiltersResponse,
    UpdateMedicalVocabularyRequest, UpdateMedicalVocabularyResponse, UpdateVocabularyFilterRequest,
    UpdateVocabularyFilterResponse, UpdateVocabularyRequest, UpdateVocabularyResponse,
};
pub use types::{VocabularyFilterInfo, VocabularyInfo};
