pub mod extraction;
pub mod extractor;
pub mod models;
pub mod processing;
pub mod utils;

pub use extraction::{extract_aadhar_number, extract_dob, extract_name};
pub use extractor::AadhaarExtractor;
pub use models::ExtractedFields;
pub use utils::ExtractionError;
