use serde::{Deserialize, Serialize};

/// The three-field record extracted from an Aadhaar card.
///
/// Each field is independently nullable: a DOB the OCR pass missed never
/// blocks extraction of the name or the number. When present, the fields
/// satisfy the output formats the extractors guarantee: the number is
/// `"XXXX XXXX XXXX"`, the DOB is the matched `DD/MM/YYYY`-shaped token
/// verbatim, the name has at least two tokens with Latin tokens Title-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub aadhar_number: Option<String>,
}
