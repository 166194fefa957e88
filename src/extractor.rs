use crate::extraction::{extract_aadhar_number, extract_dob, extract_name};
use crate::models::ExtractedFields;
use crate::processing::ocr::PSM_SINGLE_BLOCK;
use crate::processing::{ImageProcessor, OcrProcessor};
use crate::utils::ExtractionError;
use log::{info, warn};
use std::path::Path;

/// Drives the whole pipeline: image preparation, the two OCR passes, and
/// the three field extractors.
pub struct AadhaarExtractor {
    psm: u32,
}

impl AadhaarExtractor {
    pub fn new() -> Self {
        AadhaarExtractor {
            psm: PSM_SINGLE_BLOCK,
        }
    }

    pub fn with_psm(psm: u32) -> Self {
        AadhaarExtractor { psm }
    }

    /// Extract the three fields from a card image.
    ///
    /// Only unreadable input or an OCR engine failure on the full page is an
    /// error; everything downstream degrades per field to `None`. The crop
    /// pass in particular is best-effort: if the region cannot be prepared
    /// or read, extraction continues on the full-page transcript alone.
    pub fn extract(&self, image_path: &Path) -> Result<ExtractedFields, ExtractionError> {
        info!("extracting fields from {}", image_path.display());

        // Step 1: preprocess and OCR the whole card
        let processed = ImageProcessor::preprocess(image_path)?;
        let text_full = OcrProcessor::recognize(&processed, self.psm)?;

        // Step 2: OCR the name/DOB crop of the original image
        let text_crop = match ImageProcessor::crop_name_dob_region(image_path) {
            Some(crop) => match OcrProcessor::recognize(&crop, self.psm) {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("crop OCR failed, using full transcript only: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(self.extract_from_transcripts(&text_full, text_crop.as_deref()))
    }

    /// Run the three field extractors over already-produced transcripts.
    ///
    /// The Aadhaar number is searched in the full page only; the DOB prefers
    /// the crop transcript; the name extractor consults both. No extractor
    /// depends on another's output.
    pub fn extract_from_transcripts(
        &self,
        text_full: &str,
        text_crop: Option<&str>,
    ) -> ExtractedFields {
        // an empty crop transcript carries no signal, treat it as absent
        let text_crop = text_crop.filter(|t| !t.trim().is_empty());

        let aadhar_number = extract_aadhar_number(text_full);
        let dob = extract_dob(text_crop.unwrap_or(text_full));
        let name = extract_name(text_full, text_crop);

        ExtractedFields {
            name,
            dob,
            aadhar_number,
        }
    }
}

impl Default for AadhaarExtractor {
    fn default() -> Self {
        Self::new()
    }
}
