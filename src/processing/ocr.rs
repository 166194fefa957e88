use crate::utils::ExtractionError;
use image::GrayImage;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use tesseract::Tesseract;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref REPEATED_NEWLINES: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Page segmentation mode 6: assume a single uniform block of text.
pub const PSM_SINGLE_BLOCK: u32 = 6;

pub struct OcrProcessor;

impl OcrProcessor {
    /// Run tesseract over `image` with the given page segmentation mode and
    /// return the normalized transcript.
    pub fn recognize(image: &GrayImage, psm: u32) -> Result<String, ExtractionError> {
        // Tesseract wants a file on disk; hand it a throwaway PNG.
        let temp_file = tempfile::Builder::new().suffix(".png").tempfile()?;

        image
            .save(temp_file.path())
            .map_err(|e| ExtractionError::Ocr(format!("failed to write temp image: {}", e)))?;

        let image_path_str = temp_file
            .path()
            .to_str()
            .ok_or_else(|| ExtractionError::Ocr("temp path is not valid UTF-8".to_string()))?;

        let text = Tesseract::new(None, Some("eng"))
            .map_err(|e| ExtractionError::Ocr(format!("tesseract init error: {}", e)))?
            .set_image(image_path_str)
            .map_err(|e| ExtractionError::Ocr(format!("tesseract set image error: {}", e)))?
            .set_variable("tessedit_pageseg_mode", &psm.to_string())
            .map_err(|e| ExtractionError::Ocr(format!("tesseract set variable error: {}", e)))?
            .get_text()
            .map_err(|e| ExtractionError::Ocr(format!("tesseract error: {}", e)))?;

        debug!("ocr produced {} bytes of text (psm {})", text.len(), psm);
        Ok(Self::normalize_text(&text))
    }

    /// NFKC-normalize a raw transcript, drop carriage returns, collapse
    /// repeated blank lines and trim.
    pub fn normalize_text(text: &str) -> String {
        let text: String = text.nfkc().collect();
        let text = text.replace('\r', "");
        REPEATED_NEWLINES.replace_all(&text, "\n").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_collapsed() {
        assert_eq!(
            OcrProcessor::normalize_text("Pankaj Khanna\n\n\n01/02/1990\n"),
            "Pankaj Khanna\n01/02/1990"
        );
    }

    #[test]
    fn test_carriage_returns_dropped() {
        assert_eq!(
            OcrProcessor::normalize_text("a\r\nb\r\n"),
            "a\nb"
        );
    }

    #[test]
    fn test_nfkc_folds_fullwidth_digits() {
        assert_eq!(OcrProcessor::normalize_text("１２３４"), "1234");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(OcrProcessor::normalize_text("  text  \n"), "text");
    }
}
