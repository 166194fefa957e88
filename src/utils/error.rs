use thiserror::Error;

/// Failures of the image and OCR collaborators. Field extraction itself
/// never errors: a field that cannot be found is `None`, not an `Err`.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("image read error: {0}")]
    ImageRead(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
