pub mod image;
pub mod ocr;

pub use image::ImageProcessor;
pub use ocr::OcrProcessor;
