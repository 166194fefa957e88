use crate::utils::ExtractionError;
use image::GrayImage;
use imageproc::contrast::adaptive_threshold;
use imageproc::filter::gaussian_blur_f32;
use log::{debug, warn};
use std::path::Path;

// Name/DOB region of the card as fractions of the image dimensions. The
// vertical range reaches down to 45% so the DOB line is always inside it.
const CROP_X1: f32 = 0.18;
const CROP_Y1: f32 = 0.04;
const CROP_X2: f32 = 0.97;
const CROP_Y2: f32 = 0.45;

const THRESHOLD_BLOCK_RADIUS: u32 = 5;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Grayscale, denoise and binarize the card image for the full-page OCR
    /// pass. Fails only when the image cannot be read.
    pub fn preprocess(image_path: &Path) -> Result<GrayImage, ExtractionError> {
        let img = image::open(image_path).map_err(|e| {
            ExtractionError::ImageRead(format!(
                "cannot read image at {}: {}",
                image_path.display(),
                e
            ))
        })?;
        let gray = img.to_luma8();
        debug!("preprocessing {}x{} image", gray.width(), gray.height());
        let denoised = gaussian_blur_f32(&gray, 1.0);
        Ok(adaptive_threshold(&denoised, THRESHOLD_BLOCK_RADIUS))
    }

    /// Crop the fixed name/DOB region out of the original, un-thresholded
    /// image. Returns `None` when the image cannot be read or the rectangle
    /// degenerates; a missing crop is a soft failure and the caller falls
    /// back to the full-page transcript.
    pub fn crop_name_dob_region(image_path: &Path) -> Option<GrayImage> {
        let img = match image::open(image_path) {
            Ok(img) => img,
            Err(e) => {
                warn!("crop skipped, cannot read {}: {}", image_path.display(), e);
                return None;
            }
        };
        let (w, h) = (img.width() as f32, img.height() as f32);
        let x1 = (CROP_X1 * w) as u32;
        let y1 = (CROP_Y1 * h) as u32;
        let x2 = (CROP_X2 * w) as u32;
        let y2 = (CROP_Y2 * h) as u32;
        if x2 <= x1 || y2 <= y1 {
            warn!("crop skipped, degenerate region for {}x{} image", img.width(), img.height());
            return None;
        }
        Some(img.crop_imm(x1, y1, x2 - x1, y2 - y1).to_luma8())
    }
}
