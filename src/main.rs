use aadhar_ocr::AadhaarExtractor;
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Extract name, date of birth and Aadhaar number from a scanned card image.
#[derive(Parser)]
#[command(name = "aadhar-ocr", version, about)]
struct Args {
    /// Path to the card image
    image: PathBuf,

    /// Tesseract page segmentation mode
    #[arg(long, default_value_t = 6)]
    psm: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let extractor = AadhaarExtractor::with_psm(args.psm);
    match extractor.extract(&args.image) {
        Ok(fields) => {
            // All three keys are always present; a field that was not found
            // is null, which is distinct from the error exit below.
            println!("{}", serde_json::to_string_pretty(&fields).unwrap());
        }
        Err(err) => {
            eprintln!("extraction failed: {}", err);
            process::exit(1);
        }
    }
}
