use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Three groups of four digits, each pair of groups optionally separated
    // by a single space. Trailing digits are pulled into the match so a
    // longer contiguous run reaches the length gate whole instead of being
    // truncated to its first twelve digits.
    static ref AADHAR_PATTERN: Regex =
        Regex::new(r"[0-9]{4} ?[0-9]{4} ?[0-9]{4}[0-9]*").unwrap();
}

/// Find the first 12-digit Aadhaar number in `text` and format it as
/// `"XXXX XXXX XXXX"`.
///
/// First match wins; there is no checksum validation and no attempt to
/// disambiguate when the transcript contains more than one digit run.
pub fn extract_aadhar_number(text: &str) -> Option<String> {
    let matched = AADHAR_PATTERN.find(text)?;
    let digits: String = matched
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.len() != 12 {
        return None;
    }
    Some(format!(
        "{} {} {}",
        &digits[0..4],
        &digits[4..8],
        &digits[8..12]
    ))
}
