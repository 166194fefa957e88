use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_PATTERN: Regex =
        Regex::new(r"[0-9]{2}[/-][0-9]{2}[/-][0-9]{4}").unwrap();
}

/// Find the first `DD/MM/YYYY` or `DD-MM-YYYY` shaped token and return it
/// verbatim. No calendar validation is performed, and the first date-shaped
/// substring wins even when the card shows several (issue date, print date).
pub fn extract_dob(text: &str) -> Option<String> {
    DATE_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// True when `text` contains a date-shaped token. Used by the name
/// extractor to locate the DOB line inside a transcript.
pub fn contains_date(text: &str) -> bool {
    DATE_PATTERN.is_match(text)
}
