use lazy_static::lazy_static;
use regex::Regex;

use super::script;

lazy_static! {
    // Field labels the OCR pass drags into the name line, in Latin and
    // Devanagari, with whatever colon/dash/space trails them.
    static ref LABEL_TOKENS: Regex =
        Regex::new(r"(?i)\b(?:Name|नाम|नाव|DOB|Date of Birth)\b[:\s\-]*").unwrap();
    // Tokens that open the fields printed after the name on the card;
    // everything from the first one onward is not part of the name.
    static ref TRAILING_FIELDS: Regex =
        Regex::new(r"(?i)\b(?:MALE|FEMALE|VID|Aadhaar|UID)\b.*$").unwrap();
    static ref SHORT_ALPHA_TOKEN: Regex = Regex::new(r"^[A-Za-z]{1,2}$").unwrap();
    static ref INITIAL_TOKEN: Regex = Regex::new(r"^[A-Za-z]\.$").unwrap();
    static ref MULTI_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Normalize a raw OCR name candidate, or return `None` when nothing
/// name-like survives.
///
/// The pipeline strips leading junk and embedded field labels, drops a 1-2
/// letter garbage token in front of the real first name (like `oN` or `jo`),
/// truncates at the first trailing-field marker, sweeps out characters that
/// cannot occur in a name, and Title-cases the Latin tokens. Devanagari
/// tokens pass through untouched. Candidates that end up shorter than two
/// tokens are rejected as unreliable fragments.
pub fn clean_name(raw: &str) -> Option<String> {
    let s = raw.trim();

    // drop leading non-letter characters (digits, punctuation)
    let s = s.trim_start_matches(|c: char| !script::is_name_letter(c));

    // remove labels accidentally captured
    let s = LABEL_TOKENS.replace_all(s, "");

    // drop a 1-2 letter garbage token at the start, but never the only token
    let mut parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() > 1 && SHORT_ALPHA_TOKEN.is_match(parts[0]) {
        parts.remove(0);
    }
    let s = parts.join(" ");

    // strip trailing tokens that belong to other fields
    let s = TRAILING_FIELDS.replace(&s, "");

    // keep only letters of both scripts, spaces, dots, apostrophes, hyphens
    let s: String = s
        .chars()
        .map(|c| if script::is_name_char(c) { c } else { ' ' })
        .collect();
    let s = MULTI_SPACE.replace_all(&s, " ");
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let result = s
        .split_whitespace()
        .map(normalize_token)
        .collect::<Vec<_>>()
        .join(" ");

    // a reliable name has at least two words
    if result.split_whitespace().count() < 2 {
        return None;
    }
    Some(result)
}

fn normalize_token(token: &str) -> String {
    if !token.chars().any(script::is_latin_letter) {
        return token.to_string();
    }
    if INITIAL_TOKEN.is_match(token) {
        // an initial like 'k.' becomes 'K.'
        return token.to_uppercase();
    }
    title_case(token)
}

// Capitalize each letter that follows a non-letter, lowercase the rest, so
// hyphenated and apostrophe names come out as "Norton-Smith" and "D'Souza".
fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut at_word_start = true;
    for c in token.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
