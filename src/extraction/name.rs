use lazy_static::lazy_static;
use regex::Regex;

use super::cleaner::clean_name;
use super::dob::contains_date;

lazy_static! {
    // Weak generic name signature: two consecutive alphabetic words of at
    // least two characters each, Latin or Devanagari, allowing the
    // punctuation that occurs inside names, optionally preceded by a stray
    // numeric token ("3 Pankaj Khanna").
    static ref TWO_TOKEN_PATTERN: Regex = Regex::new(
        r"(?:[0-9]+\s*)?[A-Za-z\u{0900}-\u{097F}][A-Za-z\u{0900}-\u{097F}'\-\.]+\s+[A-Za-z\u{0900}-\u{097F}][A-Za-z\u{0900}-\u{097F}'\-\.]+"
    )
    .unwrap();
    static ref LEADING_JUNK: Regex = Regex::new(r"^[^\w\u{0900}-\u{097F}]+").unwrap();
    static ref LEADING_NUMERIC_TOKEN: Regex = Regex::new(r"^[0-9]+\s+").unwrap();
}

const STRATEGIES: [fn(&str) -> Option<String>; 2] = [find_by_dob_anchor, find_by_two_token];

/// Locate and clean a human name across the two transcripts.
///
/// The crop transcript is searched first because the narrower region is less
/// likely to contain unrelated two-word text (addresses, issuing-authority
/// lines). Within each source the DOB anchor is tried before the generic
/// two-token scan: on the card the name sits directly above the date of
/// birth, so the anchor is the stronger signal whenever a date was
/// recognized at all. First strategy to produce a cleaned name wins.
pub fn extract_name(full: &str, crop: Option<&str>) -> Option<String> {
    let crop = crop.filter(|c| !c.trim().is_empty());

    if let Some(crop_text) = crop {
        for strategy in STRATEGIES {
            if let Some(name) = strategy(crop_text) {
                return Some(name);
            }
        }
    }
    for strategy in STRATEGIES {
        if let Some(name) = strategy(full) {
            return Some(name);
        }
    }
    None
}

// The name is printed one line above the date of birth; take the line
// preceding each date-bearing line as a candidate.
fn find_by_dob_anchor(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    for (i, line) in lines.iter().enumerate() {
        if contains_date(line) && i > 0 {
            let candidate = LEADING_JUNK.replace(lines[i - 1], "");
            // a decorative glyph often OCRs as a digit prefix
            let candidate = LEADING_NUMERIC_TOKEN.replace(&candidate, "");
            if let Some(cleaned) = clean_name(&candidate) {
                return Some(cleaned);
            }
        }
    }
    None
}

fn find_by_two_token(text: &str) -> Option<String> {
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(matched) = TWO_TOKEN_PATTERN.find(line) {
            let candidate = LEADING_NUMERIC_TOKEN.replace(matched.as_str(), "");
            if let Some(cleaned) = clean_name(&candidate) {
                return Some(cleaned);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = "3 Pankaj Khanna\n01/02/1990\n1234 5678 9123";

    #[test]
    fn test_dob_anchor_in_crop() {
        assert_eq!(
            extract_name(CARD, Some(CARD)),
            Some("Pankaj Khanna".to_string())
        );
    }

    #[test]
    fn test_dob_anchor_without_crop() {
        assert_eq!(extract_name(CARD, None), Some("Pankaj Khanna".to_string()));
    }

    #[test]
    fn test_two_token_fallback_strips_label() {
        // No line sits above a date, so the DOB anchor fails and the
        // two-token scan picks the name out of the labelled line.
        let text = "Name: RAVI KUMAR\nGovernment of India";
        assert_eq!(extract_name(text, None), Some("Ravi Kumar".to_string()));
    }

    #[test]
    fn test_noisy_crop_falls_through_to_full_text() {
        let crop = "####\n@@!!\n98765";
        let full = "Sunita Sharma\n15-08-1987\n4321 8765 2109";
        assert_eq!(
            extract_name(full, Some(crop)),
            Some("Sunita Sharma".to_string())
        );
    }

    #[test]
    fn test_crop_preferred_over_full() {
        let crop = "Asha Devi\n02/03/1975";
        let full = "Wrong Candidate\n01/01/2001\nAsha Devi\n02/03/1975";
        assert_eq!(
            extract_name(full, Some(crop)),
            Some("Asha Devi".to_string())
        );
    }

    #[test]
    fn test_date_on_first_line_has_no_anchor() {
        // Date-bearing first line leaves nothing above it; the two-token
        // scan still finds the name further down.
        let text = "01/02/1990\nRohan Gupta MALE";
        assert_eq!(extract_name(text, None), Some("Rohan Gupta".to_string()));
    }

    #[test]
    fn test_devanagari_name() {
        let text = "सुरेश बाबू\n10-10-1980";
        assert_eq!(extract_name(text, None), Some("सुरेश बाबू".to_string()));
    }

    #[test]
    fn test_all_strategies_fail() {
        assert_eq!(extract_name("1234 5678 9123\n01/02/1990", None), None);
        assert_eq!(extract_name("", None), None);
        assert_eq!(extract_name("", Some("")), None);
    }

    #[test]
    fn test_empty_crop_is_ignored() {
        assert_eq!(
            extract_name(CARD, Some("   \n ")),
            Some("Pankaj Khanna".to_string())
        );
    }
}
