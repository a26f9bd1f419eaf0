//! Name, email and mobile number extraction.

use regex::Regex;

use crate::error::Result;
use crate::normalize::safe_value;

use super::non_empty_lines;

/// Number of leading non-empty lines searched for the candidate name.
const NAME_SCAN_LINES: usize = 5;

/// Extracts the candidate's name and contact details.
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    email_regex: Regex,
    mobile_regex: Regex,
    digit_regex: Regex,
}

impl ContactExtractor {
    /// Create a new contact extractor.
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Consumer domains only, corporate addresses are not matched
            email_regex: Regex::new(r"(?i)[a-z0-9._%+-]+@(gmail|hotmail|yahoo)\.com")?,
            mobile_regex: Regex::new(r"\+?\d[\d\s\-]{8,14}\d")?,
            digit_regex: Regex::new(r"\d")?,
        })
    }

    /// First line among the first five non-empty lines that has two to four
    /// words, in title case.
    pub fn extract_name(&self, text: &str) -> String {
        non_empty_lines(text)
            .into_iter()
            .take(NAME_SCAN_LINES)
            .find(|line| (2..=4).contains(&line.split_whitespace().count()))
            .map(title_case)
            .unwrap_or_default()
    }

    /// First gmail, hotmail or yahoo address.
    pub fn extract_email(&self, text: &str) -> String {
        safe_value(self.email_regex.find(text).map(|m| m.as_str()))
    }

    /// First phone-shaped candidate that yields a usable ten-digit number.
    ///
    /// A candidate with exactly ten digits is returned as is. A longer one
    /// (country code, trunk prefix) is accepted when its last ten digits
    /// start with 6, 7, 8 or 9.
    ///
    /// Digits are any Unicode decimal digits and are returned in their
    /// original script.
    pub fn extract_mobile(&self, text: &str) -> String {
        for candidate in self.mobile_regex.find_iter(text) {
            let digits: Vec<&str> = self
                .digit_regex
                .find_iter(candidate.as_str())
                .map(|m| m.as_str())
                .collect();

            if digits.len() == 10 {
                return digits.concat();
            }
            if digits.len() > 10 {
                let last_ten = &digits[digits.len() - 10..];
                if matches!(last_ten[0], "6" | "7" | "8" | "9") {
                    return last_ten.concat();
                }
            }
        }
        String::new()
    }
}

/// Titlecase letters that follow a non-letter, lowercase the others.
fn title_case(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut prev_cased = false;
    for c in line.chars() {
        let cased = c.is_uppercase() || c.is_lowercase() || titlecase_digraph(c).is_some();
        if cased && prev_cased {
            result.extend(c.to_lowercase());
        } else if cased {
            match titlecase_digraph(c) {
                Some(title) => result.push(title),
                None => result.extend(c.to_uppercase()),
            }
        } else {
            result.push(c);
        }
        prev_cased = cased;
    }
    result
}

/// Titlecase form of the Latin digraph letters (DŽ, LJ, NJ, DZ), whose
/// titlecase differs from their uppercase.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ContactExtractor {
        ContactExtractor::new().unwrap()
    }

    #[test]
    fn test_name_from_first_short_line() {
        let text = "\n\n  JOHN DOE  \nSoftware Engineer\n";
        assert_eq!(extractor().extract_name(text), "John Doe");
    }

    #[test]
    fn test_name_skips_single_word_and_long_lines() {
        let text = "Resume\nI am a passionate engineer who loves Rust\npriya sharma\n";
        assert_eq!(extractor().extract_name(text), "Priya Sharma");
    }

    #[test]
    fn test_name_only_scans_five_lines() {
        let text = "A\nB\nC\nD\nE\nJane Doe\n";
        assert_eq!(extractor().extract_name(text), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("o'neil mcdonald"), "O'Neil Mcdonald");
        assert_eq!(title_case("ANNA-MARIE 3rd"), "Anna-Marie 3Rd");
    }

    #[test]
    fn test_title_case_digraphs() {
        assert_eq!(title_case("ǆemal ǉubić"), "ǅemal ǈubić");
        assert_eq!(title_case("ǄEMAL ǇUBIĆ"), "ǅemal ǈubić");
        assert_eq!(extractor().extract_name("ǌegoš ǳaja\n"), "ǋegoš ǲaja");
    }

    #[test]
    fn test_email_whitelisted_domain() {
        let e = extractor();
        assert_eq!(e.extract_email("reach me at a.b@gmail.com"), "a.b@gmail.com");
        assert_eq!(e.extract_email("MAIL: X_Y@Yahoo.COM"), "X_Y@Yahoo.COM");
        assert_eq!(e.extract_email("a.b@company.io"), "");
    }

    #[test]
    fn test_email_first_match() {
        let text = "work: a@corp.com, personal: first@hotmail.com, alt: second@gmail.com";
        assert_eq!(extractor().extract_email(text), "first@hotmail.com");
    }

    #[test]
    fn test_mobile_plain_ten_digits() {
        assert_eq!(extractor().extract_mobile("Contact: 9876543210"), "9876543210");
    }

    #[test]
    fn test_mobile_with_country_code() {
        assert_eq!(extractor().extract_mobile("+91 98765 43210"), "9876543210");
        assert_eq!(extractor().extract_mobile("Phone: +91-70123-45678"), "7012345678");
    }

    #[test]
    fn test_mobile_rejects_landline_suffix() {
        // Eleven digits whose last ten start with 2
        assert_eq!(extractor().extract_mobile("Tel: 022 2345 6789"), "");
    }

    #[test]
    fn test_mobile_skips_short_candidates() {
        let text = "Roll No 12 34 56 78, Mobile 8899776655";
        assert_eq!(extractor().extract_mobile(text), "8899776655");
    }

    #[test]
    fn test_mobile_non_ascii_digits() {
        let e = extractor();
        assert_eq!(e.extract_mobile("Mobile: ९८७६५४३२१०"), "९८७६५४३२१०");
        // Last ten start with a Devanagari digit, not 6-9
        assert_eq!(e.extract_mobile("+९१ ९८७६५ ४३२१०"), "");
    }

    #[test]
    fn test_mobile_none() {
        assert_eq!(extractor().extract_mobile("no digits here"), "");
    }
}
