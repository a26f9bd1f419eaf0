//! Value coercion and optional input cleanup.

use std::fmt::Display;

use unicode_normalization::UnicodeNormalization;

/// Coerce a scalar to a trimmed string.
///
/// `None` and anything that prints as "nan" (any case) become the empty
/// string, so missing spreadsheet cells and `f64::NAN` never leak into
/// output as text.
///
/// ```
/// use unresume::safe_value;
///
/// assert_eq!(safe_value(Some("  a@gmail.com ")), "a@gmail.com");
/// assert_eq!(safe_value(None::<&str>), "");
/// assert_eq!(safe_value(Some(f64::NAN)), "");
/// assert_eq!(safe_value(Some(42)), "42");
/// ```
pub fn safe_value<T: Display>(value: Option<T>) -> String {
    match value {
        None => String::new(),
        Some(v) => {
            let text = v.to_string();
            let text = text.trim();
            if text.eq_ignore_ascii_case("nan") {
                String::new()
            } else {
                text.to_string()
            }
        }
    }
}

/// Light normalization of extracted résumé text before field extraction.
///
/// Applies Unicode NFC, ligature replacement, bullet standardization and
/// removal of U+FFFD. Line structure is left untouched since every
/// extractor is line-based.
#[derive(Debug, Clone)]
pub struct InputCleanup {
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl InputCleanup {
    /// Create the cleanup pass.
    pub fn new() -> Self {
        Self {
            ligature_map: vec![
                ("\u{FB00}", "ff"),
                ("\u{FB01}", "fi"),
                ("\u{FB02}", "fl"),
                ("\u{FB03}", "ffi"),
                ("\u{FB04}", "ffl"),
                ("\u{FB05}", "st"),
                ("\u{FB06}", "st"),
            ],
        }
    }

    /// Process text through the cleanup pass.
    pub fn process(&self, text: &str) -> String {
        let mut result: String = text.nfc().collect();

        for (ligature, replacement) in &self.ligature_map {
            result = result.replace(ligature, replacement);
        }

        result = standardize_bullets(&result);
        result.replace('\u{FFFD}', "")
    }
}

impl Default for InputCleanup {
    fn default() -> Self {
        Self::new()
    }
}

fn standardize_bullets(text: &str) -> String {
    // • is what the certification and awards scans strip
    let bullets = ['●', '○', '■', '□', '◆', '◇', '▪', '▫', '►', '▻', '➤', '✓'];
    text.chars()
        .map(|c| if bullets.contains(&c) { '•' } else { c })
        .collect()
}
