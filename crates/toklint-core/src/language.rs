//! Language-aware filtering.
//!
//! A language code maps to a set of categories that are expected noise for
//! that language (suppressed from the report body), a predicate for
//! language-specific letters, and language-specific benign token patterns
//! consumed by the token classifier. Unknown codes yield empty sets.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::categories::Category;
use crate::error::{ConfigError, ConfigResult};

/// Language codes accepted on the configuration surface.
pub const VALID_LANGUAGE_CODES: &[&str] = &[
    "ar", "ara", "chi", "dar", "de", "en", "eng", "es", "far", "fr", "fre", "gr", "jp", "kin",
    "mlg", "ru", "som", "ur", "zh",
];

/// Validate a language code and apply the `en -> eng` alias.
pub fn normalize_code(code: &str) -> ConfigResult<&'static str> {
    if code == "en" {
        return Ok("eng");
    }
    VALID_LANGUAGE_CODES
        .iter()
        .find(|c| **c == code)
        .copied()
        .ok_or_else(|| ConfigError::UnknownLanguage {
            code: code.to_string(),
            available: VALID_LANGUAGE_CODES.join(", "),
        })
}

/// Kinyarwanda elided stem prefixes (`n'umwana` tokenized as `n'` + `umwana`).
static KIN_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[nbkrtmwyzc]|rw|ry|cy|by|bw|tw|mw|nk|ak|ag|ab|uw|icy|iby)'$")
        .expect("valid regex")
});

/// Malagasy genitive-linker suffix (`tranon'` + following noun).
static MLG_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+n'$").expect("valid regex"));

/// Somali glottal stop written as an apostrophe between vowels (`la'aan`).
static SOM_GLOTTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]*[aeiou]'[aeiou][a-z]*$").expect("valid regex"));

/// Resolved per-language policy. Cheap to construct; owned by the analyzer.
#[derive(Debug)]
pub struct LanguagePolicy {
    code: Option<String>,
    suppressed: HashSet<Category>,
}

impl LanguagePolicy {
    /// Build the policy for an already-normalized language code.
    pub fn for_code(code: Option<&str>) -> Self {
        use Category::*;
        let suppressed: &[Category] = match code {
            Some("ar" | "ara") => &[ArabicLetter, ArabicLetterYeh, ArabicLetterKaf],
            Some("dar" | "far") => &[
                ArabicLetter,
                FarsiLetterYeh,
                FarsiLetterKeheh,
                LanguageSpecific,
                ExtArabicIndicDigit,
            ],
            Some("ur") => &[ArabicLetter, FarsiLetterYeh, FarsiLetterKeheh, LanguageSpecific],
            Some("eng") => &[AsciiLetter],
            Some("de" | "es" | "fr" | "fre") => &[AsciiLetter, LanguageSpecific],
            Some("gr") => &[Greek],
            Some("ru") => &[Cyrillic],
            Some("zh" | "chi" | "jp") => &[Cjk],
            Some("kin" | "mlg" | "som") => &[AsciiLetter],
            _ => &[],
        };
        Self {
            code: code.map(str::to_string),
            suppressed: suppressed.iter().copied().collect(),
        }
    }

    /// The normalized language code, if one is configured.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Whether examples for this category are suppressed as expected script.
    pub fn suppresses(&self, cat: Category) -> bool {
        self.suppressed.contains(&cat)
    }

    /// Whether this codepoint is an expected letter for the configured
    /// language. The character classifier promotes such codepoints to
    /// `LANGUAGE_SPECIFIC` instead of their generic script tag.
    pub fn is_language_char(&self, cp: u32) -> bool {
        match self.code.as_deref() {
            Some("de") => matches!(
                cp,
                0xC4 | 0xD6 | 0xDC | 0xE4 | 0xF6 | 0xFC | 0xDF | 0x1E9E
            ),
            Some("fr" | "fre") => matches!(
                cp,
                // à â æ ç é è ê ë î ï ô œ ù û ü ÿ and capitals
                0xE0 | 0xE2 | 0xE6 | 0xE7 | 0xE9 | 0xE8 | 0xEA | 0xEB | 0xEE | 0xEF | 0xF4
                    | 0xF9 | 0xFB | 0xFC | 0xFF
                    | 0xC0 | 0xC2 | 0xC6 | 0xC7 | 0xC9 | 0xC8 | 0xCA | 0xCB | 0xCE | 0xCF
                    | 0xD4 | 0xD9 | 0xDB | 0xDC
                    | 0x152 | 0x153 | 0x178
            ),
            Some("es") => matches!(
                cp,
                // á é í ó ú ü ñ and capitals
                0xE1 | 0xE9 | 0xED | 0xF3 | 0xFA | 0xFC | 0xF1
                    | 0xC1 | 0xC9 | 0xCD | 0xD3 | 0xDA | 0xDC | 0xD1
            ),
            // Letters added for Persian and Pashto on top of base Arabic.
            Some("far" | "dar") => matches!(
                cp,
                0x67E | 0x686 | 0x698 | 0x6AF | 0x6A9 | 0x6CC | 0x6AB | 0x67C | 0x689 | 0x693
            ),
            // Letters added for Urdu on top of base Arabic.
            Some("ur") => matches!(
                cp,
                0x679 | 0x688 | 0x691 | 0x6BA | 0x6BE | 0x6C1 | 0x6C2 | 0x6C3 | 0x6D2 | 0x6D3
                    | 0x6A9 | 0x6CC
            ),
            _ => false,
        }
    }

    /// Language-specific benign apostrophe patterns (Kinyarwanda elided
    /// prefixes, Malagasy linker suffixes).
    pub fn benign_apostrophe(&self, token: &str) -> bool {
        match self.code.as_deref() {
            Some("kin") => KIN_PREFIX_RE.is_match(token),
            Some("mlg") => MLG_SUFFIX_RE.is_match(token),
            _ => false,
        }
    }

    /// Somali vowel-apostrophe words are expected, not unsplit punctuation.
    pub fn benign_vowel_apostrophe(&self, token: &str) -> bool {
        matches!(self.code.as_deref(), Some("som")) && SOM_GLOTTAL_RE.is_match(token)
    }

    /// Whether the Malagasy bible-book abbreviation list applies.
    pub fn uses_malagasy_abbreviations(&self) -> bool {
        matches!(self.code.as_deref(), Some("mlg"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_alias() {
        assert_eq!(normalize_code("en").unwrap(), "eng");
        assert_eq!(normalize_code("eng").unwrap(), "eng");
    }

    #[test]
    fn unknown_code_errors() {
        let err = normalize_code("tlh").unwrap_err();
        assert!(err.to_string().contains("tlh"));
    }

    #[test]
    fn arabic_suppresses_arabic_letters() {
        let policy = LanguagePolicy::for_code(Some("ara"));
        assert!(policy.suppresses(Category::ArabicLetter));
        assert!(!policy.suppresses(Category::Cyrillic));
    }

    #[test]
    fn no_language_suppresses_nothing() {
        let policy = LanguagePolicy::for_code(None);
        assert!(!policy.suppresses(Category::AsciiLetter));
        assert!(!policy.is_language_char(0xE4));
    }

    #[test]
    fn german_umlauts_are_language_chars() {
        let policy = LanguagePolicy::for_code(Some("de"));
        assert!(policy.is_language_char(u32::from('ä')));
        assert!(policy.is_language_char(u32::from('ß')));
        assert!(!policy.is_language_char(u32::from('é')));
    }

    #[test]
    fn urdu_letters_are_language_chars() {
        let policy = LanguagePolicy::for_code(Some("ur"));
        assert!(policy.is_language_char(0x6BA)); // noon ghunna
        assert!(!policy.is_language_char(0x628)); // base Arabic beh
    }

    #[test]
    fn kinyarwanda_prefixes_are_benign() {
        let policy = LanguagePolicy::for_code(Some("kin"));
        assert!(policy.benign_apostrophe("n'"));
        assert!(policy.benign_apostrophe("rw'"));
        assert!(!policy.benign_apostrophe("boy's"));
    }

    #[test]
    fn somali_glottal_stop_is_benign() {
        let policy = LanguagePolicy::for_code(Some("som"));
        assert!(policy.benign_vowel_apostrophe("la'aan"));
        assert!(!policy.benign_vowel_apostrophe("boys'"));
        let other = LanguagePolicy::for_code(Some("eng"));
        assert!(!other.benign_vowel_apostrophe("la'aan"));
    }
}
