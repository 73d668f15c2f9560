//! Whole-token classification.
//!
//! Runs the fast tracks, the special-token-type recognizer, the
//! unsplit-punctuation rule chains with their benign exemptions, mixed-script
//! detection, the Devanagari nukta sub-analysis, and the long-token check,
//! then hands the token to the character classifier for residual
//! character-level tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::categories::Category;
use crate::charclass;
use crate::data::abbreviations::{
    BARE_CLITICS, FIXED_ABBREVIATIONS, MALAGASY_ABBREVIATIONS, MONTH_ABBREVIATIONS,
    TITLE_ABBREVIATIONS,
};
use crate::data::domains;
use crate::data::long_words;
use crate::language::LanguagePolicy;
use crate::store::{ExampleStore, NoteMode};

/// Token shapes recognized before the unsplit-punctuation rules.
///
/// Recognized tokens are exempt from the unsplit checks; only some of them
/// carry a category of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecialToken {
    Email,
    Url,
    Hashtag,
    Handle,
    Xml,
    Info,
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = domains::suffix_alternation();
    Regex::new(&format!(
        r"^[A-Za-z0-9][A-Za-z0-9._%+-]*@[A-Za-z0-9][A-Za-z0-9.-]*\.(?:{suffixes}|[a-z]{{2}})$"
    ))
    .expect("valid regex")
});

static SCHEME_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^\s/]+\.[^\s]+$").expect("valid regex"));

static DOMAIN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = domains::suffix_alternation();
    Regex::new(&format!(
        r"(?i)^(?:www\.)?[a-z0-9-]+(?:\.[a-z0-9-]+)*\.(?:{suffixes}|[a-z]{{2}})(?:/\S*)?$"
    ))
    .expect("valid regex")
});

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[A-Za-z0-9_]+$").expect("valid regex"));

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_]+$").expect("valid regex"));

static XML_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:</?[A-Za-z][A-Za-z0-9:._-]*/?>|&(?:amp;)+(?:#[xX][0-9A-Fa-f]{1,6}|#\d{1,7}|[a-z]{1,6});|&(?:amp|apos|lt|gt|quot|nbsp);|&#\d{1,7};|&#[xX][0-9A-Fa-f]{1,6};)$",
    )
    .expect("valid regex")
});

static INFO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(?:[.,:/-]\d+)*%?$").expect("valid regex"));

// --- unsplit punctuation ---

static ALPHA_HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+-+").expect("valid regex"));

static INTERNAL_HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z'`]-[a-z'`]").expect("valid regex"));

static LEADING_HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-[a-z'`]").expect("valid regex"));

static DOUBLE_HYPHEN_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--+\d").expect("valid regex"));

/// Trailing ASCII punctuation after an alphanumeric. Sentence-final `.`,
/// `!`, `?` and the apostrophe are handled by their own rule chains.
static TRAILING_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[A-Za-z0-9][-,;:_/|\\"(){}\[\]<>+=*&%$~#^]+$"#).expect("valid regex")
});

static DIGIT_COMMA_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d,[A-Za-z]").expect("valid regex"));

/// Leading punctuation run glued to an alphanumeric (`::emphasis`, `,word`).
static LEADING_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[,;:|/\\&%$#*+=]+[A-Za-z0-9]").expect("valid regex"));

// --- benign punctuation patterns ---

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}(?::\d{2})?$").expect("valid regex"));

static HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}h\d{2}$").expect("valid regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,4}[-/.]\d{1,2}[-/.]\d{1,4}$").expect("valid regex"));

static THOUSANDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:,\d{3})+(?:\.\d+)?$").expect("valid regex"));

static ARTICLE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^::[a-z]+$").expect("valid regex"));

// --- periods ---

static NUM_PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.$").expect("valid regex"));

static TRAILING_PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9'`]\.+$").expect("valid regex"));

static CAP_ABBREV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+$").expect("valid regex"));

static NUMERIC_PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)*\.?$").expect("valid regex"));

static DOMAIN_PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = domains::suffix_alternation();
    Regex::new(&format!(
        r"(?i)^(?:[a-z0-9-]+\.)+(?:{suffixes}|[a-z]{{2}})\.?$"
    ))
    .expect("valid regex")
});

// --- suspicious URLs ---

static SUSPICIOUS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:www\.|https?:)\S").expect("valid regex"));

static EMBEDDED_DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:com|org)\b").expect("valid regex"));

// --- mixed script ---

static ARABIC_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:وال|بال|لل|وب|ال|ب|ل|و)[A-Za-z0-9]+$").expect("valid regex")
});

/// Classify one token. Returns `true` when a fast track handled it.
pub fn classify_token(
    store: &mut ExampleStore,
    policy: &LanguagePolicy,
    long_token_min: usize,
    token: &[u8],
    loc: &str,
) -> bool {
    if token.is_empty() {
        return true;
    }
    if fast_track(store, token, loc, long_token_min) {
        return true;
    }

    if let Ok(text) = std::str::from_utf8(token) {
        let special = special_token_type(text);
        match special {
            Some(SpecialToken::Email) => {
                store.note(Category::Email, text, loc, NoteMode::Unconditional, None);
            }
            Some(SpecialToken::Url) => {
                store.note(Category::Url, text, loc, NoteMode::Unconditional, None);
            }
            Some(SpecialToken::Hashtag) => {
                store.note(Category::Hashtag, text, loc, NoteMode::Unconditional, None);
            }
            Some(SpecialToken::Handle) => {
                store.note(Category::Handle, text, loc, NoteMode::Unconditional, None);
            }
            Some(SpecialToken::Xml | SpecialToken::Info) | None => {}
        }
        if special.is_none() {
            apostrophe_rules(store, policy, text, loc);
            punct_rules(store, policy, text, loc);
            period_rules(store, policy, text, loc);
            if SUSPICIOUS_URL_RE.is_match(text) || EMBEDDED_DOMAIN_RE.is_match(text) {
                store.note(Category::SuspiciousUrl, text, loc, NoteMode::Unconditional, None);
            }
        }
        mixed_script_rules(store, text, loc);
        nukta_rules(store, text, loc);
    }

    long_token_rules(store, token, loc, long_token_min);
    charclass::classify_token_chars(store, policy, token, loc);
    false
}

/// Early exits for trivially benign tokens.
///
/// Must emit exactly the tags the slow path would, so the optimization is
/// observationally invisible.
fn fast_track(store: &mut ExampleStore, token: &[u8], loc: &str, long_token_min: usize) -> bool {
    if token.len() < long_token_min && token.iter().all(u8::is_ascii_alphabetic) {
        let text = String::from_utf8_lossy(token);
        if token.eq_ignore_ascii_case(b"cannot") {
            store.note(Category::UnsplitNot, &text, loc, NoteMode::Unconditional, None);
        }
        store.note(Category::AsciiLetter, &text, loc, NoteMode::Initial, None);
        return true;
    }
    if token.len() < long_token_min && token.iter().all(u8::is_ascii_digit) {
        return true;
    }
    if token.len() == 1 && token[0].is_ascii_punctuation() {
        return true;
    }
    if token.len() < 40
        && let Ok(text) = std::str::from_utf8(token)
        && text.chars().all(is_plain_arabic_letter)
    {
        store.note(Category::ArabicLetter, text, loc, NoteMode::Initial, None);
        return true;
    }
    if token.len() < 60
        && let Ok(text) = std::str::from_utf8(token)
        && text.chars().all(|c| matches!(u32::from(c), 0x4E00..=0x9FFF))
    {
        store.note(Category::Cjk, text, loc, NoteMode::Initial, None);
        return true;
    }
    false
}

/// Arabic letters with no sub-detection of their own. Yeh, kaf, tatweel,
/// digits and punctuation are excluded so the fast track stays equivalent
/// to the character classifier.
fn is_plain_arabic_letter(c: char) -> bool {
    matches!(u32::from(c), 0x621..=0x63A | 0x641..=0x642 | 0x644..=0x649)
}

fn special_token_type(text: &str) -> Option<SpecialToken> {
    if EMAIL_RE.is_match(text) {
        Some(SpecialToken::Email)
    } else if SCHEME_URL_RE.is_match(text) || DOMAIN_URL_RE.is_match(text) {
        Some(SpecialToken::Url)
    } else if HASHTAG_RE.is_match(text) {
        Some(SpecialToken::Hashtag)
    } else if HANDLE_RE.is_match(text) {
        Some(SpecialToken::Handle)
    } else if XML_TOKEN_RE.is_match(text) {
        Some(SpecialToken::Xml)
    } else if INFO_RE.is_match(text) {
        Some(SpecialToken::Info)
    } else {
        None
    }
}

fn apostrophe_rules(store: &mut ExampleStore, policy: &LanguagePolicy, text: &str, loc: &str) {
    let lower = text.to_lowercase();
    if BARE_CLITICS.contains(lower.as_str())
        || policy.benign_apostrophe(text)
        || (policy.code() == Some("eng") && lower == "o'clock")
    {
        store.note(Category::BenUnsplitApo, text, loc, NoteMode::Unconditional, None);
    } else if lower.ends_with("'s") || lower.ends_with("s'") {
        store.note(Category::UnsplitApoS, text, loc, NoteMode::Unconditional, None);
    } else if lower.ends_with("'d")
        || lower.ends_with("'ll")
        || lower.ends_with("'m")
        || lower.ends_with("'ve")
    {
        store.note(Category::UnsplitApoV, text, loc, NoteMode::Unconditional, None);
    } else if lower.ends_with("n't") || lower == "cannot" {
        store.note(Category::UnsplitNot, text, loc, NoteMode::Unconditional, None);
    }
}

fn punct_rules(store: &mut ExampleStore, policy: &LanguagePolicy, text: &str, loc: &str) {
    if ALPHA_HYPHEN_RE.is_match(text) {
        store.note(
            Category::UnsplitPunctAlphaHyphen,
            text,
            loc,
            NoteMode::Unconditional,
            None,
        );
        return;
    }
    let hit = INTERNAL_HYPHEN_RE.is_match(text)
        || LEADING_HYPHEN_RE.is_match(text)
        || DOUBLE_HYPHEN_DIGIT_RE.is_match(text)
        || TRAILING_PUNCT_RE.is_match(text)
        || LEADING_PUNCT_RE.is_match(text)
        || DIGIT_COMMA_LETTER_RE.is_match(text);
    if hit {
        let cat = if benign_punct(policy, text) {
            Category::BenUnsplitPunct
        } else {
            Category::UnsplitPunct
        };
        store.note(cat, text, loc, NoteMode::Unconditional, None);
    }
}

fn benign_punct(policy: &LanguagePolicy, text: &str) -> bool {
    TIME_RE.is_match(text)
        || HOUR_RE.is_match(text)
        || DATE_RE.is_match(text)
        || THOUSANDS_RE.is_match(text)
        || ARTICLE_MARKER_RE.is_match(text)
        || policy.benign_vowel_apostrophe(text)
}

fn period_rules(store: &mut ExampleStore, policy: &LanguagePolicy, text: &str, loc: &str) {
    if NUM_PERIOD_RE.is_match(text) {
        store.note(Category::NumUnsplitPeriod, text, loc, NoteMode::Unconditional, None);
        return;
    }
    if !TRAILING_PERIOD_RE.is_match(text) {
        return;
    }
    let cat = if benign_period(policy, text) {
        Category::BenUnsplitPeriod
    } else {
        Category::UnsplitPeriod
    };
    store.note(cat, text, loc, NoteMode::Unconditional, None);
}

fn benign_period(policy: &LanguagePolicy, text: &str) -> bool {
    CAP_ABBREV_RE.is_match(text)
        || FIXED_ABBREVIATIONS.contains(text.to_lowercase().as_str())
        || NUMERIC_PERIOD_RE.is_match(text)
        || TITLE_ABBREVIATIONS.contains(text)
        || MONTH_ABBREVIATIONS.contains(text)
        || DOMAIN_PERIOD_RE.is_match(text)
        || (text.contains('@') && text.contains('.'))
        || (policy.uses_malagasy_abbreviations() && MALAGASY_ABBREVIATIONS.contains(text))
}

/// Which scripts a token mixes, by simple presence flags.
#[derive(Default)]
struct ScriptFlags {
    ascii_alpha: bool,
    ascii_digit: bool,
    ascii_punct: bool,
    latin: bool,
    arabic: bool,
    cjk: bool,
    cyrillic: bool,
    georgian: bool,
}

fn script_flags(text: &str) -> ScriptFlags {
    let mut f = ScriptFlags::default();
    for c in text.chars() {
        let cp = u32::from(c);
        match cp {
            0x41..=0x5A | 0x61..=0x7A => {
                f.ascii_alpha = true;
                f.latin = true;
            }
            0x30..=0x39 => f.ascii_digit = true,
            0x21..=0x7E => f.ascii_punct = true,
            // multiplication and division signs are not letters
            0xC0..=0xD6 | 0xD8..=0xF6 | 0xF8..=0x24F | 0x1E00..=0x1EFF => f.latin = true,
            0x400..=0x52F | 0xA640..=0xA69F => f.cyrillic = true,
            0x600..=0x6FF | 0x750..=0x77F | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF => f.arabic = true,
            0x10A0..=0x10FF | 0x1C90..=0x1CBF | 0x2D00..=0x2D2F => f.georgian = true,
            0x2E80..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x2EBEF => f.cjk = true,
            _ => {}
        }
    }
    f
}

fn mixed_script_rules(store: &mut ExampleStore, text: &str, loc: &str) {
    let f = script_flags(text);
    let ascii = f.ascii_alpha || f.ascii_digit;

    if ascii && f.arabic {
        let cat = if ARABIC_PREFIX_RE.is_match(text) {
            Category::ArabicPrefixAscii
        } else {
            Category::MixedArabicAscii
        };
        store.note(cat, text, loc, NoteMode::Unconditional, None);
    }
    if ascii && f.cjk {
        store.note(Category::MixedCjkAscii, text, loc, NoteMode::Unconditional, None);
    }
    // Latin + Cyrillic only; Latin + Greek is deliberately not flagged.
    if f.latin && f.cyrillic {
        store.note(Category::MixedCyrillicLatin, text, loc, NoteMode::Unconditional, None);
    }
    if f.cyrillic && f.ascii_punct && !f.latin {
        let cat = match punct_position(text) {
            PunctPosition::Prefix => Category::CyrillicPunctPrefix,
            PunctPosition::PeriodOnly => Category::CyrillicPunctPeriod,
            PunctPosition::Suffix => Category::CyrillicPunctSuffix,
            PunctPosition::Mixed => Category::CyrillicPunctMixed,
        };
        store.note(cat, text, loc, NoteMode::Unconditional, None);
    }
    if f.georgian && f.ascii_punct {
        let cat = match punct_position(text) {
            PunctPosition::Prefix => Category::GeorgianPunctPrefix,
            PunctPosition::PeriodOnly => Category::GeorgianPunctPeriod,
            PunctPosition::Suffix => Category::GeorgianPunctSuffix,
            PunctPosition::Mixed => Category::GeorgianPunctMixed,
        };
        store.note(cat, text, loc, NoteMode::Unconditional, None);
    }
}

enum PunctPosition {
    Prefix,
    Suffix,
    PeriodOnly,
    Mixed,
}

/// Where the ASCII punctuation sits relative to the script characters.
fn punct_position(text: &str) -> PunctPosition {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.iter().filter(|c| c.is_ascii_punctuation()).count();
    let leading = chars
        .iter()
        .take_while(|c| c.is_ascii_punctuation())
        .count();
    let trailing = chars
        .iter()
        .rev()
        .take_while(|c| c.is_ascii_punctuation())
        .count();
    if total == 1 && trailing == 1 && chars.last() == Some(&'.') {
        PunctPosition::PeriodOnly
    } else if total == leading {
        PunctPosition::Prefix
    } else if total == trailing {
        PunctPosition::Suffix
    } else {
        PunctPosition::Mixed
    }
}

/// Devanagari bases that take a separate nukta in standard orthography.
fn is_nukta_base(c: char) -> bool {
    matches!(
        u32::from(c),
        0x915 | 0x916 | 0x917 | 0x91C | 0x921 | 0x922 | 0x928 | 0x92B | 0x92F | 0x930 | 0x933
    )
}

const NUKTA: char = '\u{093C}';

fn is_vowel_sign(c: char) -> bool {
    matches!(u32::from(c), 0x93E..=0x94D)
}

fn nukta_rules(store: &mut ExampleStore, text: &str, loc: &str) {
    if !text.chars().any(|c| matches!(u32::from(c), 0x900..=0x97F)) {
        return;
    }
    let chars: Vec<char> = text.chars().collect();
    let mut found: Vec<Category> = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == NUKTA {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let cat = match prev {
                Some(p) if is_vowel_sign(p) => Category::DisVsgnNukta,
                Some(p) if is_nukta_base(p) => Category::StdSepNukta,
                _ => Category::AltSepNukta,
            };
            if !found.contains(&cat) {
                found.push(cat);
            }
        } else if matches!(u32::from(c), 0x929 | 0x931 | 0x934) {
            if !found.contains(&Category::StdCmpNukta) {
                found.push(Category::StdCmpNukta);
            }
        } else if matches!(u32::from(c), 0x958..=0x95F)
            && !found.contains(&Category::AltCmpNukta)
        {
            found.push(Category::AltCmpNukta);
        }
    }
    for cat in found {
        store.note(cat, text, loc, NoteMode::Unconditional, None);
    }
}

fn long_token_rules(store: &mut ExampleStore, token: &[u8], loc: &str, long_token_min: usize) {
    // Lead bytes only: codepoint count without a full decode.
    let leads = token.iter().filter(|b| *b & 0xC0 != 0x80).count();
    if leads >= 30 {
        let text = String::from_utf8_lossy(token);
        store.note(Category::LongToken30, &text, loc, NoteMode::Unconditional, None);
    } else if leads >= long_token_min {
        let allowlisted = std::str::from_utf8(token).is_ok_and(long_words::is_allowlisted);
        if !allowlisted {
            let text = String::from_utf8_lossy(token);
            store.note(Category::LongToken20, &text, loc, NoteMode::Unconditional, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LONG_TOKEN_MIN;

    fn run_lang(token: &str, lang: Option<&str>) -> (ExampleStore, bool) {
        let mut store = ExampleStore::new(20, 10);
        let policy = LanguagePolicy::for_code(lang);
        let fast = classify_token(
            &mut store,
            &policy,
            DEFAULT_LONG_TOKEN_MIN,
            token.as_bytes(),
            "1",
        );
        (store, fast)
    }

    fn run(token: &str) -> (ExampleStore, bool) {
        run_lang(token, None)
    }

    #[test]
    fn plain_word_takes_fast_track() {
        let (store, fast) = run("hello");
        assert!(fast);
        assert_eq!(store.count(Category::AsciiLetter), 1);
    }

    #[test]
    fn cannot_is_unsplit_not() {
        let (store, fast) = run("cannot");
        assert!(fast);
        assert_eq!(store.count(Category::UnsplitNot), 1);
        assert_eq!(store.count(Category::AsciiLetter), 1);
    }

    #[test]
    fn fast_track_matches_slow_path_for_ascii_words() {
        for word in ["a", "Hello", "zebra", "CANNOT", "cannot"] {
            let (fast_store, fast) = run(word);
            assert!(fast, "{word} should fast-track");
            // slow path: same word forced through the full classifier
            let mut slow_store = ExampleStore::new(20, 10);
            let policy = LanguagePolicy::for_code(None);
            let special = special_token_type(word);
            assert!(special.is_none());
            apostrophe_rules(&mut slow_store, &policy, word, "1");
            punct_rules(&mut slow_store, &policy, word, "1");
            period_rules(&mut slow_store, &policy, word, "1");
            mixed_script_rules(&mut slow_store, word, "1");
            nukta_rules(&mut slow_store, word, "1");
            long_token_rules(&mut slow_store, word.as_bytes(), "1", DEFAULT_LONG_TOKEN_MIN);
            charclass::classify_token_chars(&mut slow_store, &policy, word.as_bytes(), "1");
            for (cat, _, _) in crate::categories::REGISTRY {
                assert_eq!(
                    fast_store.count(*cat),
                    slow_store.count(*cat),
                    "fast/slow disagree on {} for {word}",
                    cat.tag()
                );
            }
        }
    }

    #[test]
    fn digits_and_single_punct_emit_nothing() {
        let (store, fast) = run("12345");
        assert!(fast);
        assert_eq!(store.count(Category::AsciiLetter), 0);
        let (store, fast) = run(".");
        assert!(fast);
        assert_eq!(store.count(Category::UnsplitPeriod), 0);
    }

    #[test]
    fn pure_arabic_fast_track() {
        let (store, fast) = run("كتاب");
        // contains kaf (U+0643), which has sub-detection: not a fast track
        assert!(!fast);
        assert_eq!(store.count(Category::ArabicLetterKaf), 1);

        let (store, fast) = run("بسم");
        assert!(fast);
        assert_eq!(store.count(Category::ArabicLetter), 1);
    }

    #[test]
    fn pure_cjk_fast_track() {
        let (store, fast) = run("中文");
        assert!(fast);
        assert_eq!(store.count(Category::Cjk), 1);
    }

    #[test]
    fn email_is_clean() {
        let (store, _) = run("president@whitehouse.org");
        assert_eq!(store.count(Category::Email), 1);
        assert_eq!(store.count(Category::UnsplitPeriod), 0);
        assert_eq!(store.count(Category::SuspiciousUrl), 0);
    }

    #[test]
    fn url_preferred_over_suspicious() {
        let (store, _) = run("https://example.com/path");
        assert_eq!(store.count(Category::Url), 1);
        assert_eq!(store.count(Category::SuspiciousUrl), 0);
    }

    #[test]
    fn malformed_url_is_suspicious() {
        let (store, _) = run("www.broken,com");
        assert_eq!(store.count(Category::Url), 0);
        assert_eq!(store.count(Category::SuspiciousUrl), 1);
    }

    #[test]
    fn hashtag_and_handle() {
        let (store, _) = run("#topic");
        assert_eq!(store.count(Category::Hashtag), 1);
        let (store, _) = run("@someone");
        assert_eq!(store.count(Category::Handle), 1);
    }

    #[test]
    fn nested_escape_token_is_exempt_from_unsplit_checks() {
        let (store, _) = run("&amp;quot;");
        assert_eq!(store.count(Category::UnsplitPunct), 0);
        assert_eq!(store.count(Category::UnsplitPeriod), 0);
    }

    #[test]
    fn possessive_is_unsplit() {
        let (store, _) = run("boy's");
        assert_eq!(store.count(Category::UnsplitApoS), 1);
        let (store, _) = run("boys'");
        assert_eq!(store.count(Category::UnsplitApoS), 1);
    }

    #[test]
    fn bare_clitic_is_benign() {
        let (store, _) = run("'s");
        assert_eq!(store.count(Category::BenUnsplitApo), 1);
        assert_eq!(store.count(Category::UnsplitApoS), 0);
        let (store, _) = run("n't");
        assert_eq!(store.count(Category::BenUnsplitApo), 1);
        assert_eq!(store.count(Category::UnsplitNot), 0);
    }

    #[test]
    fn oclock_benign_only_for_english() {
        let (store, _) = run_lang("o'clock", Some("eng"));
        assert_eq!(store.count(Category::BenUnsplitApo), 1);
        let (store, _) = run("o'clock");
        assert_eq!(store.count(Category::BenUnsplitApo), 0);
    }

    #[test]
    fn contraction_chains() {
        let (store, _) = run("isn't");
        assert_eq!(store.count(Category::UnsplitNot), 1);
        let (store, _) = run("they've");
        assert_eq!(store.count(Category::UnsplitApoV), 1);
    }

    #[test]
    fn hyphenated_word_is_alpha_hyphen() {
        let (store, _) = run("well-known");
        assert_eq!(store.count(Category::UnsplitPunctAlphaHyphen), 1);
        assert_eq!(store.count(Category::UnsplitPunct), 0);
    }

    #[test]
    fn trailing_comma_is_unsplit_punct() {
        let (store, _) = run("word,");
        assert_eq!(store.count(Category::UnsplitPunct), 1);
    }

    #[test]
    fn trailing_exclamation_is_not_flagged() {
        let (store, _) = run("Hello!");
        assert_eq!(store.count(Category::UnsplitPunct), 0);
    }

    #[test]
    fn article_marker_is_benign_punct() {
        let (store, _) = run("::emphasis");
        assert_eq!(store.count(Category::BenUnsplitPunct), 1);
        assert_eq!(store.count(Category::UnsplitPunct), 0);
    }

    #[test]
    fn number_with_period() {
        let (store, _) = run("42.");
        assert_eq!(store.count(Category::NumUnsplitPeriod), 1);
        assert_eq!(store.count(Category::UnsplitPeriod), 0);
    }

    #[test]
    fn abbreviations_are_benign_periods() {
        for tok in ["U.", "U.S.", "U.S.A.", "a.m.", "vs.", "Dr.", "Oct."] {
            let (store, _) = run(tok);
            assert_eq!(store.count(Category::BenUnsplitPeriod), 1, "{tok}");
            assert_eq!(store.count(Category::UnsplitPeriod), 0, "{tok}");
        }
    }

    #[test]
    fn trailing_period_on_word_is_unsplit() {
        let (store, _) = run("ordinary.");
        assert_eq!(store.count(Category::UnsplitPeriod), 1);
    }

    #[test]
    fn malagasy_books_only_for_mlg() {
        let (store, _) = run_lang("Apok.", Some("mlg"));
        assert_eq!(store.count(Category::BenUnsplitPeriod), 1);
        let (store, _) = run("Apok.");
        assert_eq!(store.count(Category::UnsplitPeriod), 1);
    }

    #[test]
    fn mixed_cyrillic_latin_word() {
        let (store, _) = run("Hеllο!");
        assert_eq!(store.count(Category::MixedCyrillicLatin), 1);
        assert_eq!(store.count(Category::AsciiLetter), 1);
        assert_eq!(store.count(Category::Cyrillic), 1);
        assert_eq!(store.count(Category::Greek), 1);
        assert_eq!(store.count(Category::UnsplitPunct), 0);
    }

    #[test]
    fn latin_greek_mix_is_not_flagged() {
        let (store, _) = run("Hellο");
        assert_eq!(store.count(Category::MixedCyrillicLatin), 0);
    }

    #[test]
    fn arabic_prefix_before_ascii() {
        let (store, _) = run("ال123");
        assert_eq!(store.count(Category::ArabicPrefixAscii), 1);
        assert_eq!(store.count(Category::MixedArabicAscii), 0);
        let (store, _) = run("x7شيء");
        assert_eq!(store.count(Category::MixedArabicAscii), 1);
    }

    #[test]
    fn cjk_ascii_mix() {
        let (store, _) = run("abc中");
        assert_eq!(store.count(Category::MixedCjkAscii), 1);
    }

    #[test]
    fn cyrillic_punct_positions() {
        let (store, _) = run("слово.");
        assert_eq!(store.count(Category::CyrillicPunctPeriod), 1);
        let (store, _) = run("(слово");
        assert_eq!(store.count(Category::CyrillicPunctPrefix), 1);
        let (store, _) = run("слово,,");
        assert_eq!(store.count(Category::CyrillicPunctSuffix), 1);
        let (store, _) = run("сло,во");
        assert_eq!(store.count(Category::CyrillicPunctMixed), 1);
    }

    #[test]
    fn nukta_variants() {
        // qa as base + separate nukta
        let (store, _) = run("क\u{093C}");
        assert_eq!(store.count(Category::StdSepNukta), 1);
        // legacy precomposed qa
        let (store, _) = run("\u{0958}");
        assert_eq!(store.count(Category::AltCmpNukta), 1);
        // vowel sign before nukta: wrong order
        let (store, _) = run("क\u{093E}\u{093C}");
        assert_eq!(store.count(Category::DisVsgnNukta), 1);
        // standard precomposed rra
        let (store, _) = run("\u{0931}");
        assert_eq!(store.count(Category::StdCmpNukta), 1);
    }

    #[test]
    fn long_token_thresholds() {
        let twenty = "a".repeat(20);
        let (store, _) = run(&twenty);
        assert_eq!(store.count(Category::LongToken20), 1);
        assert_eq!(store.count(Category::LongToken30), 0);

        let thirty = "a".repeat(30);
        let (store, _) = run(&thirty);
        assert_eq!(store.count(Category::LongToken30), 1);
        assert_eq!(store.count(Category::LongToken20), 0);
    }

    #[test]
    fn allowlisted_long_word_is_exempt() {
        let (store, _) = run("internationalization");
        assert_eq!(store.count(Category::LongToken20), 0);
    }
}
