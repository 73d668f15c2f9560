//! Byte-level character classification.
//!
//! Walks the raw bytes of one token, validating UTF-8 framing as it goes.
//! Ill-formed sequences become `NON_UTF8`, overlong encodings become
//! `UTF8_NON_SHORTEST`, and every well-formed codepoint is classified into
//! at most one primary category by [`codepoint_category`]. The walker never
//! fails: every byte of the token is accounted for by exactly one of a
//! well-formed codepoint, `NON_UTF8`, or `UTF8_NON_SHORTEST`.

use crate::categories::Category;
use crate::language::LanguagePolicy;
use crate::store::{ExampleStore, NoteMode};

const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Classify every character of `token`, noting issues into `store`.
///
/// The first emitted note uses [`NoteMode::Initial`] (resetting the
/// per-token dedup set); all later notes use [`NoteMode::FollowUp`].
pub fn classify_token_chars(
    store: &mut ExampleStore,
    policy: &LanguagePolicy,
    token: &[u8],
    loc: &str,
) {
    let token_text = String::from_utf8_lossy(token).into_owned();
    let mut noted_any = false;
    let mut i = 0;

    // mode for the next note: Initial exactly once per token
    macro_rules! emit {
        ($cat:expr, $example:expr, $ch:expr) => {{
            let mode = if noted_any {
                NoteMode::FollowUp
            } else {
                NoteMode::Initial
            };
            store.note($cat, $example, loc, mode, $ch);
            noted_any = true;
        }};
    }

    while i < token.len() {
        let start = i;
        let b = token[i];

        if b < 0x80 {
            i += 1;
            if b.is_ascii_alphabetic() {
                let ch = (b as char).to_string();
                emit!(Category::AsciiLetter, &token_text, Some(ch.as_str()));
            } else if b < 0x20 || b == 0x7F {
                emit!(Category::ControlChar, &token_text, None);
            }
            // ASCII digits and punctuation carry no character category;
            // they are covered by the whole-token checks.
            continue;
        }

        if b < 0xC0 {
            // Token starts with (or resynchronizes onto) a continuation run.
            while i < token.len() && is_continuation(token[i]) {
                i += 1;
            }
            emit!(Category::NonUtf8, &token_text, None);
            continue;
        }

        let need = match b {
            0xC0..=0xDF => 1,
            0xE0..=0xEF => 2,
            0xF0..=0xF7 => 3,
            0xF8..=0xFB => 4,
            0xFC..=0xFD => 5,
            _ => {
                i += 1;
                emit!(Category::NonUtf8, &token_text, None);
                continue;
            }
        };

        let frame_ok = (1..=need).all(|k| token.get(start + k).is_some_and(|b| is_continuation(*b)));
        if !frame_ok {
            // Resynchronize at the next lead byte.
            i += 1;
            while i < token.len() && is_continuation(token[i]) {
                i += 1;
            }
            emit!(Category::NonUtf8, &token_text, None);
            continue;
        }
        i = start + 1 + need;

        if need >= 4 {
            // 5/6-byte framings are tolerated for detection only.
            emit!(Category::NonUtf8, &token_text, None);
            continue;
        }

        let c1 = token[start + 1];
        let overlong = match need {
            1 => b <= 0xC1,
            2 => b == 0xE0 && c1 <= 0x9F,
            _ => b == 0xF0 && c1 <= 0x8F,
        };
        if overlong {
            emit!(Category::Utf8NonShortest, &token_text, None);
            continue;
        }

        let cp = match need {
            1 => (u32::from(b & 0x1F) << 6) | u32::from(c1 & 0x3F),
            2 => {
                (u32::from(b & 0x0F) << 12)
                    | (u32::from(c1 & 0x3F) << 6)
                    | u32::from(token[start + 2] & 0x3F)
            }
            _ => {
                (u32::from(b & 0x07) << 18)
                    | (u32::from(c1 & 0x3F) << 12)
                    | (u32::from(token[start + 2] & 0x3F) << 6)
                    | u32::from(token[start + 3] & 0x3F)
            }
        };

        let Some(ch) = char::from_u32(cp) else {
            // surrogate halves and out-of-range planes
            emit!(Category::NonUtf8, &token_text, None);
            continue;
        };
        let mut buf = [0u8; 4];
        let ch_str: &str = ch.encode_utf8(&mut buf);

        if cp == 0xFEFF {
            let cat = if start == 0 {
                Category::InitialByteOrderMark
            } else {
                Category::ZeroWidth
            };
            emit!(cat, &token_text, None);
        } else if policy.is_language_char(cp) {
            emit!(Category::LanguageSpecific, &token_text, Some(ch_str));
        } else if matches!(cp, 0x132 | 0x133 | 0x152 | 0x153) {
            emit!(Category::LatinExtendedLigature, &token_text, Some(ch_str));
        } else if let Some(cat) = codepoint_category(cp) {
            emit!(cat, &token_text, Some(ch_str));
        }
    }
}

/// The primary category for a codepoint, by range.
///
/// At most one category per codepoint. ASCII digits, punctuation, and
/// whitespace return `None`; everything else that reaches the end of the
/// table is `OTHER_CHAR`.
#[allow(clippy::too_many_lines)]
pub(crate) fn codepoint_category(cp: u32) -> Option<Category> {
    use Category::*;
    Some(match cp {
        // --- ASCII ---
        0x00..=0x08 | 0x0B..=0x1F | 0x7F => ControlChar,
        0x41..=0x5A | 0x61..=0x7A => AsciiLetter,
        0x00..=0x7F => return None,

        // --- Latin-1 supplement ---
        0x80..=0x9F => ControlChar,
        0xA0 => NonAsciiWhitespace,
        0xA2..=0xA5 => CurrencySymbol,
        0xA9 | 0xAE | 0xB5 => LetterlikeSymbol,
        0xAC | 0xB1 | 0xD7 | 0xF7 => MathematicalOperator,
        0xAD => ZeroWidth,
        0xB0 | 0xB2 | 0xB3 | 0xB9 | 0xAA | 0xBA | 0xBC..=0xBE => MiscSymbol,
        0xA1 | 0xA6..=0xA8 | 0xAB | 0xAF | 0xB4 | 0xB6..=0xB8 | 0xBB | 0xBF => NonAsciiPunct,
        0xC0..=0xFF => LatinPlusAlpha,

        // --- Latin extensions, phonetics, combining marks ---
        0x100..=0x24F => LatinPlusAlpha,
        0x250..=0x2AF => Ipa,
        0x2B0..=0x2FF => ModifierLetter,
        0x300..=0x36F => CombiningDiacritic,

        // --- European and Middle Eastern scripts ---
        0x3E2..=0x3EF => Coptic,
        0x370..=0x3FF => Greek,
        0x400..=0x52F => Cyrillic,
        0x530..=0x58F => Armenian,
        0x590..=0x5FF => Hebrew,

        // --- Arabic with sub-detection ---
        0x60C | 0x60D | 0x61B | 0x61E | 0x61F | 0x66A..=0x66D | 0x6D4 => ArabicPunct,
        0x640 => ArabicTatweel,
        0x643 => ArabicLetterKaf,
        0x64A => ArabicLetterYeh,
        0x64B..=0x65F | 0x670 => ArabicDiacritic,
        0x660..=0x669 => ArabicIndicDigit,
        0x6A9 => FarsiLetterKeheh,
        0x6CC => FarsiLetterYeh,
        0x6F0..=0x6F9 => ExtArabicIndicDigit,
        0x600..=0x6FF | 0x750..=0x77F => ArabicLetter,

        0x700..=0x74F => Syriac,
        0x780..=0x7BF => Thaana,

        // --- The Indic row ---
        0x900..=0x97F => Devanagari,
        0x980..=0x9FF => Bengali,
        0xA00..=0xA7F => Gurmukhi,
        0xA80..=0xAFF => Gujarati,
        0xB00..=0xB7F => Oriya,
        0xB80..=0xBFF => Tamil,
        0xC00..=0xC7F => Telugu,
        0xC80..=0xCFF => Kannada,
        0xD00..=0xD7F => Malayalam,
        0xD80..=0xDFF => Sinhala,

        // --- Southeast Asia, Tibetan, Myanmar ---
        0xE00..=0xE7F => Thai,
        0xE80..=0xEFF => Lao,
        0xF40..=0xFBC => TibetanLetter,
        0xF00..=0xFFF => TibetanPunct,
        0x1000..=0x109F => Myanmar,

        // --- Georgian ---
        0x10A0..=0x10C5 | 0x10C7 | 0x10CD => GeorgianAsomtavruli,
        0x10F1..=0x10F6 => GeorgianArchaic,
        0x10D0..=0x10FF => Georgian,

        0x1100..=0x11FF => Hangul,
        0x1200..=0x139F => Ethiopic,
        0x13A0..=0x13FF => Cherokee,
        0x1400..=0x167F => CanadianSyllabic,
        0x1680..=0x169F => Ogham,
        0x16A0..=0x16FF => Runic,
        0x1780..=0x17FF => Khmer,
        0x1800..=0x18AF => Mongolian,
        0x1A00..=0x1A1F => Buginese,
        0x1B80..=0x1BBF => Sundanese,
        0x1C90..=0x1CBF => GeorgianEmphasis,
        0x1D00..=0x1DBF => Ipa,
        0x1DC0..=0x1DFF => CombiningDiacritic,
        0x1E00..=0x1EFF => LatinPlusAlpha,
        0x1F00..=0x1FFF => Greek,

        // --- General punctuation and invisibles ---
        0x2000..=0x200A | 0x202F | 0x205F => NonAsciiWhitespace,
        0x200B..=0x200F | 0x2028..=0x202E | 0x2060..=0x206F | 0xFFF9..=0xFFFB => ZeroWidth,
        0x2010..=0x2027 | 0x2030..=0x205E => NonAsciiPunct,

        // --- Symbol families ---
        0x2070..=0x209F => MiscSymbol,
        0x20A0..=0x20CF => CurrencySymbol,
        0x20D0..=0x20FF => CombiningDiacritic,
        0x2100..=0x214F => LetterlikeSymbol,
        0x2150..=0x218F => MiscSymbol,
        0x2190..=0x21FF | 0x27F0..=0x27FF | 0x2900..=0x297F | 0x2B00..=0x2BFF => ArrowSymbol,
        0x2200..=0x22FF | 0x27C0..=0x27EF | 0x2980..=0x2AFF => MathematicalOperator,
        0x2300..=0x23FF | 0x2400..=0x245F => TechnicalSymbol,
        0x2460..=0x24FF => EnclosedAlphanumeric,
        0x2500..=0x259F => BoxDrawing,
        0x25A0..=0x25FF => GeometricShape,
        0x2600..=0x27BF | 0x2800..=0x28FF => MiscSymbol,

        0x2C80..=0x2CFF => Coptic,
        0x2D00..=0x2D2F => GeorgianNuskhuri,
        0x2E00..=0x2E7F => NonAsciiPunct,

        // --- CJK and neighbors ---
        0x2E80..=0x2FDF => Cjk,
        0x3000 => NonAsciiWhitespace,
        0x3001..=0x312F => Cjk,
        0x3130..=0x318F => Hangul,
        0x3190..=0x31FF => Cjk,
        0x3200..=0x32FF => EnclosedAlphanumeric,
        0x3300..=0x33FF => CjkSqLatin,
        0x3400..=0x4DBF => CjkExt,
        0x4DC0..=0x4DFF => MiscSymbol,
        0x4E00..=0x9FFF => Cjk,
        0xA000..=0xA4CF => Yi,
        0xA4D0..=0xA4FF => Lisu,
        0xA640..=0xA69F => Cyrillic,
        0xA700..=0xA7FF => LatinPlusAlpha,
        0xA980..=0xA9DF => Javanese,
        0xAA60..=0xAA7F => Myanmar,
        0xABC0..=0xABFF => MeeteiMayek,
        0xAC00..=0xD7FF => Hangul,

        // --- Private use, presentation forms, fullwidth ---
        0xF8D0..=0xF8FF => Klingon,
        0xE000..=0xF8CF => PrivateUse,
        0xF900..=0xFAFF => Cjk,
        0xFB00..=0xFB17 => Ligature,
        0xFB1D..=0xFB4F => Hebrew,
        0xFB50..=0xFDFF | 0xFE70..=0xFEFE => ArabicPresentation,
        0xFE00..=0xFE0F => VariationSelector,
        0xFE10..=0xFE1F | 0xFE50..=0xFE6F => NonAsciiPunct,
        0xFE20..=0xFE2F => CombiningDiacritic,
        0xFE30..=0xFE4F => Cjk,
        0xFF01..=0xFFEF => Fullwidth,
        0xFFFC => ReplacementObject,
        0xFFFD => ReplacementChar,

        // --- Beyond the BMP ---
        0x10330..=0x1034F => Gothic,
        0x10900..=0x1091F => Phoenician,
        0x12000..=0x1247F => Cuneiform,
        0x13000..=0x1342F => EgyptianHieroglyph,
        0x1D400..=0x1D7FF => MathAlphanumSymbol,
        0x1F100..=0x1F2FF => EnclosedAlphanumeric,
        0x1F000..=0x1F0FF | 0x1F300..=0x1FAFF => Pictograph,
        0x20000..=0x2EBEF | 0x2F800..=0x2FA1F => CjkExt,
        0xE0000..=0xE007F => Tag,
        0xE0100..=0xE01EF => VariationSelector,
        0xF0000..=0x10FFFF => PrivateUse,

        _ => OtherChar,
    })
}
