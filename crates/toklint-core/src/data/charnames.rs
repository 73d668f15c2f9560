//! Local Unicode name table for the structured dump.
//!
//! Covers the invisible and control ranges where a readable name matters
//! most in a dump. Characters outside the table fall back to their
//! `U+XXXX` identifier at the call site.

/// Name for a specially-tracked character, if locally known.
pub fn char_name(c: char) -> Option<&'static str> {
    Some(match c {
        '\0' => "NULL",
        '\u{0001}' => "START OF HEADING",
        '\u{0002}' => "START OF TEXT",
        '\u{0003}' => "END OF TEXT",
        '\u{0004}' => "END OF TRANSMISSION",
        '\u{0005}' => "ENQUIRY",
        '\u{0006}' => "ACKNOWLEDGE",
        '\u{0007}' => "BELL",
        '\u{0008}' => "BACKSPACE",
        '\t' => "TAB",
        '\n' => "LINE FEED",
        '\u{000B}' => "LINE TABULATION",
        '\u{000C}' => "FORM FEED",
        '\r' => "CARRIAGE RETURN",
        '\u{000E}' => "SHIFT OUT",
        '\u{000F}' => "SHIFT IN",
        '\u{001B}' => "ESCAPE",
        '\u{007F}' => "DELETE",
        '\u{0085}' => "NEXT LINE",
        '\u{00A0}' => "NO-BREAK SPACE",
        '\u{00AD}' => "SOFT HYPHEN",
        '\u{0640}' => "ARABIC TATWEEL",
        '\u{093C}' => "DEVANAGARI SIGN NUKTA",
        '\u{1680}' => "OGHAM SPACE MARK",
        '\u{2000}' => "EN QUAD",
        '\u{2001}' => "EM QUAD",
        '\u{2002}' => "EN SPACE",
        '\u{2003}' => "EM SPACE",
        '\u{2004}' => "THREE-PER-EM SPACE",
        '\u{2005}' => "FOUR-PER-EM SPACE",
        '\u{2006}' => "SIX-PER-EM SPACE",
        '\u{2007}' => "FIGURE SPACE",
        '\u{2008}' => "PUNCTUATION SPACE",
        '\u{2009}' => "THIN SPACE",
        '\u{200A}' => "HAIR SPACE",
        '\u{200B}' => "ZERO WIDTH SPACE",
        '\u{200C}' => "ZERO WIDTH NON-JOINER",
        '\u{200D}' => "ZERO WIDTH JOINER",
        '\u{200E}' => "LEFT-TO-RIGHT MARK",
        '\u{200F}' => "RIGHT-TO-LEFT MARK",
        '\u{2028}' => "LINE SEPARATOR",
        '\u{2029}' => "PARAGRAPH SEPARATOR",
        '\u{202A}' => "LEFT-TO-RIGHT EMBEDDING",
        '\u{202B}' => "RIGHT-TO-LEFT EMBEDDING",
        '\u{202C}' => "POP DIRECTIONAL FORMATTING",
        '\u{202D}' => "LEFT-TO-RIGHT OVERRIDE",
        '\u{202E}' => "RIGHT-TO-LEFT OVERRIDE",
        '\u{202F}' => "NARROW NO-BREAK SPACE",
        '\u{205F}' => "MEDIUM MATHEMATICAL SPACE",
        '\u{2060}' => "WORD JOINER",
        '\u{3000}' => "IDEOGRAPHIC SPACE",
        '\u{FEFF}' => "ZERO WIDTH NO-BREAK SPACE (BYTE ORDER MARK)",
        '\u{FFFC}' => "OBJECT REPLACEMENT CHARACTER",
        '\u{FFFD}' => "REPLACEMENT CHARACTER",
        '\u{0643}' => "ARABIC LETTER KAF",
        '\u{064A}' => "ARABIC LETTER YEH",
        '\u{06A9}' => "ARABIC LETTER KEHEH",
        '\u{06CC}' => "ARABIC LETTER FARSI YEH",
        _ => return None,
    })
}

/// `U+XXXX` identifier for any codepoint.
pub fn char_id(c: char) -> String {
    format!("U+{:04X}", u32::from(c))
}

/// Name with identifier fallback.
pub fn char_name_or_id(c: char) -> String {
    char_name(c).map_or_else(|| char_id(c), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names() {
        assert_eq!(char_name('\u{00A0}'), Some("NO-BREAK SPACE"));
        assert_eq!(char_name('\u{200D}'), Some("ZERO WIDTH JOINER"));
    }

    #[test]
    fn fallback_is_codepoint_id() {
        assert_eq!(char_name_or_id('Ω'), "U+03A9");
        assert_eq!(char_id('a'), "U+0061");
    }
}
