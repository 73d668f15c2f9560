//! The closed category registry.
//!
//! Every anomaly the engine can report is declared here, once, in the order
//! it appears in the final report. The registry order is a user-visible
//! contract: downstream diffing of reports depends on it, so new categories
//! are appended within their theme group rather than sorted.

/// Declares the [`Category`] enum and its registry table from a single list,
/// so the tag set is closed by construction: a variant cannot exist without
/// a registry row and vice versa.
macro_rules! categories {
    ($( $variant:ident => $tag:literal, $desc:literal; )+) => {
        /// A category tag from the fixed registry.
        ///
        /// Equality is identity; ordering for reports is registry order
        /// (see [`REGISTRY`]), not derive order games.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Category {
            $( $variant, )+
        }

        /// The registry in declaration order: `(category, tag, description)`.
        pub const REGISTRY: &[(Category, &str, &str)] = &[
            $( (Category::$variant, $tag, $desc), )+
        ];

        impl Category {
            /// Stable identifier used in report headers.
            pub fn tag(self) -> &'static str {
                match self {
                    $( Category::$variant => $tag, )+
                }
            }

            /// Human-readable description, fixed at declaration.
            pub fn description(self) -> &'static str {
                match self {
                    $( Category::$variant => $desc, )+
                }
            }
        }
    };
}

categories! {
    // Encoding integrity
    NonUtf8 => "NON_UTF8", "ill-formed UTF-8 byte sequence";
    Utf8NonShortest => "UTF8_NON_SHORTEST", "overlong (non-shortest-form) UTF-8 encoding";

    // Control and invisible characters
    ControlChar => "CONTROL_CHAR", "C0/C1 control character";
    NonAsciiWhitespace => "NON_ASCII_WHITESPACE", "non-ASCII whitespace (no-break space, ideographic space, ...)";
    NonAsciiWhitespaceChar => "NON_ASCII_WHITESPACE_CHAR", "individual non-ASCII whitespace character";
    ZeroWidth => "ZERO_WIDTH", "zero-width or invisible character (ZWSP, joiners, directional marks)";
    InitialByteOrderMark => "INITIAL_BYTE_ORDER_MARK", "byte order mark at start of token";
    VariationSelector => "VARIATION_SELECTOR", "variation selector";
    ReplacementChar => "REPLACEMENT_CHAR", "Unicode replacement character (U+FFFD)";
    ReplacementObject => "REPLACEMENT_OBJECT", "object replacement character (U+FFFC)";
    Tag => "TAG", "tag character (U+E0000 block)";
    TagChar => "TAG_CHAR", "individual tag character";

    // Symbol families
    NonAsciiPunct => "NON_ASCII_PUNCT", "non-ASCII punctuation";
    NonAsciiPunctChar => "NON_ASCII_PUNCT_CHAR", "individual non-ASCII punctuation character";
    CurrencySymbol => "CURRENCY_SYMBOL", "non-ASCII currency symbol";
    LetterlikeSymbol => "LETTERLIKE_SYMBOL", "letterlike symbol";
    LetterlikeSymbolChar => "LETTERLIKE_SYMBOL_CHAR", "individual letterlike symbol";
    MathematicalOperator => "MATHEMATICAL_OPERATOR", "mathematical operator";
    MathematicalOperatorChar => "MATHEMATICAL_OPERATOR_CHAR", "individual mathematical operator";
    TechnicalSymbol => "TECHNICAL_SYMBOL", "technical symbol";
    TechnicalSymbolChar => "TECHNICAL_SYMBOL_CHAR", "individual technical symbol";
    ArrowSymbol => "ARROW_SYMBOL", "arrow symbol";
    ArrowSymbolChar => "ARROW_SYMBOL_CHAR", "individual arrow symbol";
    EnclosedAlphanumeric => "ENCLOSED_ALPHANUMERIC", "enclosed alphanumeric";
    BoxDrawing => "BOX_DRAWING", "box drawing or block element";
    GeometricShape => "GEOMETRIC_SHAPE", "geometric shape";
    GeometricShapeChar => "GEOMETRIC_SHAPE_CHAR", "individual geometric shape";
    MiscSymbol => "MISC_SYMBOL", "miscellaneous symbol";
    MiscSymbolChar => "MISC_SYMBOL_CHAR", "individual miscellaneous symbol";
    Pictograph => "PICTOGRAPH", "pictograph or emoji";
    MathAlphanumSymbol => "MATH_ALPHANUM_SYMBOL", "mathematical alphanumeric symbol";

    // Scripts and character classes
    AsciiLetter => "ASCII_LETTER", "ASCII letter";
    LatinPlusAlpha => "LATIN_PLUS_ALPHA", "non-ASCII Latin letter";
    LanguageSpecific => "LANGUAGE_SPECIFIC", "letter specific to the configured language";
    LatinExtendedLigature => "LATIN_EXTENDED_LIGATURE", "Latin ligature letter (IJ, OE)";
    Ipa => "IPA", "IPA or phonetic extension letter";
    ModifierLetter => "MODIFIER_LETTER", "spacing modifier letter";
    CombiningDiacritic => "COMBINING_DIACRITIC", "combining diacritical mark";
    Greek => "GREEK", "Greek letter";
    Coptic => "COPTIC", "Coptic letter";
    Cyrillic => "CYRILLIC", "Cyrillic letter";
    Armenian => "ARMENIAN", "Armenian letter";
    Hebrew => "HEBREW", "Hebrew letter";
    ArabicLetter => "ARABIC_LETTER", "Arabic letter";
    ArabicLetterYeh => "ARABIC_LETTER_YEH", "Arabic letter yeh (U+064A)";
    FarsiLetterYeh => "FARSI_LETTER_YEH", "Farsi letter yeh (U+06CC)";
    ArabicLetterKaf => "ARABIC_LETTER_KAF", "Arabic letter kaf (U+0643)";
    FarsiLetterKeheh => "FARSI_LETTER_KEHEF", "Farsi letter keheh (U+06A9)";
    ArabicTatweel => "ARABIC_TATWEEL", "Arabic tatweel (kashida)";
    ArabicDiacritic => "ARABIC_DIACRITIC", "Arabic diacritic (fatha, damma, kasra, ...)";
    ArabicIndicDigit => "ARABIC_INDIC_DIGIT", "Arabic-Indic digit";
    ExtArabicIndicDigit => "EXTENDED_ARABIC_INDIC_DIGIT", "extended Arabic-Indic digit";
    ArabicPunct => "ARABIC_PUNCT", "Arabic punctuation";
    ArabicPresentation => "ARABIC_PRESENTATION", "Arabic presentation form";
    Syriac => "SYRIAC", "Syriac letter";
    Thaana => "THAANA", "Thaana letter";
    Devanagari => "DEVANAGARI", "Devanagari character";
    Bengali => "BENGALI", "Bengali character";
    Gurmukhi => "GURMUKHI", "Gurmukhi character";
    Gujarati => "GUJARATI", "Gujarati character";
    Oriya => "ORIYA", "Oriya character";
    Tamil => "TAMIL", "Tamil character";
    Telugu => "TELUGU", "Telugu character";
    Kannada => "KANNADA", "Kannada character";
    Malayalam => "MALAYALAM", "Malayalam character";
    Sinhala => "SINHALA", "Sinhala character";
    Thai => "THAI", "Thai character";
    Lao => "LAO", "Lao character";
    TibetanLetter => "TIBETAN_LETTER", "Tibetan letter";
    TibetanPunct => "TIBETAN_PUNCT", "Tibetan punctuation or sign";
    Myanmar => "MYANMAR", "Myanmar character";
    Georgian => "GEORGIAN", "Georgian (Mkhedruli) letter";
    GeorgianAsomtavruli => "GEORGIAN_ASOMTAVRULI", "Georgian Asomtavruli letter";
    GeorgianNuskhuri => "GEORGIAN_NUSKHURI", "Georgian Nuskhuri letter";
    GeorgianArchaic => "GEORGIAN_ARCHAIC", "archaic Georgian letter";
    GeorgianEmphasis => "GEORGIAN_EMPHASIS", "Georgian Mtavruli (emphasis) letter";
    Ethiopic => "ETHIOPIC", "Ethiopic character";
    Cherokee => "CHEROKEE", "Cherokee letter";
    CanadianSyllabic => "CANADIAN_SYLLABIC", "Canadian Aboriginal syllabic";
    Ogham => "OGHAM", "Ogham letter";
    Runic => "RUNIC", "Runic letter";
    Khmer => "KHMER", "Khmer character";
    Mongolian => "MONGOLIAN", "Mongolian character";
    Buginese => "BUGINESE", "Buginese character";
    Sundanese => "SUNDANESE", "Sundanese character";
    Cjk => "CJK", "CJK character (ideographs, kana, bopomofo)";
    CjkExt => "CJK_EXT", "CJK extension-plane ideograph";
    CjkSqLatin => "CJK_SQ_LATIN", "CJK squared Latin abbreviation";
    Yi => "YI", "Yi syllable";
    Lisu => "LISU", "Lisu letter";
    Javanese => "JAVANESE", "Javanese character";
    MeeteiMayek => "MEETEI_MAYEK", "Meetei Mayek character";
    Hangul => "HANGUL", "Hangul character";
    PrivateUse => "PRIVATE_USE", "private use character";
    Klingon => "KLINGON", "Klingon (pIqaD) private use character";
    Ligature => "LIGATURE", "alphabetic presentation-form ligature";
    Fullwidth => "FULLWIDTH", "fullwidth or halfwidth form";
    Gothic => "GOTHIC", "Gothic letter";
    Phoenician => "PHOENICIAN", "Phoenician letter";
    Cuneiform => "CUNEIFORM", "Cuneiform sign";
    EgyptianHieroglyph => "EGYPTIAN_HIEROGLYPH", "Egyptian hieroglyph";
    OtherChar => "OTHER_CHAR", "character outside all known ranges";

    // Tokenization quality: recognized token types
    Email => "EMAIL", "well-formed email address";
    Url => "URL", "well-formed URL";
    Hashtag => "HASHTAG", "hashtag";
    Handle => "HANDLE", "at-handle";
    SuspiciousUrl => "SUSPICIOUS_URL", "URL-like token that is not a clean URL";

    // Tokenization quality: split artifacts (line pre-scan)
    BrokenUrl => "BROKEN_URL", "URL split across tokens";
    BrokenUrlFuzzy => "BROKEN_URL_FUZZY", "URL-like debris split across tokens";
    BrokenEmail => "BROKEN_EMAIL", "email address split across tokens";
    BrokenEmailFuzzy => "BROKEN_EMAIL_FUZZY", "email-like debris split across tokens";
    BrokenFilename => "BROKEN_FILENAME", "filename split across tokens";
    SplitXml => "SPLIT_XML", "XML tag split across tokens";
    XmlEscDec => "XML_ESC_DEC", "decimal XML character escape";
    XmlEscHex => "XML_ESC_HEX", "hexadecimal XML character escape";
    XmlEscStd => "XML_ESC_STD", "standard XML entity escape";
    XmlEscAbc => "XML_ESC_ABC", "alphabetic XML entity escape";
    XmlEscNested => "XML_ESC_NESTED", "multiply-escaped XML entity (&amp;amp;...)";
    UnusualPunctComb => "UNUSUAL_PUNCT_COMB", "unusual punctuation combination";

    // Tokenization quality: unsplit artifacts
    UnsplitPunct => "UNSPLIT_PUNCT", "punctuation not split off a token";
    UnsplitPunctAlphaHyphen => "UNSPLIT_PUNCT_ALPHA_HYPHEN", "leading letters joined to hyphen";
    UnsplitPeriod => "UNSPLIT_PERIOD", "trailing period not split off a token";
    NumUnsplitPeriod => "NUM_UNSPLIT_PERIOD", "number with trailing period";
    UnsplitApoS => "UNSPLIT_APO_S", "unsplit possessive or contraction 's";
    UnsplitApoV => "UNSPLIT_APO_V", "unsplit verbal contraction ('d, 'll, 'm, 've)";
    UnsplitNot => "UNSPLIT_NOT", "unsplit negation (n't, cannot)";
    BenUnsplitPeriod => "BEN_UNSPLIT_PERIOD", "benign token with period (abbreviation, number, domain)";
    BenUnsplitApo => "BEN_UNSPLIT_APO", "benign token with apostrophe (clitic, language pattern)";
    BenUnsplitPunct => "BEN_UNSPLIT_PUNCT", "benign punctuation pattern (time, marker)";

    // Tokenization quality: mixed scripts
    MixedArabicAscii => "MIXED_ARABIC_ASCII", "token mixing Arabic and ASCII";
    ArabicPrefixAscii => "ARABIC_PREFIX_ASCII", "Arabic prefix joined to ASCII";
    MixedCjkAscii => "MIXED_CJK_ASCII", "token mixing CJK and ASCII";
    MixedCyrillicLatin => "MIXED_CYRILLIC_LATIN", "token mixing Cyrillic and Latin letters";
    CyrillicPunctPrefix => "CYRILLIC_PUNCT_PREFIX", "Cyrillic token with leading punctuation";
    CyrillicPunctSuffix => "CYRILLIC_PUNCT_SUFFIX", "Cyrillic token with trailing punctuation";
    CyrillicPunctPeriod => "CYRILLIC_PUNCT_PERIOD", "Cyrillic token with trailing period";
    CyrillicPunctMixed => "CYRILLIC_PUNCT_MIXED", "Cyrillic token with internal punctuation";
    GeorgianPunctPrefix => "GEORGIAN_PUNCT_PREFIX", "Georgian token with leading punctuation";
    GeorgianPunctSuffix => "GEORGIAN_PUNCT_SUFFIX", "Georgian token with trailing punctuation";
    GeorgianPunctPeriod => "GEORGIAN_PUNCT_PERIOD", "Georgian token with trailing period";
    GeorgianPunctMixed => "GEORGIAN_PUNCT_MIXED", "Georgian token with internal punctuation";

    // Tokenization quality: Devanagari nukta variants
    StdSepNukta => "STD_SEP_NUKTA", "standard base letter with separate nukta";
    AltSepNukta => "ALT_SEP_NUKTA", "separate nukta in unexpected position";
    StdCmpNukta => "STD_CMP_NUKTA", "standard precomposed nukta letter";
    AltCmpNukta => "ALT_CMP_NUKTA", "legacy precomposed nukta letter";
    DisVsgnNukta => "DIS_VSGN_NUKTA", "nukta after vowel sign (wrong order)";

    // Length
    LongToken20 => "LONG_TOKEN_20", "token of at least the configured length threshold";
    LongToken30 => "LONG_TOKEN_30", "token of at least 30 characters";
}

impl Category {
    /// The `_CHAR` sibling recorded per character alongside this tag, if any.
    ///
    /// The mapping is fixed; it does not grow with new categories unless the
    /// per-character view is genuinely useful for them.
    pub fn char_sibling(self) -> Option<Category> {
        match self {
            Category::NonAsciiPunct => Some(Category::NonAsciiPunctChar),
            Category::NonAsciiWhitespace => Some(Category::NonAsciiWhitespaceChar),
            Category::GeometricShape => Some(Category::GeometricShapeChar),
            Category::LetterlikeSymbol => Some(Category::LetterlikeSymbolChar),
            Category::MathematicalOperator => Some(Category::MathematicalOperatorChar),
            Category::TechnicalSymbol => Some(Category::TechnicalSymbolChar),
            Category::ArrowSymbol => Some(Category::ArrowSymbolChar),
            Category::MiscSymbol => Some(Category::MiscSymbolChar),
            Category::Tag => Some(Category::TagChar),
            _ => None,
        }
    }

    /// Per-character tags are counted once per character, not once per token.
    pub fn is_char_tag(self) -> bool {
        self.tag().ends_with("_CHAR")
    }
}

/// Look up a category by its stable tag string.
pub fn from_tag(tag: &str) -> Option<Category> {
    REGISTRY
        .iter()
        .find(|(_, t, _)| *t == tag)
        .map(|(c, _, _)| *c)
}
