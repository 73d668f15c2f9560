//! Structured (JSON) dump of an analysis run.
//!
//! Alongside the category engine, the driver feeds per-character counts and
//! examples into a [`DumpCollector`]; at the end of the run it is folded
//! into the nested [`StructuredDump`] mapping: script rollups, per-block
//! character records, non-canonical letter+mark combinations, Arabic/Farsi
//! character conflicts, notable tokens, and token shape patterns.

use std::collections::{BTreeMap, HashMap};

use schemars::JsonSchema;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::categories::Category;
use crate::charclass::codepoint_category;
use crate::data::charnames::{char_id, char_name_or_id};
use crate::store::ExampleStore;

/// Characters whose presence makes a token's shape worth recording.
const PATTERN_CHARS: &str = "-\u{2010}\u{2011}\u{2212}\u{2012}\u{2013}\u{2014}\u{2015}+~*_.,:;!\u{A1}?/\u{A7}'\u{2018}\u{2019}\u{2BC}@#&%$\u{20AC}\u{A3}\u{A5}\u{A2}\u{A4}\u{B5}|\u{640}";

/// Bound on distinct combos/patterns tracked, to keep memory flat on
/// pathological corpora.
const MAX_DISTINCT: usize = 10_000;

/// Arabic vs Farsi kaf and yeh. Text mixing both members of a pair usually
/// went through inconsistent keyboard layouts or converters.
const CONFLICT_PAIRS: [[char; 2]; 2] = [['\u{643}', '\u{6A9}'], ['\u{64A}', '\u{6CC}']];

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ScriptEntry {
    /// Total characters of this script seen.
    pub count: u64,
    /// Distinct example characters, concatenated. Omitted for the dominant
    /// script of its family and for oversized example sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ex: Option<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BlockEntry {
    pub char: String,
    /// `U+XXXX` identifier.
    pub id: String,
    /// Local name table entry, or the identifier again.
    pub name: String,
    pub count: u64,
    /// `[token, location]` pairs.
    pub ex: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CharInfo {
    pub char: String,
    pub id: String,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NonCanonicalEntry {
    pub orig: String,
    pub norm: String,
    #[serde(rename = "orig-count")]
    pub orig_count: u64,
    #[serde(rename = "norm-count")]
    pub norm_count: u64,
    #[serde(rename = "orig-form")]
    pub orig_form: String,
    #[serde(rename = "norm-form")]
    pub norm_form: String,
    pub changes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NotableEntry {
    pub token: String,
    pub count: u64,
    pub ex: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PatternEntry {
    /// Pattern with invisible characters spelled out as `<U+XXXX>`.
    pub pattern: String,
    pub count: u64,
    pub ex: Vec<(String, String)>,
}

/// The nested dump mapping, serialized as the `--json` output.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct StructuredDump {
    pub n_lines: u64,
    pub n_characters: u64,
    #[serde(rename = "letter-script")]
    pub letter_script: BTreeMap<String, ScriptEntry>,
    #[serde(rename = "number-script")]
    pub number_script: BTreeMap<String, ScriptEntry>,
    #[serde(rename = "other-script")]
    pub other_script: BTreeMap<String, ScriptEntry>,
    #[serde(rename = "non-canonical")]
    pub non_canonical: BTreeMap<String, NonCanonicalEntry>,
    #[serde(rename = "char-conflict")]
    pub char_conflict: BTreeMap<String, Vec<CharInfo>>,
    #[serde(rename = "notable-token")]
    pub notable_token: BTreeMap<String, BTreeMap<String, NotableEntry>>,
    pub pattern: BTreeMap<String, PatternEntry>,
    pub block: BTreeMap<String, BTreeMap<String, BlockEntry>>,
}

/// Streaming side-collector for the dump.
#[derive(Debug)]
pub struct DumpCollector {
    max_examples: usize,
    n_characters: u64,
    char_count: HashMap<char, u64>,
    char_examples: HashMap<char, Vec<(String, String)>>,
    combo_count: HashMap<String, u64>,
    pattern_count: HashMap<String, u64>,
    pattern_examples: HashMap<String, Vec<(String, String)>>,
}

impl DumpCollector {
    pub fn new(max_examples: usize) -> Self {
        Self {
            max_examples,
            n_characters: 0,
            char_count: HashMap::new(),
            char_examples: HashMap::new(),
            combo_count: HashMap::new(),
            pattern_count: HashMap::new(),
            pattern_examples: HashMap::new(),
        }
    }

    /// Count the characters of a raw line (before collapsing).
    pub fn count_line_characters(&mut self, line: &str) {
        self.n_characters += line.chars().count() as u64;
    }

    /// Record one token's characters, letter+mark combos, and shape.
    pub fn observe_token(&mut self, token: &str, loc: &str) {
        for c in token.chars() {
            *self.char_count.entry(c).or_insert(0) += 1;
            let examples = self.char_examples.entry(c).or_default();
            if examples.len() < self.max_examples {
                let pair = (token.to_string(), loc.to_string());
                if !examples.contains(&pair) {
                    examples.push(pair);
                }
            }
        }
        self.observe_combos(token);
        self.observe_pattern(token, loc);
    }

    /// Letter followed by one or more combining marks.
    fn observe_combos(&mut self, token: &str) {
        let chars: Vec<char> = token.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if chars[i].is_alphabetic() {
                let start = i;
                i += 1;
                while i < chars.len() && is_combining_mark(chars[i]) {
                    i += 1;
                }
                if i > start + 1 {
                    let combo: String = chars[start..i].iter().collect();
                    if self.combo_count.len() < MAX_DISTINCT
                        || self.combo_count.contains_key(&combo)
                    {
                        *self.combo_count.entry(combo).or_insert(0) += 1;
                    }
                }
            } else {
                i += 1;
            }
        }
    }

    fn observe_pattern(&mut self, token: &str, loc: &str) {
        if !token.chars().any(|c| PATTERN_CHARS.contains(c)) {
            return;
        }
        let pattern = token_pattern(token);
        if self.pattern_count.len() >= MAX_DISTINCT && !self.pattern_count.contains_key(&pattern) {
            return;
        }
        *self.pattern_count.entry(pattern.clone()).or_insert(0) += 1;
        let examples = self.pattern_examples.entry(pattern).or_default();
        if examples.len() < self.max_examples {
            let pair = (token.to_string(), loc.to_string());
            if !examples.contains(&pair) {
                examples.push(pair);
            }
        }
    }

    /// Candidates for the non-canonical check: every letter+mark run plus
    /// every distinct non-ASCII letter (presentation forms, ligatures and
    /// precomposed nukta letters are single characters).
    fn non_canonical_candidates(&self) -> Vec<(String, u64)> {
        let mut out: Vec<(String, u64)> = self
            .combo_count
            .iter()
            .map(|(s, &count)| (s.clone(), count))
            .collect();
        for (&c, &count) in &self.char_count {
            if !c.is_ascii() && c.is_alphabetic() {
                out.push((c.to_string(), count));
            }
        }
        out
    }

    /// How often a normalized form itself occurs in the input.
    fn count_of(&self, s: &str) -> u64 {
        if let Some(&count) = self.combo_count.get(s) {
            return count;
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return self.char_count.get(&c).copied().unwrap_or(0);
        }
        0
    }

    /// Conflict pairs where both members occur, for the report's trailing
    /// section.
    pub(crate) fn char_conflicts(&self) -> Vec<[(char, u64); 2]> {
        CONFLICT_PAIRS
            .iter()
            .filter_map(|pair| {
                let a = self.char_count.get(&pair[0]).copied()?;
                let b = self.char_count.get(&pair[1]).copied()?;
                Some([(pair[0], a), (pair[1], b)])
            })
            .collect()
    }

    /// Fold the collected state into the final dump.
    pub fn build(&self, store: &ExampleStore, n_lines: u64) -> StructuredDump {
        let mut letter_script: BTreeMap<String, ScriptEntry> = BTreeMap::new();
        let mut number_script: BTreeMap<String, ScriptEntry> = BTreeMap::new();
        let mut other_script: BTreeMap<String, ScriptEntry> = BTreeMap::new();
        let mut block: BTreeMap<String, BTreeMap<String, BlockEntry>> = BTreeMap::new();

        let mut chars: Vec<(&char, &u64)> = self.char_count.iter().collect();
        chars.sort();
        for (&c, &count) in chars {
            let key = script_key(c).to_string();
            let bucket = if c.is_alphabetic() {
                &mut letter_script
            } else if c.is_numeric() {
                &mut number_script
            } else {
                &mut other_script
            };
            let entry = bucket.entry(key.clone()).or_insert(ScriptEntry {
                count: 0,
                ex: Some(String::new()),
            });
            entry.count += count;
            if let Some(ex) = entry.ex.as_mut()
                && ex.chars().count() <= 500
            {
                ex.push(c);
            }

            block.entry(key).or_default().insert(
                c.to_string(),
                BlockEntry {
                    char: c.to_string(),
                    id: char_id(c),
                    name: char_name_or_id(c),
                    count,
                    ex: self.char_examples.get(&c).cloned().unwrap_or_default(),
                },
            );
        }

        // The dominant script's characters are the corpus itself, not
        // examples worth listing; oversized example sets are dropped too.
        let dominant_letter = dominant_script(&letter_script);
        for (key, entry) in &mut letter_script {
            let len = entry.ex.as_ref().map_or(0, |e| e.chars().count());
            if dominant_letter.as_deref() == Some(key.as_str()) || len > 500 {
                entry.ex = None;
            }
        }
        let dominant_number = dominant_script(&number_script);
        for (key, entry) in &mut number_script {
            let len = entry.ex.as_ref().map_or(0, |e| e.chars().count());
            let keep =
                len <= 80 || (dominant_number.as_deref() != Some(key.as_str()) && len <= 500);
            if !keep {
                entry.ex = None;
            }
        }
        for entry in other_script.values_mut() {
            if entry.ex.as_ref().is_some_and(|e| e.chars().count() > 80) {
                entry.ex = None;
            }
        }

        let mut non_canonical = BTreeMap::new();
        for (candidate, count) in self.non_canonical_candidates() {
            let (norm, changes) = normalize_candidate(&candidate);
            if changes.is_empty() || norm == candidate {
                continue;
            }
            let (orig_form, norm_form) = form_labels(&candidate, &norm, &changes);
            non_canonical.insert(
                candidate.clone(),
                NonCanonicalEntry {
                    orig: candidate.clone(),
                    norm: norm.clone(),
                    orig_count: count,
                    norm_count: self.count_of(&norm),
                    orig_form,
                    norm_form,
                    changes: changes.iter().map(ToString::to_string).collect(),
                },
            );
        }

        let mut char_conflict = BTreeMap::new();
        for pair in CONFLICT_PAIRS {
            let infos: Vec<CharInfo> = pair
                .iter()
                .filter_map(|&c| {
                    self.char_count.get(&c).map(|&count| CharInfo {
                        char: c.to_string(),
                        id: char_id(c),
                        name: char_name_or_id(c),
                        count,
                    })
                })
                .collect();
            if infos.len() == 2 {
                char_conflict.insert(format!("{}/{}", pair[0], pair[1]), infos);
            }
        }

        let mut notable_token: BTreeMap<String, BTreeMap<String, NotableEntry>> = BTreeMap::new();
        let notable_headings = [
            (Category::XmlEscStd, "XML ESCAPE TOKENS (BASIC)"),
            (Category::XmlEscAbc, "XML ESCAPE TOKENS (EXTENDED)"),
            (Category::XmlEscDec, "XML ESCAPE TOKENS (DECIMAL)"),
            (Category::XmlEscHex, "XML ESCAPE TOKENS (HEX)"),
            (Category::XmlEscNested, "XML ESCAPE TOKENS (NESTED)"),
            (
                Category::MixedCyrillicLatin,
                "WORDS WITH CHARACTERS FROM MULTIPLE SCRIPTS (CYRILLIC, LATIN)",
            ),
            (
                Category::MixedArabicAscii,
                "WORDS WITH CHARACTERS FROM MULTIPLE SCRIPTS (ARABIC, LATIN)",
            ),
            (
                Category::MixedCjkAscii,
                "WORDS WITH CHARACTERS FROM MULTIPLE SCRIPTS (CJK, LATIN)",
            ),
        ];
        for (cat, heading) in notable_headings {
            let Some(record) = store.record(cat) else {
                continue;
            };
            let inner: BTreeMap<String, NotableEntry> = record
                .examples()
                .iter()
                .map(|(token, ex)| {
                    (
                        token.clone(),
                        NotableEntry {
                            token: token.clone(),
                            count: ex.occurrences,
                            ex: ex
                                .locations
                                .iter()
                                .map(|l| (token.clone(), l.clone()))
                                .collect(),
                        },
                    )
                })
                .collect();
            if !inner.is_empty() {
                notable_token.insert(heading.to_string(), inner);
            }
        }

        let mut pattern = BTreeMap::new();
        for (pat, &count) in &self.pattern_count {
            pattern.insert(
                pat.clone(),
                PatternEntry {
                    pattern: reveal_invisible(pat),
                    count,
                    ex: self.pattern_examples.get(pat).cloned().unwrap_or_default(),
                },
            );
        }

        StructuredDump {
            n_lines,
            n_characters: self.n_characters,
            letter_script,
            number_script,
            other_script,
            non_canonical,
            char_conflict,
            notable_token,
            pattern,
            block,
        }
    }
}

fn dominant_script(map: &BTreeMap<String, ScriptEntry>) -> Option<String> {
    map.iter()
        .max_by_key(|(_, entry)| entry.count)
        .map(|(key, _)| key.clone())
}

/// Script/block key for one character, shared by the rollups and the
/// per-block records.
fn script_key(c: char) -> &'static str {
    if c.is_ascii() {
        if c.is_ascii_alphabetic() {
            return "ASCII_LETTER";
        }
        if c.is_ascii_digit() {
            return "ASCII_DIGIT";
        }
        return "ASCII_PUNCTUATION";
    }
    codepoint_category(u32::from(c)).map_or("OTHER", Category::tag)
}

fn is_combining_mark(c: char) -> bool {
    matches!(
        u32::from(c),
        0x300..=0x36F
            | 0x483..=0x489
            | 0x591..=0x5C7
            | 0x610..=0x61A
            | 0x64B..=0x65F
            | 0x670
            | 0x6D6..=0x6DC
            | 0x6DF..=0x6E8
            | 0x6EA..=0x6ED
            | 0x711
            | 0x730..=0x74A
            | 0x93C
            | 0x93E..=0x94F
            | 0x951..=0x957
            | 0x962..=0x963
            | 0x9BC
            | 0x9BE..=0x9CD
            | 0x1AB0..=0x1AFF
            | 0x1DC0..=0x1DFF
            | 0x20D0..=0x20FF
            | 0xFE20..=0xFE2F
    )
}

/// Reduce a token to its shape: letter runs become `Word`, numeric runs
/// `Number`, combining-mark runs `Modifier`/`Modifiers`.
fn token_pattern(token: &str) -> String {
    let mut out = String::new();
    let chars: Vec<char> = token.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_combining_mark(c) {
            let start = i;
            while i < chars.len() && is_combining_mark(chars[i]) {
                i += 1;
            }
            out.push_str(if i - start > 1 { "Modifiers" } else { "Modifier" });
        } else if c.is_alphabetic() {
            while i < chars.len()
                && (chars[i].is_alphabetic() || is_combining_mark(chars[i]))
            {
                i += 1;
            }
            out.push_str("Word");
        } else if c.is_numeric() {
            while i < chars.len() && chars[i].is_numeric() {
                i += 1;
            }
            out.push_str("Number");
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// Replace invisible characters with `<U+XXXX>` markers for display.
fn reveal_invisible(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_control() || matches!(u32::from(c), 0x200B..=0x200F | 0x2060..=0x206F | 0xFEFF)
            {
                format!("<U+{:04X}>", u32::from(c))
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Run the normalization-diff pipeline over one candidate, recording which
/// steps changed it. Step order matters: ligatures and presentation forms
/// must expand before combining marks are composed.
fn normalize_candidate(s: &str) -> (String, Vec<&'static str>) {
    let steps: [(&'static str, fn(&str) -> String); 6] = [
        ("arabic-presentation", normalize_presentation_forms),
        ("ligature", normalize_ligatures),
        ("hangul", normalize_hangul),
        ("moved-nukta", reorder_nukta),
        ("compose", compose_combining),
        ("decompose", decompose_precomposed),
    ];
    let mut current = s.to_string();
    let mut changes = Vec::new();
    for (label, step) in steps {
        let next = step(&current);
        if next != current {
            changes.push(label);
            current = next;
        }
    }
    (current, changes)
}

/// Map Arabic presentation forms (isolated/initial/medial/final and
/// ligatures) to their standard letters via compatibility decomposition.
fn normalize_presentation_forms(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(u32::from(c), 0xFB50..=0xFDFF | 0xFE70..=0xFEFC) {
            out.extend(std::iter::once(c).nfkc());
        } else {
            out.push(c);
        }
    }
    out
}

/// Expansion for Latin, Armenian and Hebrew ligature letters. Arabic
/// ligatures are handled by [`normalize_presentation_forms`].
fn ligature_expansion(c: char) -> Option<&'static str> {
    Some(match c {
        '\u{0132}' => "IJ",
        '\u{0133}' => "ij",
        '\u{013F}' => "L\u{B7}",
        '\u{0140}' => "l\u{B7}",
        '\u{0149}' => "\u{2BC}n",
        '\u{017F}' => "s",
        '\u{01C4}' => "D\u{17D}",
        '\u{01C5}' => "D\u{17E}",
        '\u{01C6}' => "d\u{17E}",
        '\u{01C7}' => "LJ",
        '\u{01C8}' => "Lj",
        '\u{01C9}' => "lj",
        '\u{01CA}' => "NJ",
        '\u{01CB}' => "Nj",
        '\u{01CC}' => "nj",
        '\u{01F1}' => "DZ",
        '\u{01F2}' => "Dz",
        '\u{01F3}' => "dz",
        '\u{1E9B}' => "\u{1E61}",
        '\u{FB00}' => "ff",
        '\u{FB01}' => "fi",
        '\u{FB02}' => "fl",
        '\u{FB03}' => "ffi",
        '\u{FB04}' => "ffl",
        '\u{FB05}' => "st",
        '\u{FB06}' => "st",
        '\u{FB13}' => "\u{574}\u{576}",
        '\u{FB14}' => "\u{574}\u{565}",
        '\u{FB15}' => "\u{574}\u{56B}",
        '\u{FB16}' => "\u{57E}\u{576}",
        '\u{FB17}' => "\u{574}\u{56D}",
        '\u{FB49}' => "\u{5E9}\u{5BC}",
        '\u{FB4F}' => "\u{5D0}\u{5DC}",
        _ => return None,
    })
}

fn normalize_ligatures(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match ligature_expansion(c) {
            Some(expansion) => out.push_str(expansion),
            None => out.push(c),
        }
    }
    out
}

/// Compose modern Hangul jamo doubles/triples into syllables.
fn normalize_hangul(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            let leading = u32::from(chars[i]);
            let vowel = u32::from(chars[i + 1]);
            if (0x1100..=0x1112).contains(&leading) && (0x1161..=0x1175).contains(&vowel) {
                let trailing = chars.get(i + 2).map_or(0, |c| u32::from(*c));
                let (trailing_index, consumed) = if (0x11A8..=0x11C2).contains(&trailing) {
                    (trailing - 0x11A7, 3)
                } else {
                    (0, 2)
                };
                // 588 = 21 vowels * 28 trailing slots; 0xAC00 starts the
                // precomposed syllable block
                let syllable =
                    0xAC00 + (leading - 0x1100) * 588 + (vowel - 0x1161) * 28 + trailing_index;
                if let Some(c) = char::from_u32(syllable) {
                    out.push(c);
                    i += consumed;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// The nukta belonging to an Indic vowel-sign range, if `cp` is a sign.
fn nukta_for_sign(cp: u32) -> Option<u32> {
    match cp {
        0x93E..=0x94D => Some(0x93C),
        0x9BE..=0x9CD => Some(0x9BC),
        0xA3E..=0xA4D => Some(0xA3C),
        0xABE..=0xACD => Some(0xABC),
        0xB3E..=0xB4D => Some(0xB3C),
        0xCBE..=0xCCD => Some(0xCBC),
        _ => None,
    }
}

const fn is_indic_nukta(cp: u32) -> bool {
    matches!(cp, 0x93C | 0x9BC | 0xA3C | 0xABC | 0xB3C | 0xCBC)
}

/// Move nuktas in front of the vowel-sign they follow and drop duplicate
/// nuktas (the canonical order is nukta before vowel sign).
fn reorder_nukta(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    loop {
        let mut swapped = false;
        for i in 0..chars.len().saturating_sub(1) {
            if let Some(nukta) = nukta_for_sign(u32::from(chars[i]))
                && u32::from(chars[i + 1]) == nukta
            {
                chars.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    chars.dedup_by(|a, b| a == b && is_indic_nukta(u32::from(*a)));
    chars.into_iter().collect()
}

/// Compose base+combining-mark pairs (general diacritics, Arabic madda and
/// hamza, kana voicing marks, Indic nuktas) into precomposed characters.
fn compose_combining(s: &str) -> String {
    let has_mark = s.chars().any(|c| {
        matches!(
            u32::from(c),
            0x300..=0x36F | 0x653..=0x655 | 0x3099 | 0x309A
        ) || is_indic_nukta(u32::from(c))
    });
    if has_mark {
        s.nfc().collect()
    } else {
        s.to_string()
    }
}

/// Split precomposed characters whose canonical form is decomposed
/// (Indic and Tibetan nukta letters, Hebrew presentation points).
fn decompose_precomposed(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            u32::from(c),
            0x344 | 0x958..=0x95F | 0x9DC..=0xB5D | 0xF43..=0xFB9 | 0x2ADC | 0xFB1D..=0xFB4E
        ) {
            out.extend(std::iter::once(c).nfd());
        } else {
            out.push(c);
        }
    }
    out
}

/// Descriptive `orig-form`/`norm-form` labels for a non-canonical entry.
fn form_labels(orig: &str, norm: &str, changes: &[&'static str]) -> (String, String) {
    let mut orig_sorted: Vec<char> = orig.chars().collect();
    let mut norm_sorted: Vec<char> = norm.chars().collect();
    orig_sorted.sort_unstable();
    norm_sorted.sort_unstable();
    if orig_sorted == norm_sorted {
        return (String::new(), "REORDERED".to_string());
    }
    let mut orig_set = orig_sorted;
    let mut norm_set = norm_sorted;
    orig_set.dedup();
    norm_set.dedup();
    if orig_set == norm_set {
        return (String::new(), "REMOVED-DUPLICATE-DIACRITIC".to_string());
    }
    if matches!(changes, ["arabic-presentation"]) {
        return (String::new(), "NORM-ARABIC-PRES-FORM".to_string());
    }
    if matches!(changes, ["moved-nukta", "compose"]) {
        return (String::new(), "REORDERED-AND-COMPOSED".to_string());
    }
    let orig_form = normalization_form(orig);
    let norm_form = normalization_form(norm);
    if orig_form == "NFD" && norm_form == "NFC" && matches!(changes, ["compose"]) {
        return (orig_form, norm_form);
    }
    if orig_form.is_empty()
        && (norm_form == "NFC" || norm_form == "NFD")
        && matches!(changes, ["compose"] | ["decompose"])
    {
        return (String::new(), norm_form);
    }
    (orig_form, norm_form)
}

/// Which normalization form a string is already in, if any.
fn normalization_form(s: &str) -> String {
    if s.nfc().collect::<String>() == s {
        "NFC".to_string()
    } else if s.nfd().collect::<String>() == s {
        "NFD".to_string()
    } else if s.nfkc().collect::<String>() == s {
        "NFKC".to_string()
    } else if s.nfkd().collect::<String>() == s {
        "NFKD".to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pattern_shapes() {
        assert_eq!(token_pattern("word"), "Word");
        assert_eq!(token_pattern("12:30"), "Number:Number");
        assert_eq!(token_pattern("user@host"), "Word@Word");
        assert_eq!(token_pattern("don't"), "Word'Word");
    }

    #[test]
    fn combos_record_decomposed_letters() {
        let mut collector = DumpCollector::new(5);
        // e + combining acute, twice
        collector.observe_token("caf\u{0065}\u{0301}", "1");
        collector.observe_token("caf\u{0065}\u{0301}", "2");
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 2);
        let entry = dump
            .non_canonical
            .get("\u{0065}\u{0301}")
            .expect("combo recorded");
        assert_eq!(entry.orig_count, 2);
        assert_eq!(entry.norm, "é");
        assert_eq!(entry.orig_form, "NFD");
        assert_eq!(entry.norm_form, "NFC");
    }

    #[test]
    fn char_conflict_requires_both_members() {
        let mut collector = DumpCollector::new(5);
        collector.observe_token("\u{643}", "1"); // Arabic kaf only
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 1);
        assert!(dump.char_conflict.is_empty());

        collector.observe_token("\u{6A9}", "2"); // Farsi keheh
        let dump = collector.build(&store, 2);
        assert_eq!(dump.char_conflict.len(), 1);
        let infos = dump.char_conflict.values().next().unwrap();
        assert_eq!(infos.len(), 2);
    }

    #[test]
    fn script_rollup_buckets() {
        let mut collector = DumpCollector::new(5);
        collector.count_line_characters("aб1,");
        collector.observe_token("aб1,", "1");
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 1);
        assert!(dump.letter_script.contains_key("ASCII_LETTER"));
        assert!(dump.letter_script.contains_key("CYRILLIC"));
        assert!(dump.number_script.contains_key("ASCII_DIGIT"));
        assert!(dump.other_script.contains_key("ASCII_PUNCTUATION"));
        assert_eq!(dump.n_characters, 4);
    }

    #[test]
    fn ligature_letter_is_non_canonical() {
        let mut collector = DumpCollector::new(5);
        collector.observe_token("\u{FB01}ne", "1");
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 1);
        let entry = dump.non_canonical.get("\u{FB01}").expect("fi ligature");
        assert_eq!(entry.norm, "fi");
        assert_eq!(entry.changes, vec!["ligature"]);
    }

    #[test]
    fn arabic_presentation_form_gets_its_label() {
        let mut collector = DumpCollector::new(5);
        collector.observe_token("\u{FEDF}\u{FE8E}", "1");
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 1);
        let entry = dump.non_canonical.get("\u{FEDF}").expect("lam final form");
        assert_eq!(entry.norm, "\u{0644}");
        assert_eq!(entry.changes, vec!["arabic-presentation"]);
        assert_eq!(entry.norm_form, "NORM-ARABIC-PRES-FORM");
    }

    #[test]
    fn misordered_nukta_is_reordered() {
        let mut collector = DumpCollector::new(5);
        // vowel sign before nukta: wrong order
        collector.observe_token("\u{915}\u{93E}\u{93C}", "1");
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 1);
        let entry = dump
            .non_canonical
            .get("\u{915}\u{93E}\u{93C}")
            .expect("misordered combo");
        assert_eq!(entry.norm, "\u{915}\u{93C}\u{93E}");
        assert_eq!(entry.changes, vec!["moved-nukta"]);
        assert_eq!(entry.norm_form, "REORDERED");
    }

    #[test]
    fn duplicate_nukta_is_dropped() {
        let mut collector = DumpCollector::new(5);
        collector.observe_token("\u{915}\u{93C}\u{93C}", "1");
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 1);
        let entry = dump
            .non_canonical
            .get("\u{915}\u{93C}\u{93C}")
            .expect("duplicate nukta combo");
        assert_eq!(entry.norm, "\u{915}\u{93C}");
        assert_eq!(entry.norm_form, "REMOVED-DUPLICATE-DIACRITIC");
    }

    #[test]
    fn hangul_jamo_triples_compose() {
        assert_eq!(normalize_hangul("\u{1112}\u{1161}\u{11AB}"), "\u{D55C}");
        assert_eq!(normalize_hangul("\u{1100}\u{1161}"), "\u{AC00}");
        // lone jamo are left alone
        assert_eq!(normalize_hangul("\u{1100}"), "\u{1100}");
    }

    #[test]
    fn dominant_letter_script_has_no_examples() {
        let mut collector = DumpCollector::new(5);
        collector.observe_token("aaaa", "1");
        collector.observe_token("б", "1");
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 1);
        let ascii = dump.letter_script.get("ASCII_LETTER").unwrap();
        let cyrillic = dump.letter_script.get("CYRILLIC").unwrap();
        assert!(ascii.ex.is_none(), "dominant script lists no examples");
        assert_eq!(cyrillic.ex.as_deref(), Some("б"));
    }

    #[test]
    fn dump_serializes_with_kebab_case_keys() {
        let mut collector = DumpCollector::new(5);
        collector.count_line_characters("ab");
        collector.observe_token("ab", "1");
        let store = ExampleStore::new(5, 5);
        let json = serde_json::to_value(collector.build(&store, 1)).unwrap();
        assert_eq!(json["n_lines"], 1);
        assert_eq!(json["n_characters"], 2);
        assert!(json["letter-script"]["ASCII_LETTER"]["count"].is_u64());
        assert!(json["char-conflict"].is_object());
        assert!(json["notable-token"].is_object());
    }

    #[test]
    fn block_records_carry_ids_and_names() {
        let mut collector = DumpCollector::new(5);
        collector.observe_token("x\u{00A0}y", "3");
        let store = ExampleStore::new(5, 5);
        let dump = collector.build(&store, 1);
        let nbsp_block = dump
            .block
            .get("NON_ASCII_WHITESPACE")
            .expect("nbsp block present");
        let entry = nbsp_block.get("\u{00A0}").unwrap();
        assert_eq!(entry.id, "U+00A0");
        assert_eq!(entry.name, "NO-BREAK SPACE");
    }
}
