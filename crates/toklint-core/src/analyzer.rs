//! The driver: owns the line loop state and wires the components together.
//!
//! All mutable state of a run lives in the [`Analyzer`] value; there is no
//! process-wide state. Lines are consumed strictly sequentially and every
//! token is classified to completion before the next one is looked at.

use crate::config::AnalyzerConfig;
use crate::dump::{DumpCollector, StructuredDump};
use crate::language::LanguagePolicy;
use crate::prescan;
use crate::store::ExampleStore;
use crate::tokclass;

/// A streaming analysis run.
pub struct Analyzer {
    config: AnalyzerConfig,
    policy: LanguagePolicy,
    store: ExampleStore,
    dump: DumpCollector,
    n_lines: u64,
    n_tokens: u64,
    n_fast_tokens: u64,
}

impl Analyzer {
    /// Build an analyzer. The configuration is re-validated so library
    /// callers get the same clamping the CLI does.
    pub fn new(config: AnalyzerConfig) -> Self {
        let config = config.validated();
        let policy = LanguagePolicy::for_code(config.language_code.as_deref());
        let store = ExampleStore::new(config.max_examples, config.max_locations);
        let dump = DumpCollector::new(config.max_examples);
        Self {
            config,
            policy,
            store,
            dump,
            n_lines: 0,
            n_tokens: 0,
            n_fast_tokens: 0,
        }
    }

    /// Feed one input line, without its trailing newline.
    ///
    /// The input is tolerated as raw bytes: ill-formed UTF-8 is data for the
    /// classifier, never an error.
    pub fn process_line(&mut self, raw: &[u8]) {
        self.n_lines += 1;
        match std::str::from_utf8(raw) {
            Ok(text) => self.process_text_line(text),
            Err(_) => self.process_byte_line(raw),
        }
    }

    fn process_text_line(&mut self, text: &str) {
        self.dump.count_line_characters(text);
        // Leading/trailing whitespace stripped, internal runs collapsed.
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

        let (loc, mut line) = if self.config.first_field_is_sentence_id {
            match collapsed.split_once(' ') {
                Some((id, rest)) => (id.to_string(), rest.to_string()),
                // A line holding only an ID has nothing to analyze.
                None => (collapsed, String::new()),
            }
        } else {
            (self.n_lines.to_string(), collapsed)
        };
        if line.is_empty() {
            return;
        }

        for token in line.split_whitespace() {
            self.dump.observe_token(token, &loc);
        }

        prescan::prescan_line(&mut self.store, &mut line, &loc);

        for token in line.split_whitespace() {
            self.n_tokens += 1;
            let fast = tokclass::classify_token(
                &mut self.store,
                &self.policy,
                self.config.long_token_min,
                token.as_bytes(),
                &loc,
            );
            if fast {
                self.n_fast_tokens += 1;
            }
        }
    }

    /// Ill-formed lines skip the regex pre-scan and are split on raw
    /// space/tab bytes; the byte-level classifier does the rest.
    fn process_byte_line(&mut self, raw: &[u8]) {
        let lossy = String::from_utf8_lossy(raw);
        self.dump.count_line_characters(&lossy);

        let mut fields = raw
            .split(|b| *b == b' ' || *b == b'\t')
            .filter(|t| !t.is_empty());

        let loc = if self.config.first_field_is_sentence_id {
            match fields.next() {
                Some(first) => String::from_utf8_lossy(first).into_owned(),
                None => return,
            }
        } else {
            self.n_lines.to_string()
        };

        for token in fields {
            self.n_tokens += 1;
            self.dump
                .observe_token(&String::from_utf8_lossy(token), &loc);
            let fast = tokclass::classify_token(
                &mut self.store,
                &self.policy,
                self.config.long_token_min,
                token,
                &loc,
            );
            if fast {
                self.n_fast_tokens += 1;
            }
        }
    }

    /// End of input: freeze the run into an [`Analysis`].
    pub fn finish(self) -> Analysis {
        Analysis {
            config: self.config,
            policy: self.policy,
            store: self.store,
            dump: self.dump,
            n_lines: self.n_lines,
            n_tokens: self.n_tokens,
            n_fast_tokens: self.n_fast_tokens,
        }
    }
}

/// The finished aggregate of a run.
pub struct Analysis {
    pub(crate) config: AnalyzerConfig,
    pub(crate) policy: LanguagePolicy,
    pub(crate) store: ExampleStore,
    dump: DumpCollector,
    pub(crate) n_lines: u64,
    pub(crate) n_tokens: u64,
    pub(crate) n_fast_tokens: u64,
}

impl Analysis {
    pub fn n_lines(&self) -> u64 {
        self.n_lines
    }

    pub fn n_tokens(&self) -> u64 {
        self.n_tokens
    }

    /// Tokens handled by an early-exit fast track.
    pub fn n_fast_tokens(&self) -> u64 {
        self.n_fast_tokens
    }

    /// Count for a category by tag (0 when never noted).
    pub fn count(&self, cat: crate::categories::Category) -> u64 {
        self.store.count(cat)
    }

    /// The store, for report writers.
    pub fn store(&self) -> &ExampleStore {
        &self.store
    }

    /// Build the nested structured dump.
    pub fn to_dump(&self) -> StructuredDump {
        self.dump.build(&self.store, self.n_lines)
    }

    pub(crate) fn char_conflicts(&self) -> Vec<[(char, u64); 2]> {
        self.dump.char_conflicts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;

    fn analyze(lines: &[&str]) -> Analysis {
        let mut analyzer = Analyzer::new(AnalyzerConfig::default());
        for line in lines {
            analyzer.process_line(line.as_bytes());
        }
        analyzer.finish()
    }

    #[test]
    fn counts_lines_and_tokens() {
        let a = analyze(&["one two three", "four five"]);
        assert_eq!(a.n_lines(), 2);
        assert_eq!(a.n_tokens(), 5);
        assert_eq!(a.n_fast_tokens(), 5);
    }

    #[test]
    fn whitespace_is_collapsed_before_tokenizing() {
        let a = analyze(&["  one \t two  "]);
        assert_eq!(a.n_tokens(), 2);
    }

    #[test]
    fn mixed_script_end_to_end() {
        let a = analyze(&["Hеllο!"]);
        assert_eq!(a.count(Category::AsciiLetter), 1);
        assert_eq!(a.count(Category::Cyrillic), 1);
        assert_eq!(a.count(Category::Greek), 1);
        assert_eq!(a.count(Category::MixedCyrillicLatin), 1);
    }

    #[test]
    fn broken_url_does_not_leak_unsplit_period() {
        let a = analyze(&["www . example . com / path"]);
        assert_eq!(a.count(Category::BrokenUrl), 1);
        assert_eq!(a.count(Category::UnsplitPeriod), 0);
        assert_eq!(a.count(Category::NumUnsplitPeriod), 0);
    }

    #[test]
    fn overlong_byte_token() {
        let mut analyzer = Analyzer::new(AnalyzerConfig::default());
        analyzer.process_line(&[0xC0, 0x80]);
        let a = analyzer.finish();
        assert_eq!(a.count(Category::Utf8NonShortest), 1);
    }

    #[test]
    fn ill_formed_line_still_counts_ascii_tokens() {
        let mut analyzer = Analyzer::new(AnalyzerConfig::default());
        analyzer.process_line(b"good \xFF\xFE bad");
        let a = analyzer.finish();
        assert_eq!(a.n_tokens(), 3);
        assert_eq!(a.count(Category::NonUtf8), 1);
        // one note per ASCII word token
        assert_eq!(a.count(Category::AsciiLetter), 2);
    }

    #[test]
    fn sentence_id_mode_uses_first_field() {
        let mut analyzer = Analyzer::new(
            AnalyzerConfig {
                first_field_is_sentence_id: true,
                ..Default::default()
            },
        );
        analyzer.process_line(b"snt-42 word,");
        let a = analyzer.finish();
        let rec = a.store().record(Category::UnsplitPunct).unwrap();
        assert_eq!(rec.examples()[0].1.locations, vec!["snt-42"]);
        // the id field itself is not analyzed
        assert_eq!(a.n_tokens(), 1);
    }

    #[test]
    fn first_occurrence_order_is_input_order() {
        let a = analyze(&["zzz, aaa,"]);
        let rec = a.store().record(Category::UnsplitPunct).unwrap();
        assert_eq!(rec.examples()[0].0, "zzz,");
        assert_eq!(rec.examples()[1].0, "aaa,");
    }
}
