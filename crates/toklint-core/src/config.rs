//! Analyzer configuration.
//!
//! All knobs are fixed at construction time; the engine never re-reads them
//! mid-run. Out-of-range values are clamped with a warning rather than
//! rejected, so a misconfigured batch job still produces a report.

use tracing::warn;

use crate::language;

/// Hard cap on distinct examples kept per category.
pub const MAX_EXAMPLES_CAP: usize = 1000;
/// Hard cap on locations kept per example.
pub const MAX_LOCATIONS_CAP: usize = 100;
/// Default number of distinct examples per category.
pub const DEFAULT_MAX_EXAMPLES: usize = 20;
/// Default number of locations per example.
pub const DEFAULT_MAX_LOCATIONS: usize = 10;
/// Default codepoint-count threshold for the long-token check.
pub const DEFAULT_LONG_TOKEN_MIN: usize = 20;

/// Immutable analyzer configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Distinct examples kept per category (default 20, capped at 1000).
    pub max_examples: usize,
    /// Locations kept per example (default 10, capped at 100).
    pub max_locations: usize,
    /// Emit every registry category, including those with zero hits.
    pub show_all_categories: bool,
    /// Treat the first whitespace-delimited field of each line as its
    /// location identifier instead of the 1-based line number.
    pub first_field_is_sentence_id: bool,
    /// Normalized language code (`en` has already become `eng`), if any.
    pub language_code: Option<String>,
    /// Minimum codepoint count for the `LONG_TOKEN_20` check.
    pub long_token_min: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_examples: DEFAULT_MAX_EXAMPLES,
            max_locations: DEFAULT_MAX_LOCATIONS,
            show_all_categories: false,
            first_field_is_sentence_id: false,
            language_code: None,
            long_token_min: DEFAULT_LONG_TOKEN_MIN,
        }
    }
}

impl AnalyzerConfig {
    /// Clamp out-of-range values, warning about each adjustment.
    ///
    /// Returns `self` so it can be chained after struct construction.
    pub fn validated(mut self) -> Self {
        if self.max_examples > MAX_EXAMPLES_CAP {
            warn!(
                requested = self.max_examples,
                cap = MAX_EXAMPLES_CAP,
                "max_examples above hard cap, clamping"
            );
            self.max_examples = MAX_EXAMPLES_CAP;
        }
        if self.max_examples == 0 {
            warn!("max_examples of 0 is not useful, using default");
            self.max_examples = DEFAULT_MAX_EXAMPLES;
        }
        if self.max_locations > MAX_LOCATIONS_CAP {
            warn!(
                requested = self.max_locations,
                cap = MAX_LOCATIONS_CAP,
                "max_locations above hard cap, clamping"
            );
            self.max_locations = MAX_LOCATIONS_CAP;
        }
        if self.max_locations == 0 {
            warn!("max_locations of 0 is not useful, using default");
            self.max_locations = DEFAULT_MAX_LOCATIONS;
        }
        if self.long_token_min == 0 {
            warn!("long_token_min of 0 is not useful, using default");
            self.long_token_min = DEFAULT_LONG_TOKEN_MIN;
        }
        if let Some(ref code) = self.language_code {
            match language::normalize_code(code) {
                Ok(normalized) => self.language_code = Some(normalized.to_string()),
                Err(err) => {
                    warn!(%err, "ignoring unsupported language code");
                    self.language_code = None;
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_examples, 20);
        assert_eq!(config.max_locations, 10);
        assert_eq!(config.long_token_min, 20);
        assert!(!config.show_all_categories);
        assert!(!config.first_field_is_sentence_id);
    }

    #[test]
    fn oversized_limits_are_clamped() {
        let config = AnalyzerConfig {
            max_examples: 5000,
            max_locations: 500,
            ..Default::default()
        }
        .validated();
        assert_eq!(config.max_examples, MAX_EXAMPLES_CAP);
        assert_eq!(config.max_locations, MAX_LOCATIONS_CAP);
    }

    #[test]
    fn english_alias_is_normalized() {
        let config = AnalyzerConfig {
            language_code: Some("en".to_string()),
            ..Default::default()
        }
        .validated();
        assert_eq!(config.language_code.as_deref(), Some("eng"));
    }

    #[test]
    fn unknown_language_is_dropped() {
        let config = AnalyzerConfig {
            language_code: Some("xx".to_string()),
            ..Default::default()
        }
        .validated();
        assert!(config.language_code.is_none());
    }
}
