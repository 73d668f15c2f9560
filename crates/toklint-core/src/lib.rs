//! Core library for toklint.
//!
//! A streaming anomaly analyzer for tokenized UTF-8 corpora: every token is
//! classified into a fixed registry of issue categories covering byte-level
//! encoding integrity, Unicode script membership, and tokenization quality.
//!
//! # Quick Start
//!
//! ```
//! use toklint_core::{Analyzer, AnalyzerConfig};
//!
//! let mut analyzer = Analyzer::new(AnalyzerConfig::default());
//! analyzer.process_line("He said cannot".as_bytes());
//! let analysis = analyzer.finish();
//!
//! let mut report = Vec::new();
//! toklint_core::report::write_text(&analysis, &mut report).unwrap();
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod categories;
pub mod charclass;
pub mod config;
pub mod data;
pub mod dump;
pub mod error;
pub mod language;
pub mod prescan;
pub mod report;
pub mod store;
pub mod tokclass;

pub use analyzer::{Analysis, Analyzer};
pub use categories::{Category, REGISTRY};
pub use config::AnalyzerConfig;
pub use dump::StructuredDump;
pub use error::{ConfigError, ConfigResult};
pub use language::{LanguagePolicy, VALID_LANGUAGE_CODES, normalize_code};
pub use store::{ExampleStore, NoteMode};
