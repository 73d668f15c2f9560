//! Fixed data tables used by the classifiers.

pub mod abbreviations;
pub mod charnames;
pub mod domains;
pub mod long_words;
