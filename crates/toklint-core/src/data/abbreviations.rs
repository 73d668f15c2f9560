//! Abbreviation tables for the benign-period exemptions.
//!
//! Tokens ending in a period are only a tokenization problem when they are
//! not a conventional abbreviation. These lists cover the conventional ones.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Fixed lowercase abbreviations that legitimately carry periods.
pub static FIXED_ABBREVIATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["a.m.", "p.m.", "i.e.", "vs.", "v."].into_iter().collect());

/// Title abbreviations, mixed case as written plus all-caps variants.
pub static TITLE_ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Rev.", "Gen.", "Col.", "Maj.", "Capt.", "Lt.",
        "Sgt.", "Sen.", "Rep.", "Gov.", "Pres.", "St.", "Hon.", "Fr.", "Sr.", "Jr.",
        "MR.", "MRS.", "MS.", "DR.", "PROF.", "REV.", "GEN.", "COL.", "MAJ.", "CAPT.", "LT.",
        "SGT.", "SEN.", "REP.", "GOV.", "PRES.", "ST.", "HON.", "FR.", "SR.", "JR.",
    ]
    .into_iter()
    .collect()
});

/// Month abbreviations, mixed case plus all-caps variants.
pub static MONTH_ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.", "Sept.", "Oct.", "Nov.",
        "Dec.", "JAN.", "FEB.", "MAR.", "APR.", "JUN.", "JUL.", "AUG.", "SEP.", "SEPT.", "OCT.",
        "NOV.", "DEC.",
    ]
    .into_iter()
    .collect()
});

/// Malagasy bible-book abbreviations, common in scripture-derived corpora.
pub static MALAGASY_ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Gen.", "Eks.", "Lev.", "Nom.", "Deo.", "Jos.", "Mpits.", "Rota.", "Sam.", "Mpan.",
        "Tant.", "Ezra.", "Neh.", "Est.", "Joba.", "Sal.", "Ohab.", "Mpit.", "Ton.", "Isa.",
        "Jer.", "Fit.", "Ezek.", "Dan.", "Hos.", "Joe.", "Amo.", "Oba.", "Jon.", "Mik.", "Nah.",
        "Hab.", "Zef.", "Hag.", "Zak.", "Mal.", "Mat.", "Mar.", "Lio.", "Jao.", "Asa.", "Rom.",
        "Kor.", "Gal.", "Efe.", "Fil.", "Kol.", "Tes.", "Tim.", "Tit.", "File.", "Heb.", "Jak.",
        "Pet.", "Jda.", "Apok.",
    ]
    .into_iter()
    .collect()
});

/// Correctly-split English clitics: a token that *is* one of these is the
/// desired output of tokenization, not an unsplit artifact.
pub static BARE_CLITICS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["'d", "'ll", "'m", "n't", "'re", "'s", "'ve", "c'", "d'", "l'"]
        .into_iter()
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_abbreviations_present() {
        assert!(FIXED_ABBREVIATIONS.contains("a.m."));
        assert!(FIXED_ABBREVIATIONS.contains("vs."));
    }

    #[test]
    fn titles_include_uppercase_variants() {
        assert!(TITLE_ABBREVIATIONS.contains("Dr."));
        assert!(TITLE_ABBREVIATIONS.contains("DR."));
    }

    #[test]
    fn clitics_are_bare_tokens() {
        assert!(BARE_CLITICS.contains("n't"));
        assert!(!BARE_CLITICS.contains("boy's"));
    }
}
