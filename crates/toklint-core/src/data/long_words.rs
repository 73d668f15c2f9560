//! Legitimately long words exempt from the long-token check.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words of 20+ characters that are real vocabulary, not tokenization junk.
pub static LONG_WORD_ALLOWLIST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "antidisestablishmentarianism",
        "compartmentalization",
        "counterrevolutionaries",
        "counterrevolutionary",
        "electroencephalography",
        "institutionalization",
        "internationalization",
        "mischaracterization",
        "overcapitalization",
        "telecommunications",
        "uncharacteristically",
        "unconstitutionality",
    ]
    .into_iter()
    .collect()
});

/// Case-insensitive allowlist membership.
pub fn is_allowlisted(token: &str) -> bool {
    LONG_WORD_ALLOWLIST.contains(token.to_lowercase().as_str())
}
