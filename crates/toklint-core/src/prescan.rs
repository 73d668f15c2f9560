//! Line pre-scan for split artifacts.
//!
//! Before a line is tokenized, this pass looks for entities that
//! tokenization has broken apart with whitespace: URLs, emails, filenames,
//! XML tags and escapes, and unusual punctuation combinations. Each match is
//! recorded and blanked to spaces so the fragments cannot trigger spurious
//! token-level findings later. The rule order is most-specific-first and the
//! scan restarts from the top after every match, so a well-formed broken URL
//! is never reclassified by a fuzzier fallback.

use std::sync::LazyLock;

use regex::Regex;

use crate::categories::Category;
use crate::data::domains;
use crate::store::{ExampleStore, NoteMode};

struct PreRule {
    cat: Category,
    re: Regex,
    /// The match must contain a space to count as a *split* artifact.
    needs_space: bool,
}

fn rule(cat: Category, pattern: &str, needs_space: bool) -> PreRule {
    PreRule {
        cat,
        re: Regex::new(pattern).expect("valid regex"),
        needs_space,
    }
}

static RULES: LazyLock<Vec<PreRule>> = LazyLock::new(|| {
    let exts = domains::extension_alternation();
    vec![
        rule(
            Category::BrokenUrl,
            r"(?i)(?:https? ?: ?/ ?/ ?|www ?\. ?)[a-z0-9-]+(?: ?\. ?[a-z0-9-]+)+(?: ?/ ?[a-z0-9_.~%-]+)*",
            true,
        ),
        rule(
            Category::BrokenEmail,
            r"(?i)[a-z0-9._%+-]+ ?@ ?[a-z0-9-]+(?: ?\. ?[a-z0-9-]+)+",
            true,
        ),
        rule(
            Category::BrokenFilename,
            &format!(r"(?i)[a-z0-9_-]+ ?\. ?(?:{exts})\b"),
            true,
        ),
        rule(
            Category::BrokenUrlFuzzy,
            r"(?i)(?:https? ?:|www) [a-z0-9./-]+(?: [a-z0-9./-]+)*",
            true,
        ),
        rule(Category::BrokenEmailFuzzy, r"\S+ @ \S+", true),
        rule(
            Category::SplitXml,
            r#"(?i)< ?/? ?[a-z][a-z0-9]*(?: [a-z:-]+ ?= ?\\?"[^"<>]*\\?")* ?/? ?>"#,
            true,
        ),
        // Nested escapes must run before the plain escape rules, or the
        // leading &amp; of a doubly-escaped token gets consumed first.
        rule(
            Category::XmlEscNested,
            r"(?i)& ?(?:amp ?; ?)+(?:# ?x ?[0-9a-f]{1,6}|# ?\d{1,7}|[a-z]{1,6}) ?;",
            false,
        ),
        rule(Category::XmlEscDec, r"& ?# ?\d{1,7} ?;", false),
        rule(Category::XmlEscHex, r"(?i)& ?# ?x ?[0-9a-f]{1,6} ?;", false),
        rule(
            Category::XmlEscStd,
            r"(?i)& ?(?:amp|apos|gt|lt|nbsp|quot) ?;",
            false,
        ),
        rule(Category::XmlEscAbc, r"(?i)& ?[a-z]{1,6} ?;", false),
        rule(
            Category::UnusualPunctComb,
            r"[.,;:!?] [.,;:!?](?: [.,;:!?])*",
            false,
        ),
    ]
});

const fn is_xml_rule(cat: Category) -> bool {
    matches!(
        cat,
        Category::XmlEscNested
            | Category::XmlEscDec
            | Category::XmlEscHex
            | Category::XmlEscStd
            | Category::XmlEscAbc
    )
}

/// Scan and blank split artifacts in `line` (whitespace already collapsed).
pub fn prescan_line(store: &mut ExampleStore, line: &mut String, loc: &str) {
    let full_triggers = line.contains("http")
        || line.contains("www")
        || line.contains(" @ ")
        || line.contains("\\ \"");
    let xml_triggers = line.contains('&') && line.contains(';');
    if !full_triggers && !xml_triggers {
        return;
    }

    loop {
        let mut matched = false;
        for r in RULES.iter() {
            if !full_triggers && !is_xml_rule(r.cat) {
                continue;
            }
            let hit = r
                .re
                .find_iter(line)
                .map(|m| (m.start(), m.end(), m.as_str().to_string()))
                .find(|(_, _, text)| !r.needs_space || text.contains(' '));
            if let Some((start, end, text)) = hit {
                store.note(r.cat, text.trim(), loc, NoteMode::Unconditional, None);
                line.replace_range(start..end, &" ".repeat(end - start));
                matched = true;
                break;
            }
        }
        if !matched {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> (ExampleStore, String) {
        let mut store = ExampleStore::new(20, 10);
        let mut line = line.to_string();
        prescan_line(&mut store, &mut line, "1");
        (store, line)
    }

    #[test]
    fn broken_url_is_blanked() {
        let (store, line) = run("see www . example . com / path here");
        assert_eq!(store.count(Category::BrokenUrl), 1);
        assert!(!line.contains("example"));
        assert!(line.contains("see"));
        assert!(line.contains("here"));
    }

    #[test]
    fn clean_url_is_left_alone() {
        let (store, line) = run("see www.example.com here");
        assert_eq!(store.count(Category::BrokenUrl), 0);
        assert!(line.contains("www.example.com"));
    }

    #[test]
    fn broken_email_detected() {
        let (store, _) = run("write to user @ example . org today");
        assert_eq!(store.count(Category::BrokenEmail), 1);
    }

    #[test]
    fn spaced_at_without_domain_is_fuzzy() {
        let (store, _) = run("user @ somewhere");
        assert_eq!(store.count(Category::BrokenEmail), 0);
        assert_eq!(store.count(Category::BrokenEmailFuzzy), 1);
    }

    #[test]
    fn broken_filename_detected() {
        let (store, _) = run("open report . pdf www"); // www only triggers the scan
        assert_eq!(store.count(Category::BrokenFilename), 1);
    }

    #[test]
    fn split_xml_escape_variants() {
        let (store, _) = run("a & amp ; b & # 38 ; c & # x26 ; d & eacute ; e");
        assert_eq!(store.count(Category::XmlEscStd), 1);
        assert_eq!(store.count(Category::XmlEscDec), 1);
        assert_eq!(store.count(Category::XmlEscHex), 1);
        assert_eq!(store.count(Category::XmlEscAbc), 1);
    }

    #[test]
    fn nested_escape_beats_plain_escape() {
        let (store, line) = run("x &amp;amp;quot; y;");
        assert_eq!(store.count(Category::XmlEscNested), 1);
        assert_eq!(store.count(Category::XmlEscStd), 0);
        assert!(!line.contains("&amp;"));
    }

    #[test]
    fn split_nested_escape_detected() {
        let (store, _) = run("a & amp ; amp ; quot ; b");
        assert_eq!(store.count(Category::XmlEscNested), 1);
        assert_eq!(store.count(Category::XmlEscStd), 0);
        assert_eq!(store.count(Category::XmlEscAbc), 0);
    }

    #[test]
    fn singly_nested_escape_is_nested() {
        let (store, _) = run("see &amp;quot; here;");
        assert_eq!(store.count(Category::XmlEscNested), 1);
        assert_eq!(store.count(Category::XmlEscStd), 0);
    }

    #[test]
    fn intact_escape_still_counts() {
        let (store, line) = run("AT&amp;T was here;");
        assert_eq!(store.count(Category::XmlEscStd), 1);
        assert!(!line.contains("&amp;"));
    }

    #[test]
    fn xml_sublist_runs_without_full_triggers() {
        // no http/www/@ triggers, but & and ; present
        let (store, _) = run("x &#169; y");
        assert_eq!(store.count(Category::XmlEscDec), 1);
    }

    #[test]
    fn unusual_punct_comb_needs_another_trigger() {
        // gated behind the full trigger set
        let (store, _) = run("www , . next");
        assert_eq!(store.count(Category::UnusualPunctComb), 1);
        let (store, _) = run("end . , next");
        assert_eq!(store.count(Category::UnusualPunctComb), 0);
    }

    #[test]
    fn specific_beats_fuzzy() {
        let (store, _) = run("www . example . com");
        assert_eq!(store.count(Category::BrokenUrl), 1);
        assert_eq!(store.count(Category::BrokenUrlFuzzy), 0);
    }

    #[test]
    fn blanking_preserves_line_length() {
        let input = "pre www . example . com post";
        let (_, line) = run(input);
        assert_eq!(line.len(), input.len());
    }

    #[test]
    fn untriggered_line_is_untouched() {
        let input = "just an ordinary line . , with debris";
        let (store, line) = run(input);
        assert_eq!(line, input);
        assert_eq!(store.count(Category::UnusualPunctComb), 0);
    }
}
