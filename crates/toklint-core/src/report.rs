//! Human-readable report writer.
//!
//! Walks the registry in declaration order and renders each category
//! according to the display policy: zero-count categories are omitted unless
//! `show_all_categories` is set, and language-suppressed categories keep
//! their counts but lose their example blocks.

use std::io::{self, Write};

use crate::analyzer::Analysis;
use crate::categories::REGISTRY;
use crate::data::charnames::{char_id, char_name_or_id};
use crate::store::Example;

fn plural(count: u64) -> &'static str {
    if count == 1 { "instance" } else { "instances" }
}

/// Write the full report.
pub fn write_text<W: Write>(analysis: &Analysis, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Analysed {} tokens in {} lines (language code: {})",
        analysis.n_tokens,
        analysis.n_lines,
        analysis.policy.code().unwrap_or("none"),
    )?;

    for (cat, tag, desc) in REGISTRY {
        let count = analysis.store.count(*cat);
        let suppressed = analysis.policy.suppresses(*cat);
        let show_all = analysis.config.show_all_categories;

        if count == 0 {
            if show_all {
                writeln!(out, "\n{tag} ({desc}): 0 instances")?;
            }
            continue;
        }

        writeln!(out, "\n{tag} ({desc}): {count} {}", plural(count))?;

        if !suppressed || show_all {
            write_examples(analysis, *cat, out)?;
        }
        if suppressed {
            writeln!(
                out,
                "    (examples suppressed: expected for language {})",
                analysis.policy.code().unwrap_or("none"),
            )?;
        }
    }

    let conflicts = analysis.char_conflicts();
    if !conflicts.is_empty() {
        writeln!(out, "\nCharacter conflict sets: {}", conflicts.len())?;
        for [(a, count_a), (b, count_b)] in conflicts {
            writeln!(
                out,
                "    {a} {} ({}) count: {count_a}; {b} {} ({}) count: {count_b}",
                char_id(a),
                char_name_or_id(a),
                char_id(b),
                char_name_or_id(b),
            )?;
        }
    }
    Ok(())
}

fn write_examples<W: Write>(
    analysis: &Analysis,
    cat: crate::categories::Category,
    out: &mut W,
) -> io::Result<()> {
    let Some(record) = analysis.store.record(cat) else {
        return Ok(());
    };
    let max_locations = analysis.store.max_locations() as u64;

    let mut examples: Vec<&(String, Example)> = record.examples().iter().collect();
    examples.sort_by(|a, b| {
        b.1.occurrences
            .cmp(&a.1.occurrences)
            .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
    });

    for (token, example) in examples {
        let locations = example.locations.join(", ");
        let more = if example.occurrences > max_locations {
            ", \u{2026}"
        } else {
            ""
        };
        writeln!(
            out,
            "    {token} ({} {}; line {locations}{more})",
            example.occurrences,
            plural(example.occurrences),
        )?;
    }
    if record.examples_full {
        writeln!(out, "      \u{2026}")?;
    }
    Ok(())
}

/// One line naming the nonzero issue families, for batch triage.
pub fn summary_line(analysis: &Analysis) -> String {
    let mut issues: Vec<String> = Vec::new();
    for (cat, tag, _) in REGISTRY {
        let count = analysis.store.count(*cat);
        if count > 0 && !analysis.policy.suppresses(*cat) && !tag.starts_with("BEN_") {
            issues.push(format!("{tag}({count})"));
        }
    }
    let issues = if issues.is_empty() {
        "no issues".to_string()
    } else {
        issues.join("; ")
    };
    format!(
        "{} tokens, {} lines: {issues}",
        analysis.n_tokens, analysis.n_lines,
    )
}
