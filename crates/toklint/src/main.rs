//! toklint CLI
#![deny(unsafe_code)]

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use toklint::Cli;
use toklint_core::{Analyzer, AnalyzerConfig, report};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    let filter = observability::env_filter(cli.quiet, cli.verbose);
    observability::init(filter)?;

    debug!(
        input = ?cli.input,
        output = ?cli.output,
        language = ?cli.language_code,
        json = cli.json,
        summary = cli.summary,
        "CLI initialized"
    );

    // Reject bad language codes loudly here; the library only warns.
    if let Some(ref code) = cli.language_code {
        toklint_core::normalize_code(code).context("invalid --lc value")?;
    }

    let config = AnalyzerConfig {
        max_examples: cli.max_examples,
        max_locations: cli.max_locations,
        show_all_categories: cli.show_all,
        first_field_is_sentence_id: cli.ref_ids,
        language_code: cli.language_code.clone(),
        long_token_min: cli.long_token_min,
    };
    let mut analyzer = Analyzer::new(config);

    let mut reader: Box<dyn BufRead> = match cli.input {
        Some(ref path) => Box::new(BufReader::new(
            File::open(path.as_std_path()).with_context(|| format!("failed to open {path}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if n == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        analyzer.process_line(&buf);
    }
    let analysis = analyzer.finish();
    debug!(
        lines = analysis.n_lines(),
        tokens = analysis.n_tokens(),
        fast_track = analysis.n_fast_tokens(),
        "analysis complete"
    );

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path.as_std_path())
                .with_context(|| format!("failed to create {path}"))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if cli.json {
        serde_json::to_writer(&mut out, &analysis.to_dump())
            .context("failed to serialize dump")?;
        writeln!(out)?;
    } else if cli.summary {
        let label = cli
            .input
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        writeln!(out, "{}: {}", label.bold(), report::summary_line(&analysis))?;
    } else {
        report::write_text(&analysis, &mut out).context("failed to write report")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}
