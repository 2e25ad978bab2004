//! The `stats` command: per-category range counts.
//!
//! Multiple files are scanned in parallel; output keeps argument order.

use std::fmt::Write as _;

use dxil_scan::{ranges, TokenCategory};
use rayon::prelude::*;

use super::read_source;
use crate::CliError;

const CATEGORIES: usize = TokenCategory::ALL.len();

/// Range count and byte total per category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    counts: [usize; CATEGORIES],
    bytes: [usize; CATEGORIES],
}

impl Stats {
    pub fn collect(text: &str) -> Self {
        let mut stats = Stats::default();
        for range in ranges(text) {
            let i = range.category.index();
            stats.counts[i] += 1;
            stats.bytes[i] += range.len;
        }
        stats
    }

    pub fn count(&self, category: TokenCategory) -> usize {
        self.counts[category.index()]
    }

    pub fn bytes(&self, category: TokenCategory) -> usize {
        self.bytes[category.index()]
    }

    pub fn total_ranges(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Equals the length of the scanned text.
    pub fn total_bytes(&self) -> usize {
        self.bytes.iter().sum()
    }

    /// Table of non-empty categories followed by a total line.
    pub fn render(&self, path: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{path}:");
        for category in TokenCategory::ALL {
            let count = self.count(category);
            if count > 0 {
                let _ = writeln!(
                    out,
                    "  {:<16} {count:>8} {:>10}",
                    category.name(),
                    self.bytes(category)
                );
            }
        }
        let _ = writeln!(
            out,
            "  {:<16} {:>8} {:>10}",
            "total",
            self.total_ranges(),
            self.total_bytes()
        );
        out
    }
}

/// Run `dxv stats`.
///
/// Unreadable files are reported and skipped; the command fails if any were.
#[tracing::instrument(level = "debug", skip_all, fields(files = args.len()))]
pub fn stats_command(args: &[String]) -> Result<(), CliError> {
    if args.is_empty() {
        return Err(CliError::MissingArgument("file path"));
    }
    if let Some(flag) = args.iter().find(|a| a.starts_with('-') && a.as_str() != "-") {
        return Err(CliError::BadOption(flag.clone()));
    }
    // Standard input can only be read once.
    if args.iter().filter(|a| a.as_str() == "-").count() > 1 {
        return Err(CliError::BadOption("-".to_string()));
    }

    let results: Vec<_> = args
        .par_iter()
        .map(|path| {
            let text = read_source(path)?;
            let stats = Stats::collect(&text);
            tracing::debug!(path = %path, ranges = stats.total_ranges(), "scanned");
            Ok::<_, CliError>(stats)
        })
        .collect();

    let mut failed = 0;
    for (path, result) in args.iter().zip(results) {
        match result {
            Ok(stats) => print!("{}", stats.render(path)),
            Err(e) => {
                eprintln!("error: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::FilesFailed(failed));
    }
    Ok(())
}
