//! The `tokens` command: dump the range stream of a file.

use std::fmt::Write as _;

use dxil_scan::{ranges_in, TokenRange};

use super::{parse_offset, read_source};
use crate::CliError;

/// Byte span to scan. Unset bounds default to the whole text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokensOptions {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

/// Parse `tokens` arguments into options and the input path.
pub fn parse_tokens_options(args: &[String]) -> Result<(TokensOptions, String), CliError> {
    let mut options = TokensOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--start=") {
            options.start = Some(parse_offset(arg, value)?);
        } else if let Some(value) = arg.strip_prefix("--end=") {
            options.end = Some(parse_offset(arg, value)?);
        } else if arg == "-" || !arg.starts_with('-') {
            if path.is_some() {
                return Err(CliError::BadOption(arg.clone()));
            }
            path = Some(arg.clone());
        } else {
            return Err(CliError::BadOption(arg.clone()));
        }
    }

    let path = path.ok_or(CliError::MissingArgument("file path"))?;
    Ok((options, path))
}

/// Render one line per range: `start..end category "text"`.
///
/// `path` is only used in error messages.
pub fn render_tokens(path: &str, text: &str, options: &TokensOptions) -> Result<String, CliError> {
    let start = options.start.unwrap_or(0);
    let end = options.end.unwrap_or(text.len());
    if !text.is_char_boundary(start) {
        return Err(CliError::BadOffset {
            path: path.to_string(),
            offset: start,
        });
    }

    let mut out = String::new();
    for range in ranges_in(text, start..end) {
        write_range(&mut out, text, range);
    }
    Ok(out)
}

fn write_range(out: &mut String, text: &str, range: TokenRange) {
    let span = format!("{}..{}", range.start, range.end());
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{span:<14} {:<16} {:?}",
        range.category.name(),
        range.text(text)
    );
}

/// Run `dxv tokens`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn tokens_command(args: &[String]) -> Result<(), CliError> {
    let (options, path) = parse_tokens_options(args)?;
    let text = read_source(&path)?;
    tracing::debug!(path = %path, bytes = text.len(), ?options, "dumping tokens");
    let out = render_tokens(&path, &text, &options)?;
    print!("{out}");
    Ok(())
}
