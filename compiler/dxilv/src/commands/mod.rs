//! Command handlers for the `dxv` CLI.
//!
//! Each submodule implements one command. Option parsing and rendering are
//! split from the I/O so they can be tested on in-memory text. Shared
//! utilities like [`read_source`] live in the module root.

use std::io::Read;

use crate::CliError;

mod highlight;
mod stats;
mod tokens;

pub use highlight::{highlight_command, parse_highlight_options, ColorChoice, HighlightOptions};
pub use stats::{stats_command, Stats};
pub use tokens::{parse_tokens_options, render_tokens, tokens_command, TokensOptions};

/// Read a source file, or standard input when `path` is `-`.
pub fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::from_read("<stdin>", e))?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))
}

/// Parse `--name=N` as a byte offset.
fn parse_offset(arg: &str, value: &str) -> Result<usize, CliError> {
    value
        .parse()
        .map_err(|_| CliError::BadOption(arg.to_string()))
}
