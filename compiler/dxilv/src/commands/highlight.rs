//! The `highlight` command: print a file with terminal colors.

use std::io::IsTerminal;

use super::read_source;
use crate::theme::Theme;
use crate::CliError;

/// When to emit escape sequences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    pub color: ColorChoice,
}

/// Parse `highlight` arguments into options and the input path.
pub fn parse_highlight_options(args: &[String]) -> Result<(HighlightOptions, String), CliError> {
    let mut options = HighlightOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--no-color" | "--color=never" => options.color = ColorChoice::Never,
            "--color" | "--color=always" => options.color = ColorChoice::Always,
            "--color=auto" => options.color = ColorChoice::Auto,
            _ if arg == "-" || !arg.starts_with('-') => {
                if path.is_some() {
                    return Err(CliError::BadOption(arg.clone()));
                }
                path = Some(arg.clone());
            }
            _ => return Err(CliError::BadOption(arg.clone())),
        }
    }

    let path = path.ok_or(CliError::MissingArgument("file path"))?;
    Ok((options, path))
}

/// Run `dxv highlight`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn highlight_command(args: &[String]) -> Result<(), CliError> {
    let (options, path) = parse_highlight_options(args)?;
    let text = read_source(&path)?;
    let color = options.color.enabled();
    tracing::debug!(path = %path, bytes = text.len(), color, "highlighting");

    if color {
        print!("{}", Theme::default().paint(&text));
    } else {
        print!("{text}");
    }
    Ok(())
}
