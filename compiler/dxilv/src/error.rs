//! Errors reported by the `dxv` commands.
//!
//! The scanner itself cannot fail; everything here comes from reading input
//! or from the command line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid option '{0}'")]
    BadOption(String),

    /// Offset outside the text or inside a multi-byte character.
    #[error("offset {offset} is not a character boundary in '{path}'")]
    BadOffset { path: String, offset: usize },

    #[error("{0} file(s) could not be read")]
    FilesFailed(usize),
}

impl CliError {
    /// Map an I/O error from reading `path` to the most specific variant.
    pub(crate) fn from_read(path: &str, err: std::io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io { path, source: err },
        }
    }

    /// Whether the usage text should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            CliError::UnknownCommand(_) | CliError::MissingArgument(_) | CliError::BadOption(_)
        )
    }
}
