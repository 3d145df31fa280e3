//! Typed errors for subtitle script parsing.

use std::path::PathBuf;
use thiserror::Error;

/// A subtitle script could not be read or does not have the expected shape.
#[derive(Debug, Error)]
pub enum ScriptParseError {
    /// The script file could not be read.
    #[error("cannot read script '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script is not valid UTF-8.
    #[error("script '{}' is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    /// A required section such as `[Events]` is absent.
    #[error("script has no [{0}] section")]
    MissingSection(&'static str),

    /// A data line appeared before the section's `Format:` line.
    #[error("line {line}: [{section}] data before its Format line")]
    MissingFormat { section: &'static str, line: usize },

    /// A line could not be split into the columns its section declares.
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// An event names a style that does not exist and there is no `Default` style.
    #[error("line {line}: unknown style '{style}'")]
    UnknownStyle { line: usize, style: String },
}
