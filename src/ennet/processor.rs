//! Processing API: abbreviation in, formatted output out
//!
//! The binary (and anything else that wants more than plain markup) goes
//! through [process], which parses once and hands the finished tree to the
//! named formatter.

use std::fmt;

use crate::ennet::formats::{FormatError, FormatRegistry};
use crate::ennet::parser::{parse_tree, ParseError};

/// Everything that can stop an abbreviation from being processed
#[derive(Debug)]
pub enum ProcessingError {
    Parse(ParseError),
    Format(FormatError),
    Config(config::ConfigError),
    IoError(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Parse(err) => write!(f, "{err}"),
            ProcessingError::Format(err) => write!(f, "{err}"),
            ProcessingError::Config(err) => write!(f, "Configuration error: {err}"),
            ProcessingError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Parse(err) => Some(err),
            ProcessingError::Format(err) => Some(err),
            ProcessingError::Config(err) => Some(err),
            ProcessingError::IoError(_) => None,
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

impl From<FormatError> for ProcessingError {
    fn from(err: FormatError) -> Self {
        ProcessingError::Format(err)
    }
}

impl From<config::ConfigError> for ProcessingError {
    fn from(err: config::ConfigError) -> Self {
        ProcessingError::Config(err)
    }
}

impl From<std::io::Error> for ProcessingError {
    fn from(err: std::io::Error) -> Self {
        ProcessingError::IoError(err.to_string())
    }
}

/// Parse `source` and serialize the tree with the formatter named `format`.
///
/// The format is checked before parsing, so an unknown format is reported
/// even for an abbreviation that would not parse.
pub fn process(
    source: &str,
    format: &str,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    let formatter = registry.lookup(format)?;
    tracing::debug!(abbreviation = source, format, "processing");
    let tree = parse_tree(source)?;
    Ok(formatter.serialize(&tree)?)
}
