//! Error types for termfolio.

use std::io;

/// Errors produced by termfolio.
///
/// The first four variants are user-input conditions. They are terminal
/// for a single submission only and are rendered as one diagnostic line
/// by the interpreter; they never escape to the host.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("command not found: {0}")]
    UnknownCommand(String),

    #[error("{command}: missing file operand")]
    MissingOperand { command: String },

    #[error("{command}: {name}: No such file or directory")]
    NoSuchFile { command: String, name: String },

    #[error("permission denied")]
    PrivilegeDenied,

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
