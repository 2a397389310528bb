//! Error types for bwtui.

use thiserror::Error;

/// Failure while loading the vault at startup. Always fatal for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The vault command could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The vault command ran but exited unsuccessfully.
    #[error("`{command}` exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: String,
        stderr: String,
    },

    /// The command output did not have the expected shape.
    #[error("could not parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while writing to the clipboard. Recovered by the caller.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),

    #[error("clipboard command `{command}` failed: {reason}")]
    Command { command: String, reason: String },
}

/// Invalid user configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("key '{key}' is bound to both {first} and {second}")]
    DuplicateBinding {
        key: char,
        first: &'static str,
        second: &'static str,
    },

    #[error("clipboard command must not be empty")]
    EmptyClipboardCommand,
}
