// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Everything that aborts a command before or while spawning the script lands
//! here. Monitor output violations are *not* errors: they are returned as data
//! in [`crate::validate::ValidationResult`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RmmError {
    /// Invalid input detected before any process is spawned.
    #[error("{0}")]
    Config(String),

    /// The interpreter binary could not be launched. The OS error is kept as
    /// the source and is not part of the message.
    #[error("Command not found: {program} (install it and try again)")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A `--vars` file line that is not `KEY=VALUE`.
    #[error("Invalid env line ({reason}) at {}:{line_no}: {line}", path.display())]
    EnvLine {
        path: PathBuf,
        line_no: usize,
        reason: &'static str,
        line: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RmmError {
    pub fn config(msg: impl Into<String>) -> Self {
        RmmError::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RmmError>;
