//! Error type for the fallible edges of the crate.
//!
//! The animation core itself never fails. Only loading and saving the INI
//! configuration and the outcome table can go wrong.

use std::path::PathBuf;

/// Errors raised while reading or writing configuration and outcome files.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    #[error("failed to load config file {path:?}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },
    #[error("failed to save config file {path:?}: {source}")]
    ConfigSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read outcome table {path:?}: {source}")]
    OutcomeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write outcome table {path:?}: {source}")]
    OutcomeWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid outcome table: {0}")]
    OutcomeParse(#[from] serde_json::Error),
    #[error("outcome table is empty")]
    EmptyOutcomeTable,
}

pub type ReelResult<T> = Result<T, ReelError>;
