//! Errors raised while configuring and driving the simulation.

use std::{io, path::PathBuf};
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or canvas I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The configuration file could not be read.
    #[error("unable to read config file {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The configuration file is not valid TOML for [`Config`](crate::Config).
    #[error("invalid config file: {0}")]
    ParseConfig(#[from] toml::de::Error),
    /// A setting is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
