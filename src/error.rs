//! Error type shared by every fallible operation in the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by clip loaders.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SfxError>;

/// Errors raised while configuring or applying sound effects.
#[derive(Error, Debug)]
pub enum SfxError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A randomizer was built over an empty list.
    #[error("cannot draw from an empty list")]
    EmptyList,

    /// The corpus list file could not be opened.
    #[error("failed to open noise list {}", path.display())]
    CorpusOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line of the corpus list file failed.
    #[error("failed to read noise list {}: {source}", path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus list file holds no identifiers.
    #[error("noise list {} contains no entries", path.display())]
    EmptyCorpus { path: PathBuf },

    /// A noise clip could not be decoded.
    #[error("failed to load noise clip '{id}': {source}")]
    NoiseLoad {
        id: String,
        #[source]
        source: BoxError,
    },

    /// A noise clip decoded to zero samples.
    #[error("noise clip '{id}' contains no samples")]
    EmptyClip { id: String },

    /// The effect fired on a signal without samples.
    #[error("cannot mix noise into an empty signal")]
    EmptySignal,

    /// A draw policy name was not recognised.
    #[error("unknown draw policy '{0}'")]
    UnknownPolicy(String),

    /// A JSON configuration could not be parsed.
    #[error("failed to parse configuration")]
    ConfigParse(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration file {}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
