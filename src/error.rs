use std::path::PathBuf;

use thiserror::Error;

/// Problems reading the effect configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid animation duration {0} ms")]
    InvalidDuration(f64),
}

/// Errors surfaced by the morphing effect's host wiring.
#[derive(Debug, Error)]
pub enum MorphError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] calloop::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
