use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsizeError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read map input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("failed to write csv to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
