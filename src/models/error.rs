use std::fmt;

/// Failure taxonomy for the pipeline. Per-unit failures (a single listing
/// source, fetch window, or article) are logged and degraded by their owning
/// component; only configuration and output-file errors abort a run.
#[derive(Debug)]
pub enum Error {
    SourceUnavailable(String),
    TransportFailure(String),
    ParseFailure(String),
    ConfigError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnavailable(msg) => write!(f, "Source Unavailable: {}", msg),
            Error::TransportFailure(msg) => write!(f, "Transport Failure: {}", msg),
            Error::ParseFailure(msg) => write!(f, "Parse Failure: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::TransportFailure(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
            kind => Error::ParseFailure(format!("{:?}", kind)),
        }
    }
}
