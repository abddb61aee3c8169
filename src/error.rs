//! Crate error type.
//!
//! Page operations themselves never fail; errors only come from the
//! outside world: the terminal, output files, the logger.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Terminal or file I/O failed.
    Io(io::Error),
    /// JSON export failed to serialize.
    Json(serde_json::Error),
    /// Logger could not be set up.
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Json(e) => write!(f, "JSON serialization failed: {}", e),
            Error::Logging(msg) => write!(f, "logging setup failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Logging(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn logging_error_has_no_source() {
        let err = Error::Logging("already initialized".into());
        assert!(err.to_string().contains("already initialized"));
        assert!(std::error::Error::source(&err).is_none());
    }
}
