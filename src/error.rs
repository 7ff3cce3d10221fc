//! Error types for cribdrag.
//!
//! The editing core is total over clamped inputs: a stray range from an
//! interactive caller clamps silently and can never fail. The only fallible
//! operations are loading the ciphertext files and resolving a toggle by
//! name.

use std::fmt;
use std::io;

/// Result type alias for cribdrag operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cribdrag operations.
#[derive(Debug)]
pub enum Error {
    /// A ciphertext file could not be opened or read at load time.
    Io(io::Error),
    /// A toggle name other than `pipes` or `offsets` was given.
    UnknownToggle(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnknownToggle(name) => {
                write!(f, "unknown toggle: {name} (expected pipes or offsets)")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::UnknownToggle(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownToggle("ruler".to_string());
        assert!(err.to_string().contains("unknown toggle: ruler"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
