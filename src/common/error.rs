//! Error types for leafdb.

use std::fmt;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in leafdb.
///
/// Every variant originates at the persistence boundary. The tree engine
/// itself never fails: absence of a key is reported as `None`/an empty
/// result, and deleting a missing key is a no-op. Constructing a tree with
/// `order < 3` is a programming error and panics instead of returning one of
/// these.
#[derive(Debug)]
pub enum Error {
    /// I/O error from snapshot file operations.
    ///
    /// This wraps `std::io::Error` from file read/write operations. A missing
    /// snapshot file surfaces here (`ErrorKind::NotFound`).
    Io(std::io::Error),

    /// The snapshot file exists but its header is invalid.
    ///
    /// Covers a bad magic number, an unsupported format version, a payload
    /// length that disagrees with the file size, and a checksum mismatch.
    Corrupt(String),

    /// The snapshot header checked out but the payload failed to decode.
    Serde(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Corrupt(reason) => write!(f, "corrupt snapshot: {}", reason),
            Error::Serde(e) => write!(f, "snapshot decode error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Corrupt(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Corrupt("bad magic number".to_string());
        assert_eq!(format!("{}", err), "corrupt snapshot: bad magic number");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        // This function returns our Result type
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
