//! Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading, rendering or encoding a bookmark tree
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Neither a mozLz4 export nor parseable JSON
    #[error("'{}' is not a valid Firefox bookmark backup file (.jsonlz4) or JSON file", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("file I/O error for '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input shorter than the mozLz4 header, corrupt block, or output larger
    /// than the buffer ceiling
    #[error("LZ4 decompression error for '{}'", .path.display())]
    Decompression {
        path: PathBuf,
        #[source]
        source: DecompressFailure,
    },

    #[error("JSON parsing error for '{}'", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output sink could not be written
    #[error("failed to write bookmarks")]
    Write(#[source] io::Error),

    #[error("failed to serialize bookmark tree")]
    Encode(#[source] serde_json::Error),

    /// JSON too long for the 32-bit size field of a mozLz4 header
    #[error("bookmark tree too large for mozLz4: {len} bytes")]
    TooLarge { len: usize },
}

/// Why a mozLz4 payload could not be inflated
#[derive(Debug, Error)]
pub enum DecompressFailure {
    #[error("{0} bytes is shorter than the 12-byte mozLz4 header")]
    Truncated(usize),

    #[error(transparent)]
    Block(#[from] lz4_flex::block::DecompressError),
}

impl BookmarkError {
    pub fn is_decompression(&self) -> bool {
        matches!(self, Self::Decompression { .. })
    }
}

pub type Result<T, E = BookmarkError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_path() {
        let err = BookmarkError::UnsupportedFormat { path: PathBuf::from("notes.txt") };
        assert!(err.to_string().contains("'notes.txt'"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = BookmarkError::Io {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_truncated_is_decompression() {
        let err = BookmarkError::Decompression {
            path: PathBuf::from("x"),
            source: DecompressFailure::Truncated(3),
        };
        assert!(err.is_decompression());
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "3 bytes is shorter than the 12-byte mozLz4 header");
        assert!(!BookmarkError::Write(io::Error::other("full")).is_decompression());
    }
}
