//! Error types for snapshot save and load.

use std::fmt;
use std::io;

use warren_pool::ImageError;

/// Errors that can occur while saving or loading a pool snapshot.
///
/// Every load failure is transactional: the target pool is untouched.
#[derive(Debug)]
pub enum SnapshotError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The file does not start with the expected `b"WRRN"` magic bytes.
    InvalidMagic,
    /// The snapshot was taken from a pool of a different capacity.
    CapacityMismatch {
        /// Capacity of the pool being loaded into.
        expected: u32,
        /// Capacity recorded in the file.
        found: u32,
    },
    /// The snapshot's payload records have a different size.
    PayloadSizeMismatch {
        /// Payload size of the pool being loaded into, in bytes.
        expected: u32,
        /// Payload size recorded in the file.
        found: u32,
    },
    /// The snapshot data ended before a complete image was read.
    Truncated {
        /// What was being read when the data ran out.
        detail: String,
    },
    /// A slot's alive flag is neither 0 nor 1.
    InvalidAliveFlag {
        /// Index of the malformed slot record.
        index: u32,
        /// The byte found.
        value: u8,
    },
    /// The snapshot decoded cleanly but left unconsumed bytes.
    TrailingBytes {
        /// Number of bytes left over.
        count: usize,
    },
    /// The decoded image violates the pool's structural invariants.
    MalformedImage(ImageError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"WRRN\")"),
            Self::CapacityMismatch { expected, found } => {
                write!(f, "capacity mismatch: pool has {expected}, file has {found}")
            }
            Self::PayloadSizeMismatch { expected, found } => {
                write!(
                    f,
                    "payload size mismatch: pool uses {expected} bytes, file has {found}"
                )
            }
            Self::Truncated { detail } => write!(f, "truncated snapshot: {detail}"),
            Self::InvalidAliveFlag { index, value } => {
                write!(f, "slot {index} has invalid alive flag {value}")
            }
            Self::TrailingBytes { count } => {
                write!(f, "{count} unconsumed bytes after snapshot image")
            }
            Self::MalformedImage(e) => write!(f, "malformed pool image: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::MalformedImage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    /// `UnexpectedEof` becomes [`SnapshotError::Truncated`]: the staging
    /// buffer is in memory, so running out of bytes always means a short
    /// or cut-off file rather than a transport fault.
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Self::Truncated {
                detail: "unexpected end of snapshot data".into(),
            }
        } else {
            Self::Io(e)
        }
    }
}

impl From<ImageError> for SnapshotError {
    fn from(e: ImageError) -> Self {
        Self::MalformedImage(e)
    }
}
