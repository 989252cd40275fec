//! Error types for rebuilding a pool from raw parts.

use std::error::Error;
use std::fmt;

/// Reasons a decoded raw image cannot become a [`Pool`](crate::Pool).
///
/// Returned by [`Pool::from_raw_parts`](crate::Pool::from_raw_parts) when the
/// supplied slot array and free stack violate the pool's structural
/// invariants. The snapshot codec surfaces these to callers so a corrupt or
/// hand-crafted file can never install inconsistent state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// The slot array is empty; even a zero-capacity pool has its sentinel.
    MissingSentinel,
    /// Slot 0 is alive, has a non-zero generation, or carries links.
    CorruptSentinel,
    /// The free stack holds more entries than the pool has slots.
    FreeStackOverflow {
        /// Number of free-stack entries found.
        len: usize,
        /// Pool capacity implied by the slot array.
        capacity: usize,
    },
    /// A free-stack entry is outside `[1, capacity]`.
    FreeIndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Pool capacity implied by the slot array.
        capacity: usize,
    },
    /// The same index appears twice in the free stack.
    DuplicateFreeIndex {
        /// The duplicated index.
        index: u32,
    },
    /// A free-stack entry points at a slot marked alive.
    FreeSlotAlive {
        /// The conflicting index.
        index: u32,
    },
    /// A slot is dead but its index is missing from the free stack.
    UnlistedDeadSlot {
        /// The orphaned index.
        index: u32,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSentinel => write!(f, "slot array is empty (sentinel slot missing)"),
            Self::CorruptSentinel => write!(f, "sentinel slot 0 is not in its reserved state"),
            Self::FreeStackOverflow { len, capacity } => {
                write!(f, "free stack has {len} entries but capacity is {capacity}")
            }
            Self::FreeIndexOutOfRange { index, capacity } => {
                write!(f, "free index {index} outside [1, {capacity}]")
            }
            Self::DuplicateFreeIndex { index } => {
                write!(f, "free index {index} listed more than once")
            }
            Self::FreeSlotAlive { index } => {
                write!(f, "free index {index} points at an alive slot")
            }
            Self::UnlistedDeadSlot { index } => {
                write!(f, "slot {index} is dead but absent from the free stack")
            }
        }
    }
}

impl Error for ImageError {}
