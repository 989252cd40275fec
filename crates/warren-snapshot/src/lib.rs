//! Binary snapshot persistence for Warren pools.
//!
//! A snapshot is the complete persisted image of one pool: header, free
//! stack, slot array, written back-to-back as a single flat blob. Loading
//! is **transactional**: the whole file is staged and validated before the
//! target pool is touched, so a failed load leaves the pool (deferred
//! queue included) exactly as it was.
//!
//! # Architecture
//!
//! - [`save`] / [`save_to_file`] encode a pool to any `Write` sink
//! - [`load`] / [`load_from_file`] decode into a staging pool, then commit
//! - [`codec`] holds the little-endian primitives and region encoders
//!
//! # Format
//!
//! ```text
//! [MAGIC "WRRN"] [capacity u32] [payload_size u32]
//! [free_count u32] [free_index u32 × free_count]
//! [slot 0] [slot 1] … [slot capacity]
//! ```
//!
//! Each slot record is `generation u32`, `alive u8`, three handle links
//! (`index u32`, `generation u32` each), then the payload bytes verbatim.
//! Integers are little-endian; there is no padding between regions and no
//! format version; snapshots are only compatible with a pool of identical
//! capacity and payload layout, on same-endian hosts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use error::SnapshotError;
pub use reader::{load, load_from_file};
pub use writer::{save, save_to_file};

/// Magic bytes at the start of every snapshot file.
pub const MAGIC: [u8; 4] = *b"WRRN";
