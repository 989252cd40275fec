//! Core types for the Warren object pool.
//!
//! This crate defines the vocabulary shared by every Warren crate:
//!
//! - [`Handle`]: a generational `(index, generation)` reference into a pool
//! - [`Kinded`]: the payload discriminator trait used by kind dispatch
//! - the payload contract itself: pool payloads are [`Pod`] values, so they
//!   are fixed-size, bit-copyable, and snapshot as raw bytes
//!
//! Handles are plain values and themselves [`Pod`], so payloads may embed
//! handles (a projectile's target, a follow-camera's subject) and remain
//! snapshot-safe.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod handle;
mod kind;

pub use handle::Handle;
pub use kind::Kinded;

// Payload bounds. Pool payloads are `Pod`: any bit pattern is valid, no
// padding, no drop glue. `Zeroable` provides the spawn-time default state.
pub use bytemuck::{Pod, Zeroable};
