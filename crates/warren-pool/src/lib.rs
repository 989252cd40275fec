//! Fixed-capacity generational object pool with an intrusive hierarchy.
//!
//! [`Pool`] is the backing store for frame-stepped simulation workloads:
//! game entities, scene graphs, agent systems. It hands out generational
//! [`Handle`](warren_core::Handle)s that survive slot recycling without
//! dangling, keeps parent/child structure in intrusive per-slot links so
//! destroying an entity transitively destroys its descendants, and defers
//! batch destruction to an explicit per-frame safe point.
//!
//! Payloads are `Pod` values, which keeps the whole pool serialisable as a
//! single flat binary blob; see the `warren-snapshot` crate for the codec.
//!
//! # Quick start
//!
//! ```
//! use warren_pool::Pool;
//!
//! let mut pool: Pool<u32> = Pool::new(16);
//! let parent = pool.spawn();
//! let child = pool.spawn();
//! *pool.get_mut(child).unwrap() = 42;
//! pool.attach_child(parent, child);
//!
//! // Destroying the parent tears down the subtree; the handles go stale.
//! pool.destroy(parent);
//! assert!(!pool.is_valid(child));
//!
//! // The slot is recycled at a new generation; the old handle stays dead.
//! let replacement = pool.spawn();
//! assert_eq!(replacement.index(), child.index());
//! assert!(!pool.is_valid(child));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod deferred;
mod error;
mod image;
mod iter;
mod pool;
mod slot;

pub use error::ImageError;
pub use iter::{Children, Iter, IterMut};
pub use pool::Pool;
pub use slot::Slot;
