//! Warren: a generational object pool for simulation-style workloads.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Warren sub-crates. For most users, adding `warren` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // A payload is any `Pod` value. Handles embed freely.
//! #[repr(C)]
//! #[derive(Clone, Copy, Debug, Pod, Zeroable)]
//! struct Mob {
//!     health: i32,
//!     target: Handle,
//! }
//!
//! let mut world: Pool<Mob> = Pool::new(64);
//!
//! let enemy = world.spawn();
//! world.get_mut(enemy).unwrap().health = 20;
//!
//! let shot = world.spawn();
//! world.get_mut(shot).unwrap().target = enemy;
//!
//! // Destroying the enemy makes every stored reference to it stale,
//! // even after the slot is recycled by a later spawn.
//! world.destroy(enemy);
//! let stored = world.get(shot).unwrap().target;
//! assert!(!world.is_valid(stored));
//!
//! // Defer destruction to a frame-boundary safe point.
//! world.destroy_later(shot);
//! assert_eq!(world.flush_destroy_later(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | `Handle`, `Kinded`, payload bounds |
//! | [`pool`] | `warren-pool` | `Pool`, iteration, hierarchy, deferred destroy |
//! | [`snapshot`] | `warren-snapshot` | Transactional binary save/load |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Handle and payload vocabulary (`warren-core`).
pub use warren_core as types;

/// The pool itself (`warren-pool`).
pub use warren_pool as pool;

/// Binary snapshot persistence (`warren-snapshot`).
pub use warren_snapshot as snapshot;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
pub mod prelude {
    pub use warren_core::{Handle, Kinded, Pod, Zeroable};
    pub use warren_pool::Pool;
    pub use warren_snapshot::{load_from_file, save_to_file, SnapshotError};
}
