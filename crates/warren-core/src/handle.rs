//! Generational pool handles.
//!
//! A [`Handle`] names a pool slot together with the generation at which that
//! slot was last spawned. Staleness checks are O(1): the pool compares the
//! handle's generation against the slot's current one, so a handle stored
//! inside a payload stays safe to test even after its slot has been recycled.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// A `(index, generation)` reference into a [`Pool`](../warren_pool).
///
/// Handles are small values: copy them freely, embed them in payloads, store
/// them across frames. A handle never dangles: it merely becomes invalid
/// once its slot is destroyed, and any later spawn into the same slot bumps
/// the generation so the old handle can never resolve to the replacement.
///
/// [`Handle::NIL`] is the reserved "no entity" value. It doubles as the
/// terminator for the pool's intrusive hierarchy links.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
#[must_use]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    /// The reserved "no entity" handle, `(0, 0)`. Never valid in any pool.
    pub const NIL: Handle = Handle {
        index: 0,
        generation: 0,
    };

    /// Create a handle from raw parts.
    ///
    /// Mostly useful to the snapshot codec and to tests; handles for live
    /// entities come from [`spawn`](../warren_pool/struct.Pool.html#method.spawn).
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The slot index this handle points at.
    pub const fn index(self) -> u32 {
        self.index
    }

    /// The generation this handle was issued at.
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Whether this is the reserved [`Handle::NIL`] value.
    pub const fn is_nil(self) -> bool {
        self.index == 0 && self.generation == 0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            write!(f, "Handle(nil)")
        } else {
            write!(f, "Handle({}v{})", self.index, self.generation)
        }
    }
}
