//! Slot records.

use warren_core::{Handle, Pod};

/// One pool slot: generation counter, alive flag, hierarchy links, payload.
///
/// Slots are dumb storage; all invariants live in
/// [`Pool`](crate::Pool). The read accessors and [`Slot::from_parts`] exist
/// for the snapshot codec, which serialises every slot (free ones included)
/// and rebuilds them when decoding a staging pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot<T> {
    pub(crate) generation: u32,
    pub(crate) alive: bool,
    pub(crate) parent: Handle,
    pub(crate) first_child: Handle,
    pub(crate) next_sibling: Handle,
    pub(crate) payload: T,
}

impl<T: Pod> Slot<T> {
    /// A fresh free slot: generation 0, not alive, all links nil.
    pub(crate) fn new_free() -> Self {
        Self {
            generation: 0,
            alive: false,
            parent: Handle::NIL,
            first_child: Handle::NIL,
            next_sibling: Handle::NIL,
            payload: T::zeroed(),
        }
    }

    /// Rebuild a slot from decoded snapshot fields.
    pub fn from_parts(
        generation: u32,
        alive: bool,
        parent: Handle,
        first_child: Handle,
        next_sibling: Handle,
        payload: T,
    ) -> Self {
        Self {
            generation,
            alive,
            parent,
            first_child,
            next_sibling,
            payload,
        }
    }

    /// Current generation counter.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether the slot currently holds a live payload.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Parent link (nil when detached or free).
    pub fn parent(&self) -> Handle {
        self.parent
    }

    /// Head of this slot's child list (nil when childless).
    pub fn first_child(&self) -> Handle {
        self.first_child
    }

    /// Next sibling in the parent's child list (nil at the tail).
    pub fn next_sibling(&self) -> Handle {
        self.next_sibling
    }

    /// The stored payload bytes.
    ///
    /// For a free slot this is whatever the last occupant left behind;
    /// callers other than the snapshot codec should go through
    /// [`Pool::get`](crate::Pool::get).
    pub fn payload(&self) -> &T {
        &self.payload
    }
}
