//! The pool: slot storage, free-slot management, and the intrusive hierarchy.

use warren_core::{Handle, Pod};

use crate::slot::Slot;

/// A fixed-capacity generational object pool with an intrinsic
/// parent/child hierarchy.
///
/// The pool owns `capacity + 1` slots; slot 0 is a permanent sentinel that
/// is never handed out, which aligns [`Handle::NIL`]'s index with "no slot"
/// and lets the hierarchy links use nil as their terminator. Unused slot
/// indices sit on a LIFO free stack, so the most recently freed slot is the
/// first to be reused. Every reuse bumps the slot's generation,
/// invalidating all prior handles to it.
///
/// Payloads are [`Pod`] values: fixed-size, bit-copyable, zero-initialised
/// on [`spawn`](Pool::spawn). That is what makes the whole pool
/// serialisable as one flat binary image (see `warren-snapshot`) and lets
/// payloads embed [`Handle`]s of their own.
///
/// The pool is single-threaded by design; `&mut self` is the only
/// synchronisation. Destroying entities mid-iteration goes through the
/// deferred queue ([`destroy_later`](Pool::destroy_later),
/// [`flush_destroy_later`](Pool::flush_destroy_later)).
#[derive(Clone, Debug, PartialEq)]
pub struct Pool<T> {
    /// `capacity + 1` slots; index 0 is the sentinel.
    pub(crate) slots: Vec<Slot<T>>,
    /// LIFO stack of free slot indices, each in `[1, capacity]`.
    pub(crate) free: Vec<u32>,
    /// Deferred-destroy queue, bounded at `capacity` entries.
    pub(crate) pending: Vec<Handle>,
}

impl<T: Pod> Pool<T> {
    /// Create an empty pool that can hold up to `capacity` entities.
    ///
    /// The first spawn returns slot index 1, then 2, and so on; freed
    /// indices are reused most-recently-freed first.
    pub fn new(capacity: usize) -> Self {
        let slots = (0..=capacity).map(|_| Slot::new_free()).collect();
        let free = (1..=capacity as u32).rev().collect();
        Self {
            slots,
            free,
            pending: Vec::new(),
        }
    }

    /// Maximum number of simultaneously alive entities.
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Number of currently alive entities.
    pub fn len(&self) -> usize {
        self.capacity() - self.free.len()
    }

    /// Whether no entities are alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spawn a new entity with a zeroed payload and no hierarchy links.
    ///
    /// Returns [`Handle::NIL`] when the pool is full. A full pool is a
    /// normal signalled condition, not an error.
    pub fn spawn(&mut self) -> Handle {
        let Some(index) = self.free.pop() else {
            return Handle::NIL;
        };
        let slot = &mut self.slots[index as usize];
        slot.generation += 1;
        slot.alive = true;
        slot.parent = Handle::NIL;
        slot.first_child = Handle::NIL;
        slot.next_sibling = Handle::NIL;
        slot.payload = T::zeroed();
        Handle::new(index, slot.generation)
    }

    /// Whether `h` refers to a currently alive entity.
    ///
    /// Valid means: index in `[1, capacity]`, slot alive, and the slot's
    /// generation equals the handle's. [`Handle::NIL`] is never valid, and
    /// no later operation can revalidate a handle once this returns `false`.
    pub fn is_valid(&self, h: Handle) -> bool {
        let index = h.index() as usize;
        if index == 0 || index >= self.slots.len() {
            return false;
        }
        let slot = &self.slots[index];
        slot.alive && slot.generation == h.generation()
    }

    /// Shared access to the payload behind `h`, or `None` if `h` is stale.
    pub fn get(&self, h: Handle) -> Option<&T> {
        if self.is_valid(h) {
            Some(&self.slots[h.index() as usize].payload)
        } else {
            None
        }
    }

    /// Mutable access to the payload behind `h`, or `None` if `h` is stale.
    pub fn get_mut(&mut self, h: Handle) -> Option<&mut T> {
        if self.is_valid(h) {
            Some(&mut self.slots[h.index() as usize].payload)
        } else {
            None
        }
    }

    /// Destroy `h` and, depth-first, every transitive descendant.
    ///
    /// The entity is unlinked from its parent's child list first, then the
    /// whole subtree is freed. Freed slots keep their generation until the
    /// next spawn bumps it, so every outstanding handle into the subtree
    /// fails [`is_valid`](Pool::is_valid) from here on.
    ///
    /// Destroying an invalid (already destroyed, stale, or nil) handle is a
    /// silent no-op.
    pub fn destroy(&mut self, h: Handle) {
        if !self.is_valid(h) {
            return;
        }
        self.detach(h);
        self.free_subtree(h);
    }

    /// Make `child` the newest child of `parent`.
    ///
    /// The child is detached from any previous parent, then spliced at the
    /// head of `parent`'s child list in O(1). No-op if either handle is
    /// invalid or the attachment would create a cycle (attaching an entity
    /// under itself or one of its own descendants).
    pub fn attach_child(&mut self, parent: Handle, child: Handle) {
        if !self.is_valid(parent) || !self.is_valid(child) {
            return;
        }
        if self.would_cycle(parent, child) {
            return;
        }
        self.detach(child);
        let parent_index = parent.index() as usize;
        let child_index = child.index() as usize;
        self.slots[child_index].parent = parent;
        self.slots[child_index].next_sibling = self.slots[parent_index].first_child;
        self.slots[parent_index].first_child = child;
    }

    /// Remove `child` from its parent's child list.
    ///
    /// The child stays alive; only the hierarchy edge goes away. No-op when
    /// `child` is invalid or already parentless. Costs O(length of the
    /// sibling list).
    pub fn detach(&mut self, child: Handle) {
        if !self.is_valid(child) {
            return;
        }
        let child_index = child.index() as usize;
        let parent = self.slots[child_index].parent;
        if parent.is_nil() {
            return;
        }
        let after = self.slots[child_index].next_sibling;
        let parent_index = parent.index() as usize;
        if self.slots[parent_index].first_child == child {
            self.slots[parent_index].first_child = after;
        } else {
            let mut cursor = self.slots[parent_index].first_child;
            while !cursor.is_nil() {
                let cursor_index = cursor.index() as usize;
                if self.slots[cursor_index].next_sibling == child {
                    self.slots[cursor_index].next_sibling = after;
                    break;
                }
                cursor = self.slots[cursor_index].next_sibling;
            }
        }
        self.slots[child_index].parent = Handle::NIL;
        self.slots[child_index].next_sibling = Handle::NIL;
    }

    /// The parent of `h`, or [`Handle::NIL`] when `h` is invalid or a root.
    pub fn parent_of(&self, h: Handle) -> Handle {
        if self.is_valid(h) {
            self.slots[h.index() as usize].parent
        } else {
            Handle::NIL
        }
    }

    /// Whether making `child` a child of `parent` would close a cycle,
    /// i.e. `child` is `parent` itself or one of `parent`'s ancestors.
    fn would_cycle(&self, parent: Handle, child: Handle) -> bool {
        let mut cursor = parent;
        while !cursor.is_nil() {
            if cursor == child {
                return true;
            }
            cursor = self.slots[cursor.index() as usize].parent;
        }
        false
    }

    /// Free `root` and every transitive descendant, exactly once each.
    ///
    /// `root` must be valid and already detached from its parent. Uses an
    /// explicit stack so teardown depth is bounded by pool capacity, not by
    /// the call stack.
    fn free_subtree(&mut self, root: Handle) {
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            let index = current.index() as usize;
            let mut child = self.slots[index].first_child;
            while !child.is_nil() {
                stack.push(child);
                child = self.slots[child.index() as usize].next_sibling;
            }
            let slot = &mut self.slots[index];
            slot.alive = false;
            slot.parent = Handle::NIL;
            slot.first_child = Handle::NIL;
            slot.next_sibling = Handle::NIL;
            self.free.push(current.index());
        }
    }
}

impl<T: Pod> Default for Pool<T> {
    /// An empty zero-capacity pool; every spawn returns [`Handle::NIL`].
    fn default() -> Self {
        Self::new(0)
    }
}
