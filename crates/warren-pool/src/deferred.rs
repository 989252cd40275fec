//! The deferred-destroy queue.
//!
//! Simulation frames often discover entities to kill while iterating the
//! pool, exactly when structural mutation is forbidden. The queue lets the
//! frame record its intent cheaply and apply it later at a safe point via
//! [`flush_destroy_later`](Pool::flush_destroy_later).
//!
//! The queue is list-shaped, not set-shaped: it records call history,
//! duplicates included. No hashing, no dedup on insert; the generation
//! check at flush time makes duplicate and stale entries naturally inert.

use warren_core::{Handle, Pod};

use crate::pool::Pool;

impl<T: Pod> Pool<T> {
    /// Queue `h` for destruction at the next flush.
    ///
    /// Returns `false` iff the queue is full (it holds at most `capacity`
    /// entries); the queue is unchanged in that case. The handle is not
    /// validated here; stale handles are permitted and are filtered at
    /// flush time. Duplicates are queued and counted separately.
    pub fn destroy_later(&mut self, h: Handle) -> bool {
        if self.pending.len() >= self.capacity() {
            return false;
        }
        self.pending.push(h);
        true
    }

    /// Number of entries currently queued, duplicates included.
    pub fn pending_destroy_count(&self) -> usize {
        self.pending.len()
    }

    /// Queue every alive entity matching `predicate` for destruction.
    ///
    /// Visits alive slots in index order and appends each match, stopping
    /// early once the queue is full. Returns the number of entries actually
    /// appended. The predicate sees the payload read-only; no structure is
    /// mutated until flush.
    pub fn queue_destroy_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(Handle, &T) -> bool,
    {
        let capacity = self.capacity();
        let mut appended = 0;
        for index in 1..self.slots.len() {
            let slot = &self.slots[index];
            if !slot.alive {
                continue;
            }
            let h = Handle::new(index as u32, slot.generation);
            if predicate(h, &slot.payload) {
                if self.pending.len() >= capacity {
                    break;
                }
                self.pending.push(h);
                appended += 1;
            }
        }
        appended
    }

    /// Drain the queue in insertion order, destroying what is still valid.
    ///
    /// Each still-valid handle goes through the synchronous recursive
    /// [`destroy`](Pool::destroy); invalid entries (stale, duplicate, or
    /// made stale by an earlier entry in the same flush) are skipped. The
    /// return value counts handles actually destroyed, not entries
    /// dequeued. The queue is empty afterwards either way.
    pub fn flush_destroy_later(&mut self) -> usize {
        let queued = std::mem::take(&mut self.pending);
        let mut destroyed = 0;
        for h in queued {
            if self.is_valid(h) {
                self.destroy(h);
                destroyed += 1;
            }
        }
        destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_destroys_queued_and_reports_count() {
        let mut pool: Pool<u32> = Pool::new(8);
        let a = pool.spawn();
        let b = pool.spawn();
        let c = pool.spawn();

        assert!(pool.destroy_later(a));
        assert!(pool.destroy_later(c));
        assert_eq!(pool.pending_destroy_count(), 2);

        assert_eq!(pool.flush_destroy_later(), 2);
        assert_eq!(pool.pending_destroy_count(), 0);
        assert!(!pool.is_valid(a));
        assert!(pool.is_valid(b));
        assert!(!pool.is_valid(c));
    }

    #[test]
    fn duplicates_are_queued_but_destroy_once() {
        let mut pool: Pool<u32> = Pool::new(8);
        let a = pool.spawn();

        assert!(pool.destroy_later(a));
        assert!(pool.destroy_later(a));
        assert_eq!(pool.pending_destroy_count(), 2);

        assert_eq!(pool.flush_destroy_later(), 1);
        assert!(!pool.is_valid(a));
    }

    #[test]
    fn stale_entry_cannot_destroy_replacement() {
        let mut pool: Pool<u32> = Pool::new(8);
        let old = pool.spawn();
        assert!(pool.destroy_later(old));
        pool.destroy(old);
        let replacement = pool.spawn();
        assert_eq!(replacement.index(), old.index());

        assert_eq!(pool.flush_destroy_later(), 0);
        assert!(pool.is_valid(replacement));
    }

    #[test]
    fn full_queue_rejects_without_mutating() {
        let mut pool: Pool<u32> = Pool::new(4);
        let a = pool.spawn();
        let b = pool.spawn();
        let c = pool.spawn();
        assert!(pool.destroy_later(a));
        assert!(pool.destroy_later(b));
        assert!(pool.destroy_later(c));
        assert!(pool.destroy_later(a));
        assert_eq!(pool.pending_destroy_count(), 4);

        assert!(!pool.destroy_later(Handle::new(1, 1)));
        assert_eq!(pool.pending_destroy_count(), 4);

        assert_eq!(pool.flush_destroy_later(), 3);
        assert_eq!(pool.pending_destroy_count(), 0);
    }

    #[test]
    fn queued_parent_flush_destroys_subtree_counting_one() {
        let mut pool: Pool<u32> = Pool::new(16);
        let root = pool.spawn();
        let child = pool.spawn();
        let grandchild = pool.spawn();
        pool.attach_child(root, child);
        pool.attach_child(child, grandchild);

        assert!(pool.destroy_later(root));
        assert_eq!(pool.flush_destroy_later(), 1);

        assert!(!pool.is_valid(root));
        assert!(!pool.is_valid(child));
        assert!(!pool.is_valid(grandchild));
    }

    #[test]
    fn queued_descendant_after_ancestor_is_skipped() {
        let mut pool: Pool<u32> = Pool::new(16);
        let root = pool.spawn();
        let child = pool.spawn();
        pool.attach_child(root, child);

        assert!(pool.destroy_later(root));
        assert!(pool.destroy_later(child));
        // The root entry tears the child down first, so the child entry
        // finds a stale handle.
        assert_eq!(pool.flush_destroy_later(), 1);
    }

    #[test]
    fn queue_destroy_if_matches_alive_slots_in_index_order() {
        let mut pool: Pool<u32> = Pool::new(8);
        let a = pool.spawn();
        let b = pool.spawn();
        let c = pool.spawn();
        *pool.get_mut(a).unwrap() = 10;
        *pool.get_mut(b).unwrap() = 99;
        *pool.get_mut(c).unwrap() = 12;

        let appended = pool.queue_destroy_if(|_, value| *value < 50);
        assert_eq!(appended, 2);
        assert_eq!(pool.pending_destroy_count(), 2);

        assert_eq!(pool.flush_destroy_later(), 2);
        assert!(!pool.is_valid(a));
        assert!(pool.is_valid(b));
        assert!(!pool.is_valid(c));
    }

    #[test]
    fn queue_destroy_if_respects_queue_capacity() {
        let mut pool: Pool<u32> = Pool::new(4);
        for _ in 0..4 {
            let _ = pool.spawn();
        }
        // Fill half the queue by hand, then ask for everything.
        let first = Handle::new(1, 1);
        assert!(pool.destroy_later(first));
        assert!(pool.destroy_later(first));
        let appended = pool.queue_destroy_if(|_, _| true);
        assert_eq!(appended, 2);
        assert_eq!(pool.pending_destroy_count(), 4);
    }

    #[test]
    fn flush_on_empty_queue_is_zero() {
        let mut pool: Pool<u32> = Pool::new(4);
        pool.spawn();
        assert_eq!(pool.flush_destroy_later(), 0);
        assert_eq!(pool.len(), 1);
    }
}
