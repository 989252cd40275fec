//! Raw image access for the snapshot codec.
//!
//! The codec lives in its own crate and works through this surface: it reads
//! the slot array and free stack verbatim on save, and on load it decodes
//! into a *staging* pool via [`Pool::from_raw_parts`], which revalidates the
//! structural invariants, before committing with [`Pool::restore_from`].
//! Nothing here mutates a live pool until that final commit, which is what
//! makes loading transactional.

use warren_core::Pod;

use crate::error::ImageError;
use crate::pool::Pool;
use crate::slot::Slot;

impl<T: Pod> Pool<T> {
    /// The full slot array, sentinel included, in index order.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// The free stack contents, bottom-up.
    pub fn free_indices(&self) -> &[u32] {
        &self.free
    }

    /// Rebuild a pool from a decoded slot array and free stack.
    ///
    /// Validates the structural invariants a well-formed pool guarantees:
    /// the sentinel is in its reserved state, free indices are in-range and
    /// duplicate-free, and a slot is alive exactly when its index is absent
    /// from the free stack. The hierarchy links are taken on trust; they
    /// were written by a pool that upheld them.
    ///
    /// The rebuilt pool starts with an empty deferred-destroy queue.
    pub fn from_raw_parts(slots: Vec<Slot<T>>, free: Vec<u32>) -> Result<Self, ImageError> {
        let Some(sentinel) = slots.first() else {
            return Err(ImageError::MissingSentinel);
        };
        let capacity = slots.len() - 1;
        if sentinel.alive
            || sentinel.generation != 0
            || !sentinel.parent.is_nil()
            || !sentinel.first_child.is_nil()
            || !sentinel.next_sibling.is_nil()
        {
            return Err(ImageError::CorruptSentinel);
        }
        if free.len() > capacity {
            return Err(ImageError::FreeStackOverflow {
                len: free.len(),
                capacity,
            });
        }

        let mut listed = vec![false; slots.len()];
        for &index in &free {
            let i = index as usize;
            if i == 0 || i > capacity {
                return Err(ImageError::FreeIndexOutOfRange { index, capacity });
            }
            if listed[i] {
                return Err(ImageError::DuplicateFreeIndex { index });
            }
            listed[i] = true;
            if slots[i].alive {
                return Err(ImageError::FreeSlotAlive { index });
            }
        }
        for (i, slot) in slots.iter().enumerate().skip(1) {
            if !slot.alive && !listed[i] {
                return Err(ImageError::UnlistedDeadSlot { index: i as u32 });
            }
        }

        Ok(Self {
            slots,
            free,
            pending: Vec::new(),
        })
    }

    /// Replace this pool's storage with a staged pool's, wholesale.
    ///
    /// The commit point of a transactional load: the slot array and free
    /// stack are taken from `staged`, and this pool's deferred-destroy
    /// queue is cleared: queued handles referred to the pre-load world and
    /// must not fire against the restored one.
    pub fn restore_from(&mut self, staged: Pool<T>) {
        self.slots = staged.slots;
        self.free = staged.free;
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts_of(pool: &Pool<u32>) -> (Vec<Slot<u32>>, Vec<u32>) {
        (pool.slots().to_vec(), pool.free_indices().to_vec())
    }

    #[test]
    fn round_trip_through_raw_parts() {
        let mut pool: Pool<u32> = Pool::new(4);
        let a = pool.spawn();
        let b = pool.spawn();
        *pool.get_mut(a).unwrap() = 11;
        *pool.get_mut(b).unwrap() = 22;
        pool.destroy(a);

        let (slots, free) = parts_of(&pool);
        let rebuilt = Pool::from_raw_parts(slots, free).unwrap();
        assert_eq!(rebuilt, pool);
        assert!(!rebuilt.is_valid(a));
        assert_eq!(*rebuilt.get(b).unwrap(), 22);
    }

    #[test]
    fn empty_slot_array_is_rejected() {
        let err = Pool::<u32>::from_raw_parts(Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, ImageError::MissingSentinel);
    }

    #[test]
    fn alive_sentinel_is_rejected() {
        let pool: Pool<u32> = Pool::new(2);
        let (mut slots, free) = parts_of(&pool);
        slots[0].alive = true;
        let err = Pool::from_raw_parts(slots, free).unwrap_err();
        assert_eq!(err, ImageError::CorruptSentinel);
    }

    #[test]
    fn out_of_range_free_index_is_rejected() {
        let pool: Pool<u32> = Pool::new(2);
        let (slots, mut free) = parts_of(&pool);
        free[0] = 9;
        let err = Pool::from_raw_parts(slots, free).unwrap_err();
        assert_eq!(
            err,
            ImageError::FreeIndexOutOfRange {
                index: 9,
                capacity: 2
            }
        );
    }

    #[test]
    fn duplicate_free_index_is_rejected() {
        let pool: Pool<u32> = Pool::new(2);
        let (slots, mut free) = parts_of(&pool);
        free[0] = free[1];
        let dup_index = free[1];
        let err = Pool::from_raw_parts(slots, free).unwrap_err();
        assert_eq!(err, ImageError::DuplicateFreeIndex { index: dup_index });
    }

    #[test]
    fn free_alive_conflicts_are_rejected() {
        let mut pool: Pool<u32> = Pool::new(2);
        let a = pool.spawn();

        // Alive slot listed as free.
        let (slots, mut free) = parts_of(&pool);
        free.push(a.index());
        let err = Pool::from_raw_parts(slots, free).unwrap_err();
        assert_eq!(err, ImageError::FreeSlotAlive { index: a.index() });

        // Dead slot missing from the free stack.
        let (mut slots, free) = parts_of(&pool);
        slots[a.index() as usize].alive = false;
        let err = Pool::from_raw_parts(slots, free).unwrap_err();
        assert_eq!(err, ImageError::UnlistedDeadSlot { index: a.index() });
    }

    #[test]
    fn restore_from_swaps_state_and_clears_queue() {
        let mut source: Pool<u32> = Pool::new(4);
        let kept = source.spawn();
        *source.get_mut(kept).unwrap() = 777;
        let (slots, free) = parts_of(&source);
        let staged = Pool::from_raw_parts(slots, free).unwrap();

        let mut target: Pool<u32> = Pool::new(4);
        let doomed = target.spawn();
        assert!(target.destroy_later(doomed));
        assert_eq!(target.pending_destroy_count(), 1);

        target.restore_from(staged);

        assert_eq!(target.pending_destroy_count(), 0);
        assert_eq!(target.flush_destroy_later(), 0);
        assert!(target.is_valid(kept));
        assert_eq!(*target.get(kept).unwrap(), 777);
        assert_eq!(target, source);
    }

    #[test]
    fn rejected_parts_never_touch_an_existing_pool() {
        let mut pool: Pool<u32> = Pool::new(2);
        let h = pool.spawn();
        let before = pool.clone();

        let (mut slots, free) = parts_of(&pool);
        slots[0].generation = 5;
        assert!(Pool::from_raw_parts(slots, free).is_err());

        assert_eq!(pool, before);
        assert!(pool.is_valid(h));
    }
}
