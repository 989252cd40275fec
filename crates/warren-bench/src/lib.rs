//! Benchmark support for Warren.
//!
//! The crate itself only hosts shared setup helpers; the measurements live
//! in `benches/pool_ops.rs`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use warren_core::Handle;
use warren_pool::Pool;
use warren_test_utils::{kind, Critter};

/// Build a pool of `capacity` critters, half enemies and half projectiles,
/// each projectile targeting the enemy spawned just before it.
pub fn combat_pool(capacity: usize) -> Pool<Critter> {
    let mut pool: Pool<Critter> = Pool::new(capacity);
    let mut last_enemy = Handle::NIL;
    for i in 0..capacity {
        let h = pool.spawn();
        if i % 2 == 0 {
            *pool.get_mut(h).unwrap() = Critter::with_health(kind::ENEMY, 100);
            last_enemy = h;
        } else {
            *pool.get_mut(h).unwrap() = Critter::projectile_at(last_enemy);
        }
    }
    pool
}

/// Build a full pool whose entities form one wide tree under a single root.
pub fn tree_pool(capacity: usize) -> (Pool<Critter>, Handle) {
    let mut pool: Pool<Critter> = Pool::new(capacity);
    let root = pool.spawn();
    for _ in 1..capacity {
        let child = pool.spawn();
        pool.attach_child(root, child);
    }
    (pool, root)
}
