//! Snapshot loading.
//!
//! Loading is transactional. The file is read whole into a staging buffer,
//! decoded into a staging [`Pool`], and validated against the target pool's
//! capacity and payload size. Only then does [`Pool::restore_from`] commit
//! the new state and clear the deferred-destroy queue. Queued handles refer
//! to pre-load entities that may not exist in the incoming image, so
//! carrying them across would be a correctness hazard.
//!
//! On any failure the target pool (alive set, payloads, free stack, and
//! deferred queue) is exactly as it was on entry.

use std::fs;
use std::path::Path;

use warren_core::Pod;
use warren_pool::Pool;

use crate::codec::decode_pool;
use crate::error::SnapshotError;

/// Decode a snapshot from `bytes` and install it into `pool`.
///
/// The image must match the pool's capacity and payload size exactly and
/// must account for every byte of `bytes`. On success the pool's deferred
/// queue is cleared; on failure the pool is untouched.
pub fn load<T: Pod>(pool: &mut Pool<T>, bytes: &[u8]) -> Result<(), SnapshotError> {
    let mut cursor = bytes;
    let staged = decode_pool(&mut cursor, pool.capacity() as u32)?;
    if !cursor.is_empty() {
        return Err(SnapshotError::TrailingBytes {
            count: cursor.len(),
        });
    }
    pool.restore_from(staged);
    Ok(())
}

/// Read a snapshot from `path` and install it into `pool`.
///
/// The file handle is held only while the staging buffer is filled.
/// Failures are reported to the host's diagnostic sink via `tracing`
/// before being returned; the pool is untouched on every failure path.
pub fn load_from_file<T: Pod>(
    pool: &mut Pool<T>,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    match read_file(pool, path) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to load pool snapshot; pool left unchanged"
            );
            Err(e)
        }
    }
}

fn read_file<T: Pod>(pool: &mut Pool<T>, path: &Path) -> Result<(), SnapshotError> {
    let bytes = fs::read(path)?;
    load(pool, &bytes)
}
