//! Snapshot saving.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use warren_core::Pod;
use warren_pool::Pool;

use crate::codec::encode_pool;
use crate::error::SnapshotError;

/// Encode `pool` to any `Write` sink.
///
/// Tests write to a `Vec<u8>`; [`save_to_file`] layers a
/// `BufWriter<File>` on top.
///
/// # Examples
///
/// ```
/// use warren_pool::Pool;
///
/// let mut pool: Pool<u32> = Pool::new(8);
/// let h = pool.spawn();
/// *pool.get_mut(h).unwrap() = 1234;
///
/// let mut buf: Vec<u8> = Vec::new();
/// warren_snapshot::save(&pool, &mut buf).unwrap();
///
/// let mut restored: Pool<u32> = Pool::new(8);
/// warren_snapshot::load(&mut restored, &buf).unwrap();
/// assert_eq!(*restored.get(h).unwrap(), 1234);
/// ```
pub fn save<T: Pod>(pool: &Pool<T>, w: &mut dyn Write) -> Result<(), SnapshotError> {
    encode_pool(w, pool)
}

/// Write a snapshot of `pool` to `path`, replacing any existing file.
///
/// The file handle is held only for the duration of the call and released
/// on every exit path. Failures are reported to the host's diagnostic sink
/// via `tracing` before being returned.
pub fn save_to_file<T: Pod>(pool: &Pool<T>, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    match write_file(pool, path) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to save pool snapshot");
            Err(e)
        }
    }
}

fn write_file<T: Pod>(pool: &Pool<T>, path: &Path) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    save(pool, &mut writer)?;
    writer.flush()?;
    Ok(())
}
