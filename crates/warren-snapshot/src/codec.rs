//! Binary encode/decode for the snapshot format.
//!
//! All integers are little-endian. The format is intentionally simple: no
//! compression, no alignment padding, no self-describing schema. Payload
//! bytes are written verbatim from slot storage and read back with
//! [`bytemuck::pod_read_unaligned`].

use std::io::{Read, Write};
use std::mem;

use bytemuck::{bytes_of, pod_read_unaligned};
use warren_core::{Handle, Pod};
use warren_pool::{ImageError, Pool, Slot};

use crate::error::SnapshotError;
use crate::MAGIC;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), SnapshotError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), SnapshotError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a handle as its `(index, generation)` pair.
pub fn write_handle(w: &mut dyn Write, h: Handle) -> Result<(), SnapshotError> {
    write_u32_le(w, h.index())?;
    write_u32_le(w, h.generation())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, SnapshotError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, SnapshotError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a handle from its `(index, generation)` pair.
pub fn read_handle(r: &mut dyn Read) -> Result<Handle, SnapshotError> {
    let index = read_u32_le(r)?;
    let generation = read_u32_le(r)?;
    Ok(Handle::new(index, generation))
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode the snapshot header (magic, capacity, payload size).
pub fn encode_header(
    w: &mut dyn Write,
    capacity: u32,
    payload_size: u32,
) -> Result<(), SnapshotError> {
    w.write_all(&MAGIC)?;
    write_u32_le(w, capacity)?;
    write_u32_le(w, payload_size)?;
    Ok(())
}

/// Decode the snapshot header, validating the magic bytes.
///
/// Returns `(capacity, payload_size)` on success.
pub fn decode_header(r: &mut dyn Read) -> Result<(u32, u32), SnapshotError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(SnapshotError::InvalidMagic);
    }
    let capacity = read_u32_le(r)?;
    let payload_size = read_u32_le(r)?;
    Ok((capacity, payload_size))
}

// ── Pool image encode/decode ────────────────────────────────────

/// Encode a complete pool image: header, free stack, slot array.
pub fn encode_pool<T: Pod>(w: &mut dyn Write, pool: &Pool<T>) -> Result<(), SnapshotError> {
    encode_header(w, pool.capacity() as u32, mem::size_of::<T>() as u32)?;

    write_u32_le(w, pool.free_indices().len() as u32)?;
    for &index in pool.free_indices() {
        write_u32_le(w, index)?;
    }

    for slot in pool.slots() {
        write_u32_le(w, slot.generation())?;
        write_u8(w, slot.is_alive() as u8)?;
        write_handle(w, slot.parent())?;
        write_handle(w, slot.first_child())?;
        write_handle(w, slot.next_sibling())?;
        w.write_all(bytes_of(slot.payload()))?;
    }

    Ok(())
}

/// Decode a complete pool image into a staging pool.
///
/// `expected_capacity` is the capacity of the pool the image is destined
/// for; the header must match it and the payload size must match `T`
/// exactly. The returned pool has been revalidated by
/// [`Pool::from_raw_parts`] and carries an empty deferred queue.
pub fn decode_pool<T: Pod>(
    r: &mut dyn Read,
    expected_capacity: u32,
) -> Result<Pool<T>, SnapshotError> {
    let (capacity, payload_size) = decode_header(r)?;
    if capacity != expected_capacity {
        return Err(SnapshotError::CapacityMismatch {
            expected: expected_capacity,
            found: capacity,
        });
    }
    let expected_payload = mem::size_of::<T>() as u32;
    if payload_size != expected_payload {
        return Err(SnapshotError::PayloadSizeMismatch {
            expected: expected_payload,
            found: payload_size,
        });
    }

    let free_len = read_u32_le(r)? as usize;
    // Bound the allocation before trusting the count.
    if free_len > capacity as usize {
        return Err(ImageError::FreeStackOverflow {
            len: free_len,
            capacity: capacity as usize,
        }
        .into());
    }
    let mut free = Vec::with_capacity(free_len);
    for _ in 0..free_len {
        free.push(read_u32_le(r)?);
    }

    let slot_count = capacity as usize + 1;
    let mut slots = Vec::with_capacity(slot_count);
    let mut payload_buf = vec![0u8; mem::size_of::<T>()];
    for index in 0..slot_count {
        let generation = read_u32_le(r)?;
        let alive = match read_u8(r)? {
            0 => false,
            1 => true,
            value => {
                return Err(SnapshotError::InvalidAliveFlag {
                    index: index as u32,
                    value,
                })
            }
        };
        let parent = read_handle(r)?;
        let first_child = read_handle(r)?;
        let next_sibling = read_handle(r)?;
        r.read_exact(&mut payload_buf)?;
        let payload = pod_read_unaligned(&payload_buf);
        slots.push(Slot::from_parts(
            generation,
            alive,
            parent,
            first_child,
            next_sibling,
            payload,
        ));
    }

    Ok(Pool::from_raw_parts(slots, free)?)
}
