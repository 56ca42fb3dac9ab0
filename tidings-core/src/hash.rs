//! Identity hashing.
//!
//! Event-type names are turned into compact integer keys with the 32-bit
//! Murmur3 hash (one-shot, non-incremental). The function is pure: the same
//! bytes and seed always produce the same key, within a process and across
//! runs.
//!
//! Distinct names may collide. Nothing in the dispatcher detects collisions;
//! two colliding names share handlers.

/// Seed used for every event-type name hashed by the dispatcher.
///
/// Changing this value changes every [`EventKey`](crate::EventKey) derived
/// from a name, so it is fixed for the lifetime of the crate.
pub const DEFAULT_SEED: u32 = 0x9747_b28c;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Computes the 32-bit Murmur3 hash of `bytes` with the given `seed`.
///
/// Callers hashing event-type names should use [`DEFAULT_SEED`] (or simply
/// [`EventKey::from_name`](crate::EventKey::from_name)); other seeds are for
/// unrelated uses of the primitive.
///
/// # Example
///
/// ```rust
/// use tidings_core::hash::murmur3_32;
///
/// assert_eq!(murmur3_32(b"", 0), 0);
/// assert_eq!(murmur3_32(b"test", 0), 0xba6b_d213);
/// ```
pub fn murmur3_32(bytes: &[u8], seed: u32) -> u32 {
    let mut hash = seed;

    let mut blocks = bytes.chunks_exact(4);
    for block in blocks.by_ref() {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        hash ^= mix_block(k);
        hash = hash.rotate_left(13);
        hash = hash.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    // The tail is mixed in but skips the per-block `* 5 + c` step.
    let tail = blocks.remainder();
    if !tail.is_empty() {
        let k = tail
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &b)| acc ^ (u32::from(b) << (8 * i)));
        hash ^= mix_block(k);
    }

    // Murmur3 folds in only the low 32 bits of the length.
    hash ^= bytes.len() as u32;
    fmix(hash)
}

#[inline]
fn mix_block(mut k: u32) -> u32 {
    k = k.wrapping_mul(C1);
    k = k.rotate_left(15);
    k.wrapping_mul(C2)
}

#[inline]
fn fmix(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}
