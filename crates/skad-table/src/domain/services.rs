//! Domain Services - Pure functions for the XOR metric
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic (same inputs → same outputs).

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::Identity;

/// Byte-wise XOR of two digests.
///
/// Digests are expected to have equal length; if they do not, only the
/// common prefix is combined.
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert_eq!(a.len(), b.len(), "digest length mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Number of leading zero bits in `distance`.
///
/// Equals the number of leading bits the two XORed digests share. An
/// all-zero distance (identical digests) maps to `8 * len - 1`, the last
/// bucket, which is where the table anchors its own identity.
pub fn prefix_len(distance: &[u8]) -> usize {
    for (i, byte) in distance.iter().enumerate() {
        if *byte != 0 {
            return i * 8 + byte.leading_zeros() as usize;
        }
    }
    (distance.len() * 8).saturating_sub(1)
}

/// Bucket index of `target` relative to `local`.
///
/// Higher indices hold peers sharing a longer prefix with `local`.
#[inline]
pub fn bucket_index(local: &[u8], target: &[u8]) -> usize {
    prefix_len(&xor(local, target))
}

/// Compare the XOR distances of `a` and `b` to `target`.
///
/// Distances are compared as unsigned big-endian integers, so the first
/// differing byte decides.
pub fn cmp_distance(a: &[u8], b: &[u8], target: &[u8]) -> Ordering {
    for ((x, y), t) in a.iter().zip(b.iter()).zip(target.iter()) {
        match (x ^ t).cmp(&(y ^ t)) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Sort identities by XOR distance to `target` (closest first).
///
/// The sort is stable: identities at equal distance keep their input order.
pub fn sort_by_distance<I: Identity>(peers: &mut [Arc<I>], target: &[u8]) {
    peers.sort_by_cached_key(|peer| xor(peer.checksum(), target));
}
