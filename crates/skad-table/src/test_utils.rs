//! Test utilities for building identities that land in a chosen bucket.
//!
//! Available with the `test-utils` feature and in this crate's own tests.

use std::sync::Arc;

use rand::Rng;

use crate::domain::PeerId;

/// Deterministic checksum that maps to `bucket` relative to `local`.
///
/// Copies `local`, flips the bit at position `bucket` (counted from the most
/// significant bit) and then flips the trailing bits selected by `salt`, so
/// distinct salts give distinct checksums as long as they fit in the
/// `8 * local.len() - bucket - 1` free bits.
///
/// # Panics
/// If `bucket` is not below `8 * local.len()`.
pub fn checksum_in_bucket(local: &[u8], bucket: usize, salt: u64) -> Vec<u8> {
    let total_bits = local.len() * 8;
    assert!(bucket < total_bits, "bucket must be < {}", total_bits);

    let mut out = local.to_vec();
    flip_bit(&mut out, bucket);

    let free_bits = total_bits - bucket - 1;
    for j in 0..free_bits.min(64) {
        if (salt >> j) & 1 == 1 {
            flip_bit(&mut out, total_bits - 1 - j);
        }
    }
    out
}

/// Random checksum that maps to `bucket` relative to `local`.
///
/// # Panics
/// If `bucket` is not below `8 * local.len()`.
pub fn random_checksum_in_bucket(local: &[u8], bucket: usize) -> Vec<u8> {
    let total_bits = local.len() * 8;
    assert!(bucket < total_bits, "bucket must be < {}", total_bits);

    let mut rng = rand::thread_rng();
    let mut out = local.to_vec();
    flip_bit(&mut out, bucket);

    for pos in (bucket + 1)..total_bits {
        if rng.gen::<bool>() {
            flip_bit(&mut out, pos);
        }
    }
    out
}

/// Uniformly random checksum of `len` bytes.
pub fn random_checksum(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Peer whose checksum lands in `bucket` relative to `local`.
pub fn peer_in_bucket(local: &PeerId, bucket: usize, salt: u64) -> Arc<PeerId> {
    use crate::domain::Identity;

    let checksum = checksum_in_bucket(local.checksum(), bucket, salt);
    Arc::new(PeerId::new(
        format!("127.0.0.1:{}", 10_000 + (salt % 50_000)),
        Vec::new(),
        checksum,
    ))
}

fn flip_bit(bytes: &mut [u8], pos: usize) {
    bytes[pos / 8] ^= 0x80 >> (pos % 8);
}
