//! Shared fixtures: identities derived from public keys, tracing setup.

use std::sync::{Arc, Once};

use rand::Rng;
use sha2::{Digest, Sha256};
use skad_table::PeerId;
use tracing_subscriber::EnvFilter;

/// SHA-256 digest length
pub const CHECKSUM_LEN: usize = 32;

static TRACING: Once = Once::new();

/// Install a test subscriber once; honours `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Identity whose checksum is SHA-256 of a fresh random 32-byte public key.
pub fn random_identity(port: u16) -> Arc<PeerId> {
    let public_key: [u8; 32] = rand::thread_rng().gen();
    identity_from_key(&public_key, port)
}

/// Identity derived from a given public key.
pub fn identity_from_key(public_key: &[u8], port: u16) -> Arc<PeerId> {
    let checksum = Sha256::digest(public_key);
    Arc::new(PeerId::new(
        format!("127.0.0.1:{}", port),
        public_key.to_vec(),
        checksum.to_vec(),
    ))
}

/// `count` distinct random identities.
pub fn random_identities(count: usize) -> Vec<Arc<PeerId>> {
    (0..count)
        .map(|i| random_identity(20_000 + (i % 40_000) as u16))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skad_table::Identity;

    #[test]
    fn test_identity_checksum_is_sha256_of_key() {
        let a = identity_from_key(b"key-a", 1);
        let b = identity_from_key(b"key-a", 2);
        let c = identity_from_key(b"key-c", 1);

        assert_eq!(a.checksum().len(), CHECKSUM_LEN);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
