//! Core Domain Entities for the Routing Table
//!
//! The table never creates or mutates identities. It stores `Arc` handles
//! supplied by the caller and compares them by checksum.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A peer identity as seen by the routing table.
///
/// The only attribute the table relies on is the checksum: a fixed-length
/// digest that acts as the identity's primary key. Two identities with the
/// same checksum are the same peer as far as the table is concerned.
///
/// Implementors must return a checksum whose length matches the table's
/// configured `digest_len` and that never changes for the lifetime of the
/// value.
pub trait Identity: Send + Sync {
    /// The identity's digest.
    fn checksum(&self) -> &[u8];

    /// Checksum equality, usable across any two identities.
    #[inline]
    fn same_checksum(&self, checksum: &[u8]) -> bool {
        checksums_equal(self.checksum(), checksum)
    }
}

/// Constant-time checksum comparison.
///
/// Accumulates the XOR of every byte pair so the comparison time does not
/// depend on where two checksums first differ.
#[inline]
pub fn checksums_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Concrete peer identity shipped with the crate.
///
/// Carries the peer's dialable address and public key alongside the
/// checksum, but only the checksum takes part in equality and hashing.
#[derive(Clone)]
pub struct PeerId {
    /// Network address the peer can be reached at (opaque to the table).
    pub address: String,
    /// Raw public key bytes the checksum was derived from.
    pub public_key: Vec<u8>,
    checksum: Box<[u8]>,
}

impl PeerId {
    /// Create a peer identity from an address, public key and precomputed checksum.
    pub fn new(
        address: impl Into<String>,
        public_key: Vec<u8>,
        checksum: impl Into<Box<[u8]>>,
    ) -> Self {
        Self {
            address: address.into(),
            public_key,
            checksum: checksum.into(),
        }
    }

    /// Create an identity that only carries a checksum.
    pub fn from_checksum(checksum: impl Into<Box<[u8]>>) -> Self {
        Self::new(String::new(), Vec::new(), checksum)
    }

    /// Hex rendering of the checksum.
    pub fn checksum_hex(&self) -> String {
        hex::encode(&self.checksum)
    }
}

impl Identity for PeerId {
    #[inline]
    fn checksum(&self) -> &[u8] {
        &self.checksum
    }
}

impl PartialEq for PeerId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        checksums_equal(&self.checksum, &other.checksum)
    }
}

impl Eq for PeerId {}

impl Hash for PeerId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerId")
            .field("address", &self.address)
            .field("checksum", &self.checksum_hex())
            .finish()
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.checksum_hex();
        let short = &hex[..hex.len().min(16)];
        if self.address.is_empty() {
            write!(f, "{}", short)
        } else {
            write!(f, "{}@{}", short, self.address)
        }
    }
}
