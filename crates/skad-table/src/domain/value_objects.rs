//! Value Objects for the Routing Table

use crate::domain::TableError;

/// Digest length of a BLAKE2b-256 checksum, the default identity digest.
pub const DEFAULT_DIGEST_LEN: usize = 32;

/// Default k-bucket capacity.
pub const DEFAULT_BUCKET_SIZE: usize = 16;

/// Construction parameters for a [`RoutingTable`](crate::RoutingTable).
///
/// The bucket count is derived from `digest_len`: one bucket per possible
/// shared-prefix length, `8 * digest_len` in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Length in bytes of every identity checksum (default: 32)
    pub digest_len: usize,
    /// Maximum peers per bucket (default: 16)
    pub bucket_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            digest_len: DEFAULT_DIGEST_LEN,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl TableConfig {
    /// Create a config with explicit parameters.
    pub fn new(digest_len: usize, bucket_size: usize) -> Self {
        Self {
            digest_len,
            bucket_size,
        }
    }

    /// Create a config suitable for testing (small buckets fill quickly)
    pub fn for_testing() -> Self {
        Self {
            digest_len: DEFAULT_DIGEST_LEN,
            bucket_size: 4,
        }
    }

    /// Number of buckets a table built from this config holds.
    pub fn num_buckets(&self) -> usize {
        self.digest_len * 8
    }

    /// Reject configurations that cannot back a table.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.digest_len == 0 {
            return Err(TableError::InvalidConfig(
                "digest_len must be at least 1".to_string(),
            ));
        }
        if self.bucket_size == 0 {
            return Err(TableError::InvalidConfig(
                "bucket_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of a successful [`RoutingTable::update`](crate::RoutingTable::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No target was given; nothing happened.
    Ignored,
    /// The peer was already known and moved to the front of its bucket.
    Refreshed,
    /// The peer was new and inserted at the front of its bucket.
    Inserted,
}
