//! # Domain Errors
//!
//! Error types for the routing table.

use thiserror::Error;

/// Errors returned by routing table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The destination bucket already holds `bucket_size` distinct peers and
    /// the target is not one of them. Nothing was changed; the caller may
    /// probe the bucket's least-recently-seen peer, evict it and retry.
    #[error("bucket {bucket} is full")]
    BucketFull {
        /// Index of the saturated bucket
        bucket: usize,
    },

    /// Table configuration rejected at construction.
    #[error("invalid table configuration: {0}")]
    InvalidConfig(String),

    /// The local identity's checksum does not match the configured digest length.
    #[error("checksum length mismatch: expected {expected} bytes, got {got}")]
    ChecksumLength {
        /// Configured digest length
        expected: usize,
        /// Length actually supplied
        got: usize,
    },
}

impl TableError {
    /// Whether the caller can recover by evicting and retrying.
    pub fn is_bucket_full(&self) -> bool {
        matches!(self, Self::BucketFull { .. })
    }
}
