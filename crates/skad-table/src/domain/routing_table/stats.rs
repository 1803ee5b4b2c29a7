//! Routing table statistics.

/// Point-in-time statistics about the routing table.
///
/// Buckets are counted one at a time, so under concurrent updates the
/// figures are per-bucket consistent but not a table-wide snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutingTableStats {
    /// Total number of peers across all buckets, local anchor included
    pub total_peers: usize,
    /// Number of buckets with at least one peer
    pub buckets_used: usize,
    /// Number of buckets at capacity
    pub full_buckets: usize,
    /// Number of buckets in the table
    pub num_buckets: usize,
    /// Capacity of each bucket
    pub bucket_size: usize,
}

impl RoutingTableStats {
    /// Upper bound on peers the table can hold
    pub fn max_peers(&self) -> usize {
        self.num_buckets * self.bucket_size
    }
}
