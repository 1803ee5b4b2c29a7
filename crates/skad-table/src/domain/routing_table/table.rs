//! Main RoutingTable implementation.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{
    bucket_index, sort_by_distance, Identity, TableConfig, TableError, UpdateOutcome,
};

use super::bucket::{Bucket, Touch};
use super::stats::RoutingTableStats;

/// The S/Kademlia routing table.
///
/// Holds `8 * digest_len` buckets, one per possible shared-prefix length
/// with the local identity. A peer lives in exactly one bucket, the one at
/// `bucket_index(local, peer)`. The local identity itself is anchored in the
/// last bucket at construction.
///
/// There is no table-wide lock: every operation that targets one bucket only
/// takes that bucket's lock, so the table is shared between threads as
/// `Arc<RoutingTable<I>>` without further wrapping.
#[derive(Debug)]
pub struct RoutingTable<I> {
    /// Our own identity (immutable after creation)
    local: Arc<I>,
    /// One bucket per prefix length, `config.num_buckets()` in total
    buckets: Vec<Bucket<I>>,
    config: TableConfig,
}

impl<I: Identity> RoutingTable<I> {
    /// Create a new routing table anchored at `local`.
    ///
    /// # Errors
    /// - `InvalidConfig` if `config` fails validation
    /// - `ChecksumLength` if the local checksum is not `config.digest_len` bytes
    pub fn new(local: Arc<I>, config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;

        let got = local.checksum().len();
        if got != config.digest_len {
            return Err(TableError::ChecksumLength {
                expected: config.digest_len,
                got,
            });
        }

        let buckets: Vec<Bucket<I>> = (0..config.num_buckets())
            .map(|_| Bucket::new(config.bucket_size))
            .collect();

        if let Some(last) = buckets.last() {
            last.insert_front(Arc::clone(&local), buckets.len() - 1)?;
        }

        debug!(
            "[skad] Routing table created: {} buckets of {} for {}",
            buckets.len(),
            config.bucket_size,
            hex::encode(local.checksum())
        );

        Ok(Self {
            local,
            buckets,
            config,
        })
    }

    /// Create a table with the default bucket size, sized to the local checksum.
    pub fn with_defaults(local: Arc<I>) -> Result<Self, TableError> {
        let config = TableConfig {
            digest_len: local.checksum().len(),
            ..TableConfig::default()
        };
        Self::new(local, config)
    }

    /// Get our local identity
    pub fn local(&self) -> &Arc<I> {
        &self.local
    }

    /// Get the configuration
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of buckets (`8 * digest_len`)
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index a checksum maps to relative to the local identity.
    pub fn bucket_index_of(&self, checksum: &[u8]) -> usize {
        let last = self.buckets.len() - 1;
        bucket_index(self.local.checksum(), checksum).min(last)
    }

    /// Bucket at `idx`, if in range
    pub fn bucket(&self, idx: usize) -> Option<&Bucket<I>> {
        self.buckets.get(idx)
    }

    /// The bucket a checksum maps to
    pub fn bucket_for(&self, checksum: &[u8]) -> &Bucket<I> {
        &self.buckets[self.bucket_index_of(checksum)]
    }

    // =========================================================================
    // Bucket-level lookups
    // =========================================================================

    /// Find `target` in `bucket` by checksum.
    pub fn locate(&self, bucket: &Bucket<I>, target: &I) -> Option<Arc<I>> {
        bucket.locate(target.checksum())
    }

    /// Remove `target` from `bucket` by checksum.
    ///
    /// Returns whether an entry was actually removed.
    pub fn remove(&self, bucket: &Bucket<I>, target: &I) -> bool {
        let removed = bucket.remove(target.checksum());
        if removed {
            trace!(
                "[skad] Removed {} from bucket",
                hex::encode(target.checksum())
            );
        }
        removed
    }

    // =========================================================================
    // Table-level operations
    // =========================================================================

    /// Record that `target` has been seen.
    ///
    /// - `None` → `Ok(Ignored)`, nothing changes
    /// - already known → moved to the front of its bucket, `Ok(Refreshed)`
    /// - bucket has room → inserted at the front, `Ok(Inserted)`
    /// - bucket full → `Err(BucketFull)`, nothing changes
    ///
    /// The table never evicts on its own. On `BucketFull` the caller decides
    /// whether to probe [`least_recent_for`](Self::least_recent_for), remove
    /// it and retry.
    pub fn update(&self, target: Option<Arc<I>>) -> Result<UpdateOutcome, TableError> {
        let Some(target) = target else {
            return Ok(UpdateOutcome::Ignored);
        };

        let idx = self.bucket_index_of(target.checksum());

        match self.buckets[idx].touch_or_insert(Arc::clone(&target)) {
            Touch::Promoted => {
                trace!(
                    "[skad] Refreshed {} in bucket {}",
                    hex::encode(target.checksum()),
                    idx
                );
                Ok(UpdateOutcome::Refreshed)
            }
            Touch::Inserted => {
                trace!(
                    "[skad] Inserted {} into bucket {}",
                    hex::encode(target.checksum()),
                    idx
                );
                Ok(UpdateOutcome::Inserted)
            }
            Touch::Full => {
                debug!(
                    "[skad] Bucket {} full, rejected {}",
                    idx,
                    hex::encode(target.checksum())
                );
                Err(TableError::BucketFull { bucket: idx })
            }
        }
    }

    /// Remove `target` from whichever bucket it maps to.
    pub fn delete(&self, target: &I) -> bool {
        self.remove(self.bucket_for(target.checksum()), target)
    }

    /// Whether a peer with `target`'s checksum is in the table.
    pub fn contains(&self, target: &I) -> bool {
        self.get(target.checksum()).is_some()
    }

    /// Look a peer up by checksum.
    pub fn get(&self, checksum: &[u8]) -> Option<Arc<I>> {
        self.bucket_for(checksum).locate(checksum)
    }

    /// Least recently seen peer in the bucket `checksum` maps to.
    pub fn least_recent_for(&self, checksum: &[u8]) -> Option<Arc<I>> {
        self.bucket_for(checksum).least_recent()
    }

    /// Up to `k` peers ordered by XOR distance to `target`, closest first.
    ///
    /// A `None` target is treated as the all-zero checksum. Note that this
    /// also excludes a member whose checksum really is all zeros.
    pub fn find_closest(&self, target: Option<&I>, k: usize) -> Vec<Arc<I>> {
        match target {
            Some(target) => self.find_closest_to(target.checksum(), k),
            None => self.find_closest_to(&vec![0u8; self.config.digest_len], k),
        }
    }

    /// Up to `k` peers ordered by XOR distance to `checksum`, closest first.
    ///
    /// Peers whose checksum equals `checksum` are never returned.
    ///
    /// Starts from the bucket `checksum` maps to and widens one step at a
    /// time, taking bucket `idx - i` then `idx + i`, until at least `k`
    /// candidates are gathered or both ends are reached. Whole buckets are
    /// consumed, so more than `k` candidates may be gathered before the
    /// stable sort and truncation.
    pub fn find_closest_to(&self, checksum: &[u8], k: usize) -> Vec<Arc<I>> {
        if k == 0 {
            return Vec::new();
        }

        let idx = self.bucket_index_of(checksum);
        let mut closest = Vec::with_capacity(k);

        self.buckets[idx].collect_into(&mut closest, checksum);

        let mut i = 1;
        while closest.len() < k && (i <= idx || idx + i < self.buckets.len()) {
            if let Some(lower) = idx.checked_sub(i) {
                self.buckets[lower].collect_into(&mut closest, checksum);
            }
            if let Some(upper) = self.buckets.get(idx + i) {
                upper.collect_into(&mut closest, checksum);
            }
            i += 1;
        }

        sort_by_distance(&mut closest, checksum);
        closest.truncate(k);
        closest
    }

    /// Snapshot of every peer in the table, bucket by bucket.
    pub fn peers(&self) -> Vec<Arc<I>> {
        let mut all = Vec::new();
        for bucket in &self.buckets {
            all.extend(bucket.peers());
        }
        all
    }

    /// Total number of peers across all buckets (including the local anchor)
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// Whether the table holds no peers at all
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// Get routing table statistics
    pub fn stats(&self) -> RoutingTableStats {
        let mut stats = RoutingTableStats {
            num_buckets: self.buckets.len(),
            bucket_size: self.config.bucket_size,
            ..RoutingTableStats::default()
        };

        for bucket in &self.buckets {
            let len = bucket.len();
            stats.total_peers += len;
            if len > 0 {
                stats.buckets_used += 1;
            }
            if len >= bucket.capacity() {
                stats.full_buckets += 1;
            }
        }

        stats
    }
}
