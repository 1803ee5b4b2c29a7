//! K-Bucket implementation for Kademlia routing.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{Identity, TableError};

/// A k-bucket holding up to `capacity` peers that share one prefix length
/// with the local node.
///
/// Entries are ordered by recency: the front is the most recently touched
/// peer, the back the least recently touched one. Every read takes the
/// bucket's shared lock and every write its exclusive lock; buckets never
/// lock each other.
///
/// Handles returned by [`RoutingTable::bucket`](super::RoutingTable::bucket)
/// can read, reorder and remove entries but never add one, so every member
/// got in through [`RoutingTable::update`](super::RoutingTable::update):
///
/// ```compile_fail
/// use std::sync::Arc;
/// use skad_table::{PeerId, RoutingTable, TableConfig};
///
/// let local = Arc::new(PeerId::from_checksum(vec![0u8; 32]));
/// let table = RoutingTable::new(local, TableConfig::default()).unwrap();
/// let stray = Arc::new(PeerId::from_checksum(vec![0xFFu8; 32]));
/// table.bucket(3).unwrap().insert_front(stray, 3).unwrap();
/// ```
pub struct Bucket<I> {
    entries: RwLock<VecDeque<Arc<I>>>,
    capacity: usize,
}

impl<I: Identity> Bucket<I> {
    /// Create a new empty bucket
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Maximum number of peers this bucket holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of peers in this bucket
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the bucket is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Check if the bucket is full
    pub fn is_full(&self) -> bool {
        self.entries.read().len() >= self.capacity
    }

    /// Find the first peer whose checksum matches, scanning front to back.
    pub fn locate(&self, checksum: &[u8]) -> Option<Arc<I>> {
        let entries = self.entries.read();
        position(&entries, checksum).map(|pos| Arc::clone(&entries[pos]))
    }

    /// Detach the peer with the given checksum.
    ///
    /// Returns whether an entry was actually removed.
    pub fn remove(&self, checksum: &[u8]) -> bool {
        let mut entries = self.entries.write();
        match position(&entries, checksum) {
            Some(pos) => entries.remove(pos).is_some(),
            None => false,
        }
    }

    /// Move an existing peer to the front (most recently seen).
    ///
    /// Returns `false` if the peer is not in this bucket.
    pub fn promote(&self, checksum: &[u8]) -> bool {
        let mut entries = self.entries.write();
        promote_at(&mut entries, checksum)
    }

    /// Add a new peer at the front.
    ///
    /// Capacity is checked under the write lock; a full bucket is reported
    /// as [`TableError::BucketFull`] with `index` and left untouched. The
    /// caller is responsible for `peer` belonging to this bucket.
    pub(crate) fn insert_front(&self, peer: Arc<I>, index: usize) -> Result<(), TableError> {
        let mut entries = self.entries.write();
        if entries.len() >= self.capacity {
            return Err(TableError::BucketFull { bucket: index });
        }
        entries.push_front(peer);
        Ok(())
    }

    /// Get the least recently seen peer (the eviction candidate)
    pub fn least_recent(&self) -> Option<Arc<I>> {
        self.entries.read().back().cloned()
    }

    /// Snapshot of all peers, most recently seen first
    pub fn peers(&self) -> Vec<Arc<I>> {
        self.entries.read().iter().cloned().collect()
    }

    /// Refresh-or-insert as one critical section.
    ///
    /// The membership check, capacity check and insert all happen under one
    /// write lock.
    pub(crate) fn touch_or_insert(&self, peer: Arc<I>) -> Touch {
        let mut entries = self.entries.write();
        if promote_at(&mut entries, peer.checksum()) {
            return Touch::Promoted;
        }
        if entries.len() >= self.capacity {
            return Touch::Full;
        }
        entries.push_front(peer);
        Touch::Inserted
    }

    /// Append every entry whose checksum differs from `exclude` to `out`.
    pub(crate) fn collect_into(&self, out: &mut Vec<Arc<I>>, exclude: &[u8]) {
        let entries = self.entries.read();
        out.extend(
            entries
                .iter()
                .filter(|peer| !peer.same_checksum(exclude))
                .cloned(),
        );
    }
}

impl<I> fmt::Debug for Bucket<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bucket")
            .field("len", &self.entries.read().len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Result of [`Bucket::touch_or_insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Touch {
    Promoted,
    Inserted,
    Full,
}

fn position<I: Identity>(entries: &VecDeque<Arc<I>>, checksum: &[u8]) -> Option<usize> {
    entries.iter().position(|peer| peer.same_checksum(checksum))
}

fn promote_at<I: Identity>(entries: &mut VecDeque<Arc<I>>, checksum: &[u8]) -> bool {
    match position(entries, checksum) {
        Some(0) => true,
        Some(pos) => {
            if let Some(peer) = entries.remove(pos) {
                entries.push_front(peer);
            }
            true
        }
        None => false,
    }
}
