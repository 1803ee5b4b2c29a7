//! # Concurrent Access
//!
//! One `Arc<RoutingTable>` shared by writer and reader threads. After the
//! threads join, the placement and capacity invariants must still hold.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use parking_lot::Mutex;
    use skad_table::{
        bucket_index, cmp_distance, Identity, PeerId, RoutingTable, TableConfig, TableError,
        UpdateOutcome,
    };

    use crate::fixtures::{init_tracing, random_identities, random_identity, CHECKSUM_LEN};

    const WRITERS: usize = 8;
    const READERS: usize = 4;
    const PEERS_PER_WRITER: usize = 500;

    fn shared_table(bucket_size: usize) -> (Arc<PeerId>, Arc<RoutingTable<PeerId>>) {
        let local = random_identity(3000);
        let table = RoutingTable::new(
            Arc::clone(&local),
            TableConfig::new(CHECKSUM_LEN, bucket_size),
        )
        .expect("valid config");
        (local, Arc::new(table))
    }

    fn assert_invariants(local: &PeerId, table: &RoutingTable<PeerId>) {
        for idx in 0..table.num_buckets() {
            let bucket = table.bucket(idx).expect("in range");
            let members = bucket.peers();
            assert!(members.len() <= bucket.capacity(), "bucket {} over capacity", idx);

            let distinct: HashSet<&[u8]> = members.iter().map(|p| p.checksum()).collect();
            assert_eq!(distinct.len(), members.len(), "bucket {} holds duplicates", idx);

            for member in &members {
                assert_eq!(bucket_index(local.checksum(), member.checksum()), idx);
            }
        }
    }

    #[test]
    fn test_parallel_writers_and_readers_preserve_invariants() {
        init_tracing();
        let (local, table) = shared_table(8);
        let full_rejections = Arc::new(Mutex::new(0usize));

        thread::scope(|s| {
            for _ in 0..WRITERS {
                let table = Arc::clone(&table);
                let full_rejections = Arc::clone(&full_rejections);
                s.spawn(move || {
                    for peer in random_identities(PEERS_PER_WRITER) {
                        match table.update(Some(Arc::clone(&peer))) {
                            Ok(_) => {}
                            Err(TableError::BucketFull { .. }) => *full_rejections.lock() += 1,
                            Err(other) => panic!("unexpected error: {}", other),
                        }
                        // No deletes run here, so a present peer stays present
                        if table.contains(&peer) {
                            assert_eq!(table.update(Some(peer)), Ok(UpdateOutcome::Refreshed));
                        }
                    }
                });
            }

            for _ in 0..READERS {
                let table = Arc::clone(&table);
                s.spawn(move || {
                    for _ in 0..200 {
                        let target = random_identity(0);
                        let closest = table.find_closest(Some(&target), 16);
                        assert!(closest.len() <= 16);
                        for pair in closest.windows(2) {
                            assert_ne!(
                                cmp_distance(
                                    pair[0].checksum(),
                                    pair[1].checksum(),
                                    target.checksum()
                                ),
                                std::cmp::Ordering::Greater
                            );
                        }
                    }
                });
            }
        });

        assert_invariants(&local, &table);
        // Low buckets cover half, a quarter, ... of the key space and saturate quickly
        assert!(*full_rejections.lock() > 0);
        assert_eq!(table.stats().total_peers, table.peers().len());
    }

    #[test]
    fn test_racing_inserts_into_one_bucket_respect_capacity() {
        init_tracing();
        let local = Arc::new(PeerId::from_checksum(vec![0u8; CHECKSUM_LEN]));
        let table = Arc::new(RoutingTable::new(Arc::clone(&local), TableConfig::new(32, 5)).unwrap());
        let inserted = Arc::new(Mutex::new(Vec::new()));

        thread::scope(|s| {
            for t in 0..10u64 {
                let table = Arc::clone(&table);
                let local = Arc::clone(&local);
                let inserted = Arc::clone(&inserted);
                s.spawn(move || {
                    for i in 0..10u64 {
                        let peer = skad_table::test_utils::peer_in_bucket(&local, 7, t * 100 + i);
                        if table.update(Some(Arc::clone(&peer))) == Ok(UpdateOutcome::Inserted) {
                            inserted.lock().push(peer);
                        }
                    }
                });
            }
        });

        let inserted = inserted.lock();
        let bucket = table.bucket(7).unwrap();
        assert_eq!(inserted.len(), 5);
        assert_eq!(bucket.len(), 5);
        for peer in inserted.iter() {
            assert!(table.locate(bucket, peer).is_some());
        }
    }

    #[test]
    fn test_concurrent_update_and_delete_leave_no_duplicates() {
        init_tracing();
        let (local, table) = shared_table(20);
        let peers = random_identities(300);

        thread::scope(|s| {
            for round in 0..4 {
                let table = Arc::clone(&table);
                let peers = peers.clone();
                s.spawn(move || {
                    for (i, peer) in peers.iter().enumerate() {
                        if (i + round) % 3 == 0 {
                            table.delete(peer);
                        } else {
                            let _ = table.update(Some(Arc::clone(peer)));
                        }
                    }
                });
            }
        });

        assert_invariants(&local, &table);
        for peer in &peers {
            let idx = table.bucket_index_of(peer.checksum());
            let count = table
                .bucket(idx)
                .unwrap()
                .peers()
                .iter()
                .filter(|p| p.checksum() == peer.checksum())
                .count();
            assert!(count <= 1);
        }
    }
}
