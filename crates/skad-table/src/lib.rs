//! # S/Kademlia Routing Table
//!
//! The routing table of a Kademlia-style peer directory: it tracks known
//! peer identities, partitions them by XOR distance from the local node and
//! answers "which peers are closest to X" for lookup routing.
//!
//! ## Core
//!
//! The table only needs locking (`parking_lot`), logging (`tracing`) and
//! error types (`thiserror`). Config file loading and test helpers are
//! feature-gated:
//!
//! - `toml-config` (default) - `TomlConfigProvider`
//! - `test-utils` - identity generators targeting a chosen bucket
//!
//! ## Architecture
//!
//! - **Domain Layer:** XOR metric, k-buckets, routing table
//! - **Ports Layer:** Trait definitions for external collaborators
//! - **Adapters Layer:** Concrete config providers
//!
//! ## Concurrency
//!
//! Every bucket carries its own reader/writer lock and there is no
//! table-wide lock. Share the table as `Arc<RoutingTable<I>>`.
//! `find_closest` reads buckets one after another, so it observes each
//! bucket consistently but not the table as a whole.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use skad_table::{Identity, PeerId, RoutingTable, TableConfig, TableError, UpdateOutcome};
//!
//! let local = Arc::new(PeerId::from_checksum(vec![0u8; 32]));
//! // Four peers per bucket
//! let table = RoutingTable::new(local, TableConfig::for_testing()).unwrap();
//!
//! let peer = Arc::new(PeerId::new("10.0.0.7:3000", Vec::new(), vec![0xFFu8; 32]));
//! assert_eq!(table.update(Some(peer.clone())), Ok(UpdateOutcome::Inserted));
//! assert_eq!(table.update(Some(peer.clone())), Ok(UpdateOutcome::Refreshed));
//!
//! // Every checksum with the top bit set shares bucket 0 with `peer`
//! for last in 1..=3u8 {
//!     let mut checksum = vec![0x80u8; 32];
//!     checksum[31] = last;
//!     table.update(Some(Arc::new(PeerId::from_checksum(checksum)))).unwrap();
//! }
//! let newcomer = Arc::new(PeerId::from_checksum(vec![0x80u8; 32]));
//! assert_eq!(
//!     table.update(Some(newcomer.clone())),
//!     Err(TableError::BucketFull { bucket: 0 })
//! );
//!
//! // The caller probes the least recently seen peer; if it is gone, evict and retry
//! let stale = table.least_recent_for(newcomer.checksum()).unwrap();
//! assert_eq!(stale, peer);
//! assert!(table.delete(&stale));
//! assert_eq!(table.update(Some(newcomer.clone())), Ok(UpdateOutcome::Inserted));
//!
//! let closest = table.find_closest(Some(newcomer.as_ref()), 1);
//! assert_eq!(closest[0].checksum()[31], 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;

/// Test utilities (identity generators)
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Domain entities and values
pub use domain::{
    checksums_equal, Bucket, Identity, PeerId, RoutingTable, RoutingTableStats, TableConfig,
    TableError, UpdateOutcome, DEFAULT_BUCKET_SIZE, DEFAULT_DIGEST_LEN,
};

// Domain services
pub use domain::{bucket_index, cmp_distance, prefix_len, sort_by_distance, xor};

// Port traits
pub use ports::ConfigProvider;

// Adapters
pub use adapters::StaticConfigProvider;

#[cfg(feature = "toml-config")]
pub use adapters::{ConfigError, TomlConfigProvider};
