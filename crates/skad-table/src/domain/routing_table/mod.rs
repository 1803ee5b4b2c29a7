//! Routing Table Implementation
//!
//! XOR-metric k-buckets with one reader/writer lock per bucket.

// Semantic submodules
mod bucket;
mod stats;
mod table;

// Re-export public API
pub use bucket::Bucket;
pub use stats::RoutingTableStats;
pub use table::RoutingTable;
