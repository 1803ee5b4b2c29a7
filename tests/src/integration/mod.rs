//! # Integration Scenarios
//!
//! - `concurrency`: many threads mutating and querying one shared table
//! - `eviction`: caller-driven liveness check and eviction on `BucketFull`
//! - `lookup`: iterative lookups across a simulated network of tables

pub mod concurrency;
