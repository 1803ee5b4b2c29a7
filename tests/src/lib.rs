//! # S/Kademlia Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Identity fixtures, tracing setup
//! ├── benchmarks/       # Criterion benchmarks for the routing table
//! └── integration/      # Multi-threaded and multi-table scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p skad-tests
//!
//! # By category
//! cargo test -p skad-tests integration::
//!
//! # Benchmarks
//! cargo bench -p skad-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
