//! # Routing Table Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | XOR distance (256-bit) | < 100ns |
//! | Bucket index | < 200ns |
//! | Find 20 closest, populated table | < 1ms |
//!
//! Run with `cargo bench -p skad-tests`.

use criterion::{criterion_group, criterion_main, Criterion};

fn routing_table_benchmarks(c: &mut Criterion) {
    skad_tests::benchmarks::routing_table::register_benchmarks(c);
}

criterion_group!(benches, routing_table_benchmarks);
criterion_main!(benches);
