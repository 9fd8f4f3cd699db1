//! Benchmark-only crate; see `benches/string_bench.rs`.
