//! Property-based tests for comparison and hashing guarantees

mod determinism;
