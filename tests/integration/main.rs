//! Integration tests
//!
//! Run with: cargo test -- --ignored

mod store_tests;
