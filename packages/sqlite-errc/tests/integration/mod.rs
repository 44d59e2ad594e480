//! Integration test suite.
//!
//! 1. Category labels and condition classification
//! 2. Mapping SQLite failures and opaque errors to codes

pub mod category_tests;
