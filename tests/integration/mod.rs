//! Integration tests for opsdesk
//!
//! These tests verify the interaction between configuration, snapshot and
//! permission engine through the public API.

pub mod config_tests;
pub mod reviewer_tests;
pub mod snapshot_tests;
