//! Test helpers module
//!
//! Mock ADS server and shared fixtures for the integration tests.

pub mod ads_mock;
pub mod test_data;

pub use ads_mock::*;
pub use test_data::*;
