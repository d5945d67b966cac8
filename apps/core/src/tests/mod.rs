//! Test Module
//!
//! Cross-module test suite for the InsightLex core.
//!
//! ## Test Categories
//! - `controller_tests`: session controller behavior against a mock provider
//! - `scenario_tests`: end-to-end flows against a mocked model endpoint


pub mod controller_tests;
