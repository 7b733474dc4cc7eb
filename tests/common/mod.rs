//! Common test utilities and helpers
//!
//! Shared infrastructure for the integration tests: data factories and
//! mock upstream implementations.

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;
