//! Integration test utilities for the scoring pipeline
//!
//! This crate provides exported-table fixtures and helpers for running the
//! batch runner end to end against files on disk.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
