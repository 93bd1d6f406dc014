//! Shared domain types for padmood.
//!
//! This crate contains the PAD mood state, the process-wide baseline, decay
//! configuration, and their associated error type.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod mood;
