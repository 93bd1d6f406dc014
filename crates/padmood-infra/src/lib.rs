//! Infrastructure layer for padmood.
//!
//! Everything that touches the outside world on behalf of the pure core:
//! data directory resolution and `config.toml` loading.

pub mod config;
pub mod filesystem;
