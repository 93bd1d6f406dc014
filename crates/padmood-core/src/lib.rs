//! Mood logic for padmood.
//!
//! Pure, synchronous functions over `padmood-types`: no IO, no storage, no
//! runtime. Callers own every state this crate returns.

pub mod mood;
