//! Core utilities shared by every layer
//!
//! - log:    console output (`console_log!` is exported at the crate root)
//! - random: injectable random source used by every engine

#[macro_use]
pub mod log;
pub mod random;
