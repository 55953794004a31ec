//! Shared configuration, errors and constants for the tessen crates.

pub mod config;
pub mod constants;
pub mod error;
