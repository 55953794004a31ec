//! HTTP authentication schemes.

pub mod basic;

pub use basic::{Credential, parse_basic_credentials};
