//! Basic authentication flow.
//!
//! ## Module Organization
//!
//! - `authenticate`: Pluggable credential verification (`Authenticator`) and shipped strategies
//! - `gate`: The challenge/response state machine in front of every request
//! - `password`: Password hashing and verification with Argon2

pub mod authenticate;
pub mod gate;
pub mod password;


pub use authenticate::{
    AuthDecision, Authenticator, DenyAll, Principal, StaticUsers, authenticator_from_config,
};
pub use gate::{AuthOutcome, AuthenticationGate, Challenge, GateStep};
