//! HTTP layer: salvo routing, middleware and response writing.
//!
//! ## Module Organization
//!
//! - `app`: Routes and method handlers
//! - `bridge_handler`: Injects the storage bridge into the depot
//! - `depot`: Depot keys and typed getters for per-request state
//! - `error`: HTTP layer error type
//! - `extract`: Builds the protocol-level request view from a salvo `Request`
//! - `middleware`: Authentication gate and target resolution

pub mod app;
pub mod bridge_handler;
pub mod depot;
pub mod error;
pub mod extract;
pub mod middleware;
