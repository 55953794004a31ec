//! Tessen `WebDAV` server - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `tessen::` style paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use tessen_core::*;
    pub use tessen_service::*;

    pub mod middleware {
        pub use tessen_app::middleware::*;
    }

    pub mod config {
        pub use tessen_core::config::*;
    }

    pub mod bridge {
        pub use tessen_app::bridge_handler::BridgeHandler;
        pub use tessen_service::dav::*;
    }
}

pub mod app {
    pub use tessen_app::*;

    pub mod api {
        pub use tessen_app::app::api::*;
    }
}

pub use tessen_rfc as rfc;
