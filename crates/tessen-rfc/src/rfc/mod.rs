pub mod auth;
pub mod dav;
