pub mod auth;
pub mod resource_resolver;
