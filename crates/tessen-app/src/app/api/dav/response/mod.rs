//! Writers that turn protocol decisions into salvo responses.

mod challenge;
mod delete;

pub use challenge::write_challenge;
pub use delete::write_delete_response;
