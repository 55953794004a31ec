// WebDAV glue: target resolution, method handlers and response writers.

use salvo::Router;

use crate::middleware::resource_resolver::ResourceResolver;

pub mod method;
pub mod response;

#[must_use]
pub fn routes() -> Router {
    Router::with_path("{**path}")
        .hoop(ResourceResolver)
        .delete(method::delete::delete)
}
