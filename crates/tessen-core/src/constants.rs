/// Realm advertised in `WWW-Authenticate` when none is configured.
pub const DEFAULT_REALM: &str = "WebDAV";

/// Authentication scheme accepted by the Basic gate (RFC 7617).
pub const BASIC_SCHEME: &str = "Basic";

/// Body sent with 409 when the DELETE target URL carries a fragment.
pub const FRAGMENT_CONFLICT_BODY: &str = "Cannot delete a URL with a fragment.";

/// Body sent when a single-file DELETE fails in the storage layer.
pub const NO_FILES_DELETED_BODY: &str = "No files deleted.";

/// Content type of `207 Multi-Status` bodies.
pub const MULTISTATUS_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Route component constants
pub const DAV_ROUTE_COMPONENT: &str = "dav";
pub const DAV_ROUTE_PREFIX: &str = const_str::concat!("/", DAV_ROUTE_COMPONENT);
