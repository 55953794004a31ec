#![allow(clippy::unused_async, clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building settings with a known user
//! - Creating a test Salvo service over any resource bridge
//! - Making HTTP requests and asserting on responses
//! - Scratch storage directories for the filesystem bridge

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use base64::Engine;
use salvo::http::header::HeaderName;
use salvo::http::{Method, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};

use tessen_test::component::auth::password::hash_password;
use tessen_test::component::bridge::{BridgeHandler, ResourceBridge};
use tessen_test::component::config::{
    AuthConfig, AuthMethod, LoggingConfig, ServerConfig, Settings, StorageConfig, UserConfig,
};

pub use tessen_test::component::bridge::{BridgeError, FsBridge, MemoryBridge};
pub use tracing;

pub const TEST_USER: &str = "alice";
pub const TEST_PASSWORD: &str = "s3cret";
pub const TEST_REALM: &str = "tessen-test";

static TEST_USER_HASH: OnceLock<String> = OnceLock::new();

fn test_user_hash() -> &'static str {
    TEST_USER_HASH.get_or_init(|| hash_password(TEST_PASSWORD).expect("Failed to hash test password"))
}

/// Settings with static users holding `TEST_USER` in `TEST_REALM`.
#[must_use]
pub fn test_settings() -> Settings {
    Settings {
        auth: AuthConfig {
            method: AuthMethod::StaticUsers,
            realm: Some(TEST_REALM.to_string()),
            users: vec![UserConfig {
                name: TEST_USER.to_string(),
                password_hash: test_user_hash().to_string(),
            }],
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        storage: StorageConfig {
            root: PathBuf::from("./data"),
        },
    }
}

/// Creates a test service wired like `main.rs`, over `bridge`.
///
/// ## Panics
/// Panics if the routes cannot be built from `settings`.
#[must_use]
pub fn create_test_service(settings: &Settings, bridge: Arc<dyn ResourceBridge>) -> Service {
    let router = Router::new()
        .hoop(BridgeHandler { bridge })
        .push(tessen_test::app::api::routes(settings).expect("API routes should be valid"));

    Service::new(router)
}

/// Encodes an `Authorization` value for Basic credentials.
#[must_use]
pub fn basic_auth(name: &str, password: &str) -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{name}:{password}"));
    format!("Basic {token}")
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
        }
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a new DELETE request.
    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the Authorization header to raw `value`.
    #[must_use]
    pub fn authorization(self, value: &str) -> Self {
        self.header("Authorization", value)
    }

    /// Authenticates as the test user.
    #[must_use]
    pub fn as_test_user(self) -> Self {
        self.authorization(&basic_auth(TEST_USER, TEST_PASSWORD))
    }

    /// Sends the request to the test service and returns the response.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "DELETE" => TestClient::delete(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}",
            self.status
        );
        self
    }

    /// Asserts that a header exists with the expected value.
    #[must_use]
    pub fn assert_header(self, name: &str, expected: &str) -> Self {
        let value = self
            .get_header(name)
            .unwrap_or_else(|| panic!("Header '{name}' not found in response"));
        assert_eq!(
            value, expected,
            "Header '{name}' expected '{expected}' but got '{value}'"
        );
        self
    }

    /// Asserts that a header is absent.
    #[must_use]
    pub fn assert_header_missing(self, name: &str) -> Self {
        assert!(
            self.get_header(name).is_none(),
            "Header '{name}' unexpectedly present"
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = String::from_utf8_lossy(&self.body);
        assert!(
            body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{body}"
        );
        self
    }

    /// Asserts that the response body equals `expected`.
    #[must_use]
    pub fn assert_body(self, expected: &str) -> Self {
        assert_eq!(self.body_string(), expected);
        self
    }

    /// Asserts that the response body is empty.
    #[must_use]
    pub fn assert_body_empty(self) -> Self {
        assert!(
            self.body.is_empty(),
            "Expected empty body but got {} bytes",
            self.body.len()
        );
        self
    }

    /// Asserts that the response body is an XML document.
    #[must_use]
    pub fn assert_valid_xml(self) -> Self {
        let body_str = String::from_utf8_lossy(&self.body);
        assert!(
            body_str.trim().starts_with("<?xml"),
            "Expected XML response but got:\n{body_str}"
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Counts the number of <response> elements in a multistatus response.
    #[must_use]
    pub fn count_multistatus_responses(&self) -> usize {
        self.body_string().matches("<D:response>").count()
    }
}

/// A scratch directory removed on drop.
pub struct TempStorage {
    root: PathBuf,
}

impl TempStorage {
    /// Creates an empty directory under the system temp dir.
    #[must_use]
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("tessen-it-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("Failed to create temp storage");
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a file, creating parent directories.
    #[must_use]
    pub fn file(self, rel: &str) -> Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, b"content").expect("Failed to write file");
        self
    }

    /// Creates a directory.
    #[must_use]
    pub fn dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.root.join(rel)).expect("Failed to create dir");
        self
    }

    #[must_use]
    pub fn exists(&self, rel: &str) -> bool {
        self.root.join(rel).symlink_metadata().is_ok()
    }

    /// A filesystem bridge serving this directory under `/dav`.
    #[must_use]
    pub fn bridge(&self) -> Arc<FsBridge> {
        Arc::new(FsBridge::new(&self.root).with_mount(tessen_test::app::api::DAV_ROUTE_PREFIX))
    }
}

impl Default for TempStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempStorage {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.root) {
            tracing::warn!(error = %e, root = %self.root.display(), "Failed to clean up temp storage");
        }
    }
}
