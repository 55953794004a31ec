use std::path::PathBuf;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// Every credential is rejected; each request is answered with a challenge.
    DenyAll,
    /// Credentials are checked against `auth.users`.
    StaticUsers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    /// Basic realm. Absent means the default realm; an empty string is kept as-is.
    pub realm: Option<String>,
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

#[derive(Clone, Deserialize)]
pub struct UserConfig {
    pub name: String,
    /// Argon2 hash in PHC string format.
    pub password_hash: String,
}

impl std::fmt::Debug for UserConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserConfig")
            .field("name", &self.name)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory served by the filesystem resource bridge.
    pub root: PathBuf,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::from_sources(
            config::File::with_name("config.toml").required(false),
            environment(),
        )
    }

    /// Layers defaults, then `file`, then `env`; later sources win.
    fn from_sources<F, E>(file: F, env: E) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
        E: config::Source + Send + Sync + 'static,
    {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "debug")?
            .set_default("auth.method", "deny_all")?
            .set_default("storage.root", "./data")?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// `SERVER_PORT=9000` maps onto `server.port`.
fn environment() -> config::Environment {
    config::Environment::default()
        .convert_case(config::Case::Snake)
        .separator("_")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
