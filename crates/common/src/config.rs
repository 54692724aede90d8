//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Origins allowed to make credentialed cross-site requests when
/// `CORS_ALLOWED_ORIGINS` is not set.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,https://job-portal-sajmul.web.app";

/// Deployment environment. Production switches the session cookie to
/// `Secure; SameSite=None` so the cross-site frontend can send it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeEnvironment::Production)
    }
}

impl FromStr for RuntimeEnvironment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(RuntimeEnvironment::Production),
            "development" | "dev" | "test" | "local" => Ok(RuntimeEnvironment::Development),
            other => Err(anyhow::anyhow!("Unknown APP_ENV: {}", other)),
        }
    }
}

/// Which document store backs the collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreProvider::Postgres),
            "memory" | "mock" => Ok(StoreProvider::Memory),
            other => Err(anyhow::anyhow!(
                "Unknown DOCUMENT_STORE: {}. Supported stores: postgres, memory",
                other
            )),
        }
    }
}

/// How a new application updates its job's `applicationCount`.
///
/// `Reset` writes 1 regardless of the previous value, which is what deployed
/// clients observe. `Accumulate` adds one per application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationCountMode {
    Accumulate,
    #[default]
    Reset,
}

impl FromStr for ApplicationCountMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accumulate" | "increment" => Ok(ApplicationCountMode::Accumulate),
            "reset" | "legacy" => Ok(ApplicationCountMode::Reset),
            other => Err(anyhow::anyhow!(
                "Unknown APPLICATION_COUNT_MODE: {}. Supported modes: accumulate, reset",
                other
            )),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (required for the postgres store)
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub store: StoreProvider,

    /// Session token signing secret
    pub jwt_secret: String,

    /// Runtime configuration
    pub environment: RuntimeEnvironment,
    pub port: u16,
    pub rust_log: String,
    pub cors_allowed_origins: Vec<String>,

    /// Feature switches
    pub require_applicant_auth: bool,
    pub application_count_mode: ApplicationCountMode,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("database_max_connections", &self.database_max_connections)
            .field("store", &self.store)
            .field("jwt_secret", &"<redacted>")
            .field("environment", &self.environment)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("require_applicant_auth", &self.require_applicant_auth)
            .field("application_count_mode", &self.application_count_mode)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("DOCUMENT_STORE") {
            Some(value) => value.parse()?,
            None => StoreProvider::default(),
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        if store == StoreProvider::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!("DATABASE_URL is required"));
        }

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?;

        let environment = match lookup("APP_ENV") {
            Some(value) => value.parse()?,
            None => RuntimeEnvironment::default(),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number: {}", value))?,
            None => 3000,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.parse().map_err(|_| {
                anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be a number: {}", value)
            })?,
            None => 5,
        };

        let cors_allowed_origins = parse_origins(
            &lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let require_applicant_auth = match lookup("REQUIRE_APPLICANT_AUTH") {
            Some(value) => parse_flag("REQUIRE_APPLICANT_AUTH", &value)?,
            None => true,
        };

        let application_count_mode = match lookup("APPLICATION_COUNT_MODE") {
            Some(value) => value.parse()?,
            None => ApplicationCountMode::default(),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            store,
            jwt_secret,
            environment,
            port,
            rust_log: lookup("RUST_LOG")
                .unwrap_or_else(|| "jobboard=debug,tower_http=info".to_string()),
            cors_allowed_origins,
            require_applicant_auth,
            application_count_mode,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("{} must be a boolean: {}", name, other)),
    }
}
