use std::env;
use std::path::PathBuf;

use crate::site::domain::view_context::BasePath;

const PRODUCTION_BASE_PATH: &str = "/portfolio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEnv {
    Development,
    Production,
    Test,
}

impl RunEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunEnv::Development => "development",
            RunEnv::Production => "production",
            RunEnv::Test => "test",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("RUST_ENV must be development, production or test, got `{0}`")]
    UnknownEnv(String),

    #[error("PORT must be a number between 1 and 65535, got `{0}`")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub env: RunEnv,
    pub host: String,
    pub port: u16,
    pub content_path: PathBuf,
    pub public_dir: PathBuf,
    pub export_dir: PathBuf,
    pub base_path: BasePath,
}

impl SiteConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("RUST_ENV").as_deref().unwrap_or("development") {
            "development" => RunEnv::Development,
            "production" => RunEnv::Production,
            "test" => RunEnv::Test,
            other => return Err(ConfigError::UnknownEnv(other.to_string())),
        };

        let port_raw = lookup("PORT").unwrap_or_else(|| "8080".to_string());
        let port = match port_raw.trim().parse::<u16>() {
            Ok(p) if p > 0 => p,
            _ => return Err(ConfigError::InvalidPort(port_raw)),
        };

        let base_path = match lookup("BASE_PATH") {
            Some(raw) => BasePath::new(&raw),
            None if env == RunEnv::Production => BasePath::new(PRODUCTION_BASE_PATH),
            None => BasePath::root(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            content_path: lookup("CONTENT_PATH")
                .unwrap_or_else(|| "data/portfolio.json".to_string())
                .into(),
            public_dir: lookup("PUBLIC_DIR").unwrap_or_else(|| "public".to_string()).into(),
            export_dir: lookup("EXPORT_DIR").unwrap_or_else(|| "out".to_string()).into(),
            base_path,
            env,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
