use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

pub const DEFAULT_DOWNSTREAM_URL: &str = "http://service2:8001/api/message";

const DEFAULT_DB_HOST: &str = "db";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "messages_db";

/// Configuration for the API service, loaded from file + environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub downstream_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8000,
                ..ServerConfig::default()
            },
            logging: LoggingSection::default(),
            downstream_url: DEFAULT_DOWNSTREAM_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let mut config: Self = build_settings()?
            .try_deserialize()
            .context("invalid configuration file")?;

        if let Ok(url) = env::var("DOWNSTREAM_URL") {
            config.downstream_url = url;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }
}

/// Configuration for the data service, loaded from file + environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub db: DbSection,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8001,
                ..ServerConfig::default()
            },
            logging: LoggingSection::default(),
            db: DbSection::default(),
        }
    }
}

impl DataConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let mut config: Self = build_settings()?
            .try_deserialize()
            .context("invalid configuration file")?;

        if let Ok(host) = env::var("DB_HOST") {
            config.db.host = host;
        }
        if let Ok(port) = env::var("DB_PORT") {
            config.db.port = port.parse().context("invalid DB_PORT")?;
        }
        if let Ok(name) = env::var("DB_NAME") {
            config.db.name = name;
        }
        if let Ok(user) = env::var("DB_USER") {
            config.db.user = Some(user);
        }
        if let Ok(password) = env::var("DB_PASSWORD") {
            config.db.password = Some(password);
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }
}

fn build_settings() -> Result<config::Config> {
    let config_path = env::var("MSGRELAY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

    let mut builder = config::Config::builder();

    if Path::new(&config_path).exists() {
        builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
    }

    builder.build().context("failed to read configuration")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Database connection settings as written in configuration; credentials are
/// optional here and validated by [`DbSection::to_runtime`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DbSection {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Default for DbSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            name: DEFAULT_DB_NAME.to_string(),
            user: None,
            password: None,
        }
    }
}

impl DbSection {
    /// Resolve validated connection settings, failing fast when required
    /// credentials are absent.
    pub fn to_runtime(&self) -> Result<DbConfig> {
        let user = match self.user.as_deref() {
            Some(user) if !user.trim().is_empty() => user.to_string(),
            _ => bail!("DB_USER (or db.user) must be set"),
        };
        let password = match self.password.as_deref() {
            Some(password) if !password.is_empty() => password.to_string(),
            _ => bail!("DB_PASSWORD (or db.password) must be set"),
        };

        Ok(DbConfig {
            host: self.host.clone(),
            port: self.port,
            name: self.name.clone(),
            user,
            password,
        })
    }
}

/// Validated database connection settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    pub fn connect_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
