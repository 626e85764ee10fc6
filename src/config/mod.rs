pub mod toml_config;

use crate::core::CatalogSettings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";
pub const DEFAULT_STATUS: &str = "available";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Resolved settings: command line first, then config file, then defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    pub base_url: String,
    pub status: String,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
    pub log_level: Option<String>,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            status: DEFAULT_STATUS.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: Some(concat!("petstore-console/", env!("CARGO_PKG_VERSION")).to_string()),
            log_level: None,
        }
    }
}

impl ConsoleSettings {
    /// Overlay the values present in a config file.
    pub fn with_file(mut self, file: &TomlConfig) -> Self {
        let catalog = &file.catalog;
        if let Some(base_url) = &catalog.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(status) = &catalog.status {
            self.status = status.clone();
        }
        if let Some(timeout) = catalog.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(user_agent) = &catalog.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(level) = file.log_level() {
            self.log_level = Some(level.to_string());
        }
        self
    }
}

impl Validate for ConsoleSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("status", &self.status)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

impl CatalogSettings for ConsoleSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "petstore-console")]
#[command(about = "Browse available pets from a Petstore catalog")]
pub struct CliConfig {
    #[arg(long, help = "Catalog base URL [default: https://petstore.swagger.io/v2]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Pet status to query [default: available]")]
    pub status: Option<String>,

    #[arg(long, help = "HTTP timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<ConsoleSettings> {
        let mut settings = ConsoleSettings::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings = settings.with_file(&file);
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(status) = &self.status {
            settings.status = status.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }

        settings.validate()?;
        Ok(settings)
    }
}
