//! Command implementations for the lightbnb CLI

pub mod config;
pub mod migrate;
pub mod properties;
pub mod reservations;
pub mod users;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lightbnb_db::{DbConfig, QueryGateway};
use tracing::debug;

// Re-export main dispatcher functions for flat access from main.rs
pub use config::run_config;
pub use migrate::run_migrate;
pub use properties::run_properties;
pub use reservations::run_reservations;
pub use users::run_users;

/// Connection flags shared by every database command
#[derive(Args, Debug, Clone, Default)]
pub struct DbArgs {
    /// Config file (default: ~/.lightbnb/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Database URL (overrides config file and LIGHTBNB_DB_* variables)
    #[arg(long, value_name = "URL", global = true)]
    pub database_url: Option<String>,
}

impl DbArgs {
    /// Resolve the effective configuration: file, environment, then flags.
    pub fn load_config(&self) -> Result<DbConfig> {
        let mut config = DbConfig::load(self.config.as_deref())
            .context("Failed to load database configuration")?;
        if let Some(url) = &self.database_url {
            config.url = Some(url.clone());
        }
        let config_file = self.config.clone().unwrap_or_else(DbConfig::config_path);
        debug!(
            config_file = %config_file.display(),
            url_flag = self.database_url.is_some(),
            "resolved database configuration"
        );
        Ok(config)
    }

    pub async fn connect(&self) -> Result<QueryGateway> {
        let config = self.load_config()?;
        let gateway = QueryGateway::connect(&config)
            .await
            .context("Failed to connect to database")?;
        debug!(
            max_connections = config.max_connections,
            "database connection established"
        );
        Ok(gateway)
    }
}
