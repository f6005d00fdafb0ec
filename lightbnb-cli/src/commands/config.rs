use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::DbConfig;
use serde::Serialize;

use super::DbArgs;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective database configuration (password masked)
    Show,
    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigView {
    database: DbConfig,
}

pub fn run_config(args: ConfigArgs, db: &DbArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => run_show(db),
        ConfigCommands::Path => {
            let path = db.config.clone().unwrap_or_else(DbConfig::config_path);
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_show(db: &DbArgs) -> Result<()> {
    let config = db.load_config()?;
    let view = ConfigView {
        database: config.redacted(),
    };
    let toml_str = toml::to_string_pretty(&view).context("Failed to serialize config to TOML")?;
    println!("{}", toml_str);
    Ok(())
}
