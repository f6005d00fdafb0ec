//! lightbnb CLI - command-line access to the LightBnB query gateway
//!
//! Provides:
//! - Schema migrations (`migrate`)
//! - User lookup and registration (`users`)
//! - A guest's reservations (`reservations`)
//! - Filtered property listing and insertion (`properties`)
//! - Effective configuration display (`config`)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tracing_setup;

use commands::DbArgs;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query the LightBnB rental database: users, reservations, properties"
)]
struct Cli {
    /// Enable debug logging (shows generated SQL)
    #[arg(long, global = true)]
    debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    #[command(flatten)]
    db: DbArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Look up or register users
    Users(commands::users::UsersArgs),
    /// List a guest's reservations, earliest first
    Reservations(commands::reservations::ReservationsArgs),
    /// List or add properties
    Properties(commands::properties::PropertiesArgs),
    /// Inspect database configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Migrate => commands::run_migrate(&cli.db).await?,
        Commands::Users(args) => commands::run_users(args, &cli.db, cli.format).await?,
        Commands::Reservations(args) => {
            commands::run_reservations(args, &cli.db, cli.format).await?
        }
        Commands::Properties(args) => commands::run_properties(args, &cli.db, cli.format).await?,
        Commands::Config(args) => commands::run_config(args, &cli.db)?,
    }
    Ok(())
}
