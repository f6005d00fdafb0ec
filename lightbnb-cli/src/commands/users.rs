//! User commands: look up and register

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lightbnb_db::NewUser;

use super::DbArgs;
use crate::output::{emit, OutputFormat};

#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommands,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// Look up a user by email or id
    Get(GetArgs),
    /// Register a new user
    Add(AddArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct GetArgs {
    /// Exact email address
    #[arg(long)]
    pub email: Option<String>,

    /// User id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique)
    #[arg(long)]
    pub email: String,

    /// Password credential, stored as given (hash it first)
    #[arg(long, env = "LIGHTBNB_USER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run_users(args: UsersArgs, db: &DbArgs, format: OutputFormat) -> Result<()> {
    let gateway = db.connect().await?;

    let result = match args.command {
        UsersCommands::Get(get) => match (get.email, get.id) {
            (Some(email), _) => gateway
                .get_user_by_email(&email)
                .await
                .with_context(|| format!("Failed to look up user by email {}", email)),
            (None, Some(id)) => gateway
                .get_user_by_id(id)
                .await
                .with_context(|| format!("Failed to look up user #{}", id)),
            (None, None) => Err(anyhow::anyhow!("Pass --email or --id")),
        },
        UsersCommands::Add(add) => gateway
            .add_user(NewUser::new(add.name, add.email, add.password))
            .await
            .context("Failed to register user"),
    };

    gateway.close().await;
    emit(&result?, format)
}
