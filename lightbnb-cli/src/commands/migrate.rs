//! Apply the embedded schema migrations

use anyhow::{Context, Result};

use super::DbArgs;

pub async fn run_migrate(db: &DbArgs) -> Result<()> {
    let gateway = db.connect().await?;
    let result = gateway.migrate().await.context("Migration failed");
    gateway.close().await;
    result?;

    eprintln!("✅ Schema is up to date");
    Ok(())
}
