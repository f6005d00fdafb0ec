//! Reservations for a guest

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::Limit;

use super::DbArgs;
use crate::output::{emit, OutputFormat};

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest (user) id
    #[arg(long)]
    pub guest_id: i32,

    /// Maximum reservations to return
    #[arg(long, default_value = "10")]
    pub limit: u32,
}

pub async fn run_reservations(
    args: ReservationsArgs,
    db: &DbArgs,
    format: OutputFormat,
) -> Result<()> {
    let gateway = db.connect().await?;
    let result = gateway
        .get_reservations_for_guest(args.guest_id, Limit::new(args.limit))
        .await
        .with_context(|| format!("Failed to list reservations for guest #{}", args.guest_id));
    gateway.close().await;

    emit(&result?, format)
}
