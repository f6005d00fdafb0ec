//! Property commands: filtered listing and insertion
//!
//! Price flags take whole dollars, the way a search form asks for them;
//! they are converted to cents before reaching the gateway.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lightbnb_db::{Cents, Limit, NewProperty, PropertyFilter};

use super::DbArgs;
use crate::output::{emit, OutputFormat};

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommands,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommands {
    /// List properties, cheapest first
    List(ListArgs),
    /// Add a property from a JSON document
    Add(AddArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// City contains this text (case sensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Owner id contains these digits
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum price per night, in dollars
    #[arg(long, value_name = "DOLLARS")]
    pub min_price: Option<u32>,

    /// Maximum price per night, in dollars
    #[arg(long, value_name = "DOLLARS")]
    pub max_price: Option<u32>,

    /// Minimum review rating (0-5)
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum properties to return
    #[arg(long, default_value = "10")]
    pub limit: u32,
}

impl ListArgs {
    fn to_filter(&self) -> Result<PropertyFilter> {
        let mut filter = PropertyFilter::new();
        filter.city = self.city.clone();
        filter.owner_id = self.owner_id;
        filter.min_cost_per_night = self.min_price.map(Cents::from_dollars).transpose()?;
        filter.max_cost_per_night = self.max_price.map(Cents::from_dollars).transpose()?;
        filter.min_rating = self.min_rating;
        Ok(filter)
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// JSON file with the property fields ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,
}

pub async fn run_properties(args: PropertiesArgs, db: &DbArgs, format: OutputFormat) -> Result<()> {
    match args.command {
        PropertiesCommands::List(list) => {
            let filter = list.to_filter()?;
            let gateway = db.connect().await?;
            let result = gateway
                .list_properties(&filter, Limit::new(list.limit))
                .await
                .context("Failed to list properties");
            gateway.close().await;
            emit(&result?, format)
        }
        PropertiesCommands::Add(add) => {
            let property = read_property(&add.file)?;
            let gateway = db.connect().await?;
            let result = gateway
                .add_property(property)
                .await
                .context("Failed to add property");
            gateway.close().await;
            emit(&result?, format)
        }
    }
}

fn read_property(path: &Path) -> Result<NewProperty> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read property from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&content).context("Invalid property JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dollars_become_cents() {
        let args = ListArgs {
            city: Some("Van".into()),
            min_price: Some(50),
            max_price: Some(100),
            limit: 10,
            ..ListArgs::default()
        };
        let filter = args.to_filter().unwrap();
        assert_eq!(filter.city.as_deref(), Some("Van"));
        assert_eq!(filter.min_cost_per_night, Some(Cents(5_000)));
        assert_eq!(filter.max_cost_per_night, Some(Cents(10_000)));
        assert!(filter.owner_id.is_none());
    }

    #[test]
    fn oversized_price_is_rejected() {
        let args = ListArgs {
            max_price: Some(u32::MAX),
            ..ListArgs::default()
        };
        assert!(args.to_filter().is_err());
    }

    #[test]
    fn reads_property_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"owner_id": 1, "title": "Loft", "cost_per_night": 9900,
                "city": "Vancouver", "country": "Canada", "number_of_bedrooms": 2}}"#
        )
        .unwrap();

        let property = read_property(file.path()).unwrap();
        assert_eq!(property.title, "Loft");
        assert_eq!(property.cost_per_night, Cents(9_900));
        assert_eq!(property.number_of_bedrooms, 2);
    }

    #[test]
    fn rejects_malformed_property_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"title\": ").unwrap();
        let err = read_property(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid property JSON"));
    }
}
