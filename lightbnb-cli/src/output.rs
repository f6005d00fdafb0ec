//! Output rendering shared by all commands

use anyhow::Result;
use clap::ValueEnum;
use lightbnb_db::{Property, PropertyListing, ReservationListing, User};
use serde::Serialize;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
}

/// Anything a command prints: JSON via serde, or one line per record.
pub trait Render: Serialize {
    fn human(&self) -> String;
}

pub fn emit<T: Render + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Human => println!("{}", value.human()),
    }
    Ok(())
}

fn rating(average: Option<f64>) -> String {
    average.map_or_else(|| "-".to_string(), |r| format!("{:.2}", r))
}

impl Render for User {
    fn human(&self) -> String {
        format!("#{} {} <{}>", self.id, self.name, self.email)
    }
}

impl Render for Property {
    fn human(&self) -> String {
        format!(
            "#{} {} - {}, {} - {}/night - {} bed, {} bath, {} parking (owner #{})",
            self.id,
            self.title,
            self.city,
            self.country,
            self.cost_per_night,
            self.number_of_bedrooms,
            self.number_of_bathrooms,
            self.parking_spaces,
            self.owner_id
        )
    }
}

impl Render for PropertyListing {
    fn human(&self) -> String {
        format!("{} - rating {}", self.property.human(), rating(self.average_rating))
    }
}

impl Render for ReservationListing {
    fn human(&self) -> String {
        format!(
            "reservation #{} from {}: {} ({}) - {}/night - rating {}",
            self.id,
            self.start_date,
            self.property.title,
            self.property.city,
            self.property.cost_per_night,
            rating(self.average_rating)
        )
    }
}

impl<T: Render> Render for [T] {
    fn human(&self) -> String {
        if self.is_empty() {
            return "(none)".to_string();
        }
        self.iter().map(Render::human).collect::<Vec<_>>().join("\n")
    }
}

impl<T: Render> Render for Vec<T> {
    fn human(&self) -> String {
        self.as_slice().human()
    }
}
