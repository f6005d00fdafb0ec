//! Property records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{limit_text, non_negative, require_text};
use super::{Cents, ValidationError};

/// Width of the VARCHAR property columns
const MAX_COLUMN_LEN: usize = 255;

/// Property record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Property with its average review rating, as listed to guests
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Input for a new property listing (all 14 columns)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    #[serde(default)]
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub post_code: String,
    pub country: String,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
}

impl NewProperty {
    /// Check required text and non-negative counters.
    ///
    /// Values are not rewritten, so the inserted row echoes the input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, MAX_COLUMN_LEN)?;
        require_text("city", &self.city, MAX_COLUMN_LEN)?;
        require_text("country", &self.country, MAX_COLUMN_LEN)?;

        for (field, value) in [
            ("thumbnail_photo_url", &self.thumbnail_photo_url),
            ("cover_photo_url", &self.cover_photo_url),
            ("street", &self.street),
            ("province", &self.province),
            ("post_code", &self.post_code),
        ] {
            limit_text(field, value, MAX_COLUMN_LEN)?;
        }

        non_negative("cost_per_night", self.cost_per_night.get())?;
        non_negative("parking_spaces", self.parking_spaces)?;
        non_negative("number_of_bathrooms", self.number_of_bathrooms)?;
        non_negative("number_of_bedrooms", self.number_of_bedrooms)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_property(owner_id: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: "Speed lamp".into(),
        description: "description".into(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".into(),
        cover_photo_url: "https://images.example.com/cover.jpg".into(),
        cost_per_night: Cents(93_061),
        street: "536 Namsub Highway".into(),
        city: "Sotboske".into(),
        province: "Quebec".into(),
        post_code: "28142".into(),
        country: "Canada".into(),
        parking_spaces: 6,
        number_of_bathrooms: 4,
        number_of_bedrooms: 8,
    }
}
