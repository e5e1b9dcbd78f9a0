//! Canonical data model for roost.
//!
//! A [`Place`] is the single persisted entity of the core: a hospitality
//! location (hotel, hostel, resort, ...) with geographic coordinates and
//! descriptive metadata. Places are created either by bootstrap seeding or
//! by normalizing an external provider record, and are only ever mutated
//! through the repository's batch upsert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Price tier for a place, from cheapest to most expensive.
///
/// The wire and storage representation is the dollar-sign symbol
/// (`$` .. `$$$$`), matching what the frontend renders directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// The symbol persisted in the store and returned over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Upscale => "$$$",
            PriceRange::Luxury => "$$$$",
        }
    }

    /// Parse a stored symbol back into a tier. Unknown symbols map to `None`
    /// rather than an error so a hand-edited row cannot poison reads.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "$" => Some(PriceRange::Budget),
            "$$" => Some(PriceRange::Moderate),
            "$$$" => Some(PriceRange::Upscale),
            "$$$$" => Some(PriceRange::Luxury),
            _ => None,
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical place record.
///
/// `id` is globally unique and stable across requests: seeded places use a
/// human-chosen slug (`hotel-paris-1`), provider-sourced places use a fixed
/// prefix plus the provider's native id (`fs_<fsq_id>`) so repeated fetches
/// of the same real-world place upsert instead of duplicating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub price_range: Option<PriceRange>,
    /// Always materialized as a list for consumers; the store serializes it.
    #[serde(default)]
    pub amenities: Vec<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Set once at first insert; never touched by subsequent upserts.
    pub created_at: DateTime<Utc>,
}

impl Place {
    /// Check that the coordinates are finite and within world bounds.
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Rectangular geographic viewport in degrees.
///
/// Antimeridian-crossing boxes are out of scope: `west <= east` always.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Validate the box: all four fields finite, within world bounds,
    /// `south <= north` and `west <= east`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("north", self.north),
            ("south", self.south),
            ("east", self.east),
            ("west", self.west),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "bounds.{} must be a finite number",
                    name
                )));
            }
        }
        if !(-90.0..=90.0).contains(&self.north) || !(-90.0..=90.0).contains(&self.south) {
            return Err(Error::InvalidInput(
                "bounds latitudes must be within [-90, 90]".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&self.east) || !(-180.0..=180.0).contains(&self.west) {
            return Err(Error::InvalidInput(
                "bounds longitudes must be within [-180, 180]".to_string(),
            ));
        }
        if self.south > self.north {
            return Err(Error::InvalidInput(
                "bounds.south must not exceed bounds.north".to_string(),
            ));
        }
        if self.west > self.east {
            return Err(Error::InvalidInput(
                "bounds.west must not exceed bounds.east (wraparound not supported)".to_string(),
            ));
        }
        Ok(())
    }

    /// Center point as `(latitude, longitude)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Inclusive containment check, matching the store's range filter.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.south..=self.north).contains(&latitude)
            && (self.west..=self.east).contains(&longitude)
    }
}

/// Raw bounds as received over the wire, before validation.
///
/// Each field is optional so a missing or partial `bounds` object produces
/// a clean client-input error instead of a body-deserialization failure.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BoundingBoxInput {
    pub north: Option<f64>,
    pub south: Option<f64>,
    pub east: Option<f64>,
    pub west: Option<f64>,
}

impl BoundingBoxInput {
    /// Require all four fields and validate the resulting box.
    pub fn into_bounds(self) -> Result<BoundingBox> {
        let bounds = BoundingBox {
            north: self
                .north
                .ok_or_else(|| Error::InvalidInput("bounds.north is required".to_string()))?,
            south: self
                .south
                .ok_or_else(|| Error::InvalidInput("bounds.south is required".to_string()))?,
            east: self
                .east
                .ok_or_else(|| Error::InvalidInput("bounds.east is required".to_string()))?,
            west: self
                .west
                .ok_or_else(|| Error::InvalidInput("bounds.west is required".to_string()))?,
        };
        bounds.validate()?;
        Ok(bounds)
    }
}
