//! Normalization of provider-native place records into the canonical schema.
//!
//! Pure functions only: a provider record either maps to a [`Place`] or to
//! `None` (missing id, missing name, or unresolvable coordinates), and the
//! caller drops the `None`s without aborting the batch.

use chrono::Utc;
use serde::Deserialize;

use roost_core::defaults::PROVIDER_ID_PREFIX;
use roost_core::{Place, PriceRange};

/// Fallback type label when the provider supplies no category.
const DEFAULT_TYPE: &str = "accommodation";

/// Description used when no provider fields are available to build one.
const DEFAULT_DESCRIPTION: &str = "Hospitality accommodation available for booking.";

// ─── Raw provider record shapes ────────────────────────────────────────────

/// Top-level provider search response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSearchResponse {
    #[serde(default)]
    pub results: Vec<ProviderPlace>,
}

/// A single provider-native place record. Every field is optional; the
/// normalizer decides what is fatal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderPlace {
    #[serde(default)]
    pub fsq_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub geocodes: Option<ProviderGeocodes>,
    #[serde(default)]
    pub categories: Vec<ProviderCategory>,
    #[serde(default)]
    pub location: Option<ProviderLocation>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Distance from the query center in meters, when supplied.
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderGeocodes {
    #[serde(default)]
    pub main: Option<ProviderLatLng>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderLatLng {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderCategory {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

// ─── Normalization ─────────────────────────────────────────────────────────

/// Convert a provider record into a canonical place, or `None` if the
/// record lacks an id, a name, or resolvable in-range coordinates.
pub fn normalize(raw: &ProviderPlace) -> Option<Place> {
    let fsq_id = raw.fsq_id.as_deref().filter(|s| !s.is_empty())?;
    let name = raw.name.as_deref().filter(|s| !s.is_empty())?;

    let geocode = raw.geocodes.as_ref()?.main.as_ref()?;
    let latitude = geocode.latitude?;
    let longitude = geocode.longitude?;
    if !latitude.is_finite()
        || !longitude.is_finite()
        || !(-90.0..=90.0).contains(&latitude)
        || !(-180.0..=180.0).contains(&longitude)
    {
        return None;
    }

    // Stable upsert key, namespaced away from locally-seeded slugs.
    let id = format!("{}{}", PROVIDER_ID_PREFIX, fsq_id);

    let place_type = raw
        .categories
        .first()
        .and_then(|c| c.name.clone())
        .unwrap_or_else(|| DEFAULT_TYPE.to_string());

    let location = raw.location.clone().unwrap_or_default();
    let address = location.address.unwrap_or_default();
    let city = location
        .locality
        .or(location.region)
        .unwrap_or_default();
    let country = location.country.unwrap_or_default();

    Some(Place {
        id,
        name: name.to_string(),
        place_type: Some(place_type.clone()),
        address: Some(address),
        city: Some(city),
        country: Some(country),
        latitude,
        longitude,
        rating: raw.rating,
        price_range: Some(estimate_price_range(&place_type)),
        amenities: extract_amenities(raw),
        description: Some(build_description(raw)),
        image_url: Some(image_url_for_type(&place_type).to_string()),
        created_at: Utc::now(),
    })
}

/// Estimate a price tier from the place type.
///
/// A deterministic keyword heuristic, not an authoritative price. The match
/// order is load-bearing: "resort"/"luxury" outranks "hotel", and "hotel"
/// outranks "bed"/"breakfast".
pub fn estimate_price_range(place_type: &str) -> PriceRange {
    let t = place_type.to_lowercase();

    if t.contains("hostel") {
        return PriceRange::Budget;
    }
    if t.contains("motel") {
        return PriceRange::Moderate;
    }
    if t.contains("resort") || t.contains("luxury") {
        return PriceRange::Luxury;
    }
    if t.contains("hotel") {
        return PriceRange::Upscale;
    }
    if t.contains("bed") || t.contains("breakfast") {
        return PriceRange::Moderate;
    }

    PriceRange::Moderate
}

/// Build a short description from whatever the provider supplied:
/// "{category} in {city} {distance}m away." with missing parts skipped,
/// or a generic sentence when nothing is available.
fn build_description(raw: &ProviderPlace) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(category) = raw.categories.first().and_then(|c| c.name.as_deref()) {
        parts.push(category.to_string());
    }

    if let Some(locality) = raw
        .location
        .as_ref()
        .and_then(|l| l.locality.as_deref())
        .filter(|l| !l.is_empty())
    {
        parts.push(format!("in {}", locality));
    }

    // A zero distance means "at the query center" and reads wrong; skip it.
    if let Some(distance) = raw.distance.filter(|d| *d > 0.0) {
        parts.push(format!("{}m away", distance.round() as i64));
    }

    if parts.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        format!("{}.", parts.join(" "))
    }
}

/// Seed amenities from the category list: hotel categories get front-desk
/// tags, resort categories get leisure tags, and everything gets WiFi.
fn extract_amenities(raw: &ProviderPlace) -> Vec<String> {
    let mut amenities: Vec<String> = Vec::new();

    let has_category = |needle: &str| {
        raw.categories
            .iter()
            .any(|c| c.name.as_deref().is_some_and(|n| n.contains(needle)))
    };

    if has_category("Hotel") {
        amenities.push("Room Service".to_string());
        amenities.push("Reception".to_string());
    }
    if has_category("Resort") {
        amenities.push("Pool".to_string());
        amenities.push("Spa".to_string());
        amenities.push("Restaurant".to_string());
    }

    amenities.push("WiFi".to_string());
    amenities
}

/// Placeholder image per place type; the provider's free tier rarely
/// includes photos.
fn image_url_for_type(place_type: &str) -> &'static str {
    let t = place_type.to_lowercase();

    if t.contains("hotel") {
        return "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?w=800";
    }
    if t.contains("hostel") {
        return "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?w=800";
    }
    if t.contains("resort") {
        return "https://images.unsplash.com/photo-1537996194471-e657df975ab4?w=800";
    }
    if t.contains("bed") || t.contains("breakfast") {
        return "https://images.unsplash.com/photo-1564501049412-61c2a3083791?w=800";
    }

    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?w=800"
}
