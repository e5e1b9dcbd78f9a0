//! Bootstrap seeding of the place table.
//!
//! Seeds a small static catalog of sample hospitality places on first
//! startup so the map is not empty before any provider fetch has happened.
//! Seeded ids are human-chosen slugs, keeping them in a separate namespace
//! from provider-derived `fs_` ids. Seeding goes through the same upsert
//! path as provider results, so re-running it is harmless.

use chrono::Utc;
use tracing::info;

use roost_core::{Place, PlaceRepository, PriceRange, Result};

struct SeedPlace {
    id: &'static str,
    name: &'static str,
    place_type: &'static str,
    address: &'static str,
    city: &'static str,
    country: &'static str,
    latitude: f64,
    longitude: f64,
    rating: f64,
    price_range: PriceRange,
    amenities: &'static [&'static str],
    description: &'static str,
    image_url: &'static str,
}

const SEED_PLACES: &[SeedPlace] = &[
    SeedPlace {
        id: "hotel-paris-1",
        name: "Le Grand Hotel Paris",
        place_type: "hotel",
        address: "12 Boulevard des Capucines",
        city: "Paris",
        country: "France",
        latitude: 48.8698,
        longitude: 2.3320,
        rating: 4.7,
        price_range: PriceRange::Upscale,
        amenities: &["WiFi", "Pool", "Spa", "Restaurant", "Bar", "Gym"],
        description: "Luxury hotel in the heart of Paris with elegant rooms and world-class amenities.",
        image_url: "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?w=800",
    },
    SeedPlace {
        id: "bnb-london-1",
        name: "Cozy Camden Loft",
        place_type: "apartment",
        address: "45 Camden High Street",
        city: "London",
        country: "UK",
        latitude: 51.5390,
        longitude: -0.1426,
        rating: 4.5,
        price_range: PriceRange::Moderate,
        amenities: &["WiFi", "Kitchen", "Workspace"],
        description: "Modern apartment in vibrant Camden with great transport links.",
        image_url: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800",
    },
    SeedPlace {
        id: "resort-bali-1",
        name: "Ubud Jungle Resort",
        place_type: "resort",
        address: "Jalan Raya Ubud",
        city: "Ubud",
        country: "Indonesia",
        latitude: -8.5069,
        longitude: 115.2625,
        rating: 4.9,
        price_range: PriceRange::Luxury,
        amenities: &["WiFi", "Pool", "Spa", "Restaurant", "Yoga", "Nature Tours"],
        description: "Stunning resort surrounded by lush jungle and rice terraces.",
        image_url: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?w=800",
    },
    SeedPlace {
        id: "hostel-barcelona-1",
        name: "Barcelona Beach Hostel",
        place_type: "hostel",
        address: "Carrer de la Marina",
        city: "Barcelona",
        country: "Spain",
        latitude: 41.3874,
        longitude: 2.1898,
        rating: 4.2,
        price_range: PriceRange::Budget,
        amenities: &["WiFi", "Kitchen", "Common Area", "Bar"],
        description: "Social hostel steps from the beach with friendly atmosphere.",
        image_url: "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?w=800",
    },
    SeedPlace {
        id: "villa-tuscany-1",
        name: "Tuscan Villa Retreat",
        place_type: "villa",
        address: "Via delle Colline",
        city: "Florence",
        country: "Italy",
        latitude: 43.7696,
        longitude: 11.2558,
        rating: 4.8,
        price_range: PriceRange::Luxury,
        amenities: &["WiFi", "Pool", "Garden", "Kitchen", "Parking"],
        description: "Charming villa in Tuscan countryside with vineyard views.",
        image_url: "https://images.unsplash.com/photo-1564501049412-61c2a3083791?w=800",
    },
    SeedPlace {
        id: "hotel-tokyo-1",
        name: "Tokyo Central Hotel",
        place_type: "hotel",
        address: "1-1-1 Shibuya",
        city: "Tokyo",
        country: "Japan",
        latitude: 35.6594,
        longitude: 139.7005,
        rating: 4.6,
        price_range: PriceRange::Upscale,
        amenities: &["WiFi", "Restaurant", "Bar", "Gym", "Business Center"],
        description: "Modern hotel in bustling Shibuya with excellent transit access.",
        image_url: "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=800",
    },
    SeedPlace {
        id: "bnb-nyc-1",
        name: "Brooklyn Brownstone",
        place_type: "apartment",
        address: "123 Prospect Place",
        city: "New York",
        country: "USA",
        latitude: 40.6782,
        longitude: -73.9442,
        rating: 4.4,
        price_range: PriceRange::Moderate,
        amenities: &["WiFi", "Kitchen", "Workspace", "Laundry"],
        description: "Classic Brooklyn brownstone with authentic NYC charm.",
        image_url: "https://images.unsplash.com/photo-1502672260066-6bc35f0a1eef?w=800",
    },
    SeedPlace {
        id: "hotel-la-1",
        name: "Beverly Hills Luxury Hotel",
        place_type: "hotel",
        address: "9876 Wilshire Boulevard",
        city: "Los Angeles",
        country: "USA",
        latitude: 34.0730,
        longitude: -118.4000,
        rating: 4.8,
        price_range: PriceRange::Luxury,
        amenities: &["WiFi", "Pool", "Spa", "Restaurant", "Bar", "Valet"],
        description: "Iconic Beverly Hills hotel with Hollywood glamour and luxury.",
        image_url: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800",
    },
    SeedPlace {
        id: "hostel-amsterdam-1",
        name: "Amsterdam Canal Hostel",
        place_type: "hostel",
        address: "Prinsengracht 123",
        city: "Amsterdam",
        country: "Netherlands",
        latitude: 52.3676,
        longitude: 4.9041,
        rating: 4.3,
        price_range: PriceRange::Budget,
        amenities: &["WiFi", "Kitchen", "Common Area", "Bike Rental"],
        description: "Cozy hostel on a picturesque canal in the heart of Amsterdam.",
        image_url: "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=800",
    },
    SeedPlace {
        id: "resort-maldives-1",
        name: "Maldives Ocean Resort",
        place_type: "resort",
        address: "North Male Atoll",
        city: "Male",
        country: "Maldives",
        latitude: 4.1755,
        longitude: 73.5093,
        rating: 5.0,
        price_range: PriceRange::Luxury,
        amenities: &["WiFi", "Pool", "Spa", "Restaurant", "Water Sports", "Diving"],
        description: "Exclusive overwater villas with pristine beaches and crystal waters.",
        image_url: "https://images.unsplash.com/photo-1514282401047-d79a71a590e8?w=800",
    },
    SeedPlace {
        id: "hotel-dubai-1",
        name: "Dubai Marina Tower Hotel",
        place_type: "hotel",
        address: "Dubai Marina Walk",
        city: "Dubai",
        country: "UAE",
        latitude: 25.0801,
        longitude: 55.1397,
        rating: 4.7,
        price_range: PriceRange::Upscale,
        amenities: &["WiFi", "Pool", "Spa", "Restaurant", "Bar", "Beach Access"],
        description: "Luxurious hotel with stunning marina views and world-class facilities.",
        image_url: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=800",
    },
    SeedPlace {
        id: "hotel-singapore-1",
        name: "Marina Bay Grand Hotel",
        place_type: "hotel",
        address: "10 Bayfront Avenue",
        city: "Singapore",
        country: "Singapore",
        latitude: 1.2838,
        longitude: 103.8607,
        rating: 4.8,
        price_range: PriceRange::Luxury,
        amenities: &["WiFi", "Pool", "Spa", "Restaurant", "Bar", "Casino", "Rooftop"],
        description: "Iconic hotel with rooftop infinity pool and stunning skyline views.",
        image_url: "https://images.unsplash.com/photo-1495365200479-c4ed1d35e1aa?w=800",
    },
];

/// Build the static sample catalog as canonical places.
pub fn sample_places() -> Vec<Place> {
    let now = Utc::now();
    SEED_PLACES
        .iter()
        .map(|s| Place {
            id: s.id.to_string(),
            name: s.name.to_string(),
            place_type: Some(s.place_type.to_string()),
            address: Some(s.address.to_string()),
            city: Some(s.city.to_string()),
            country: Some(s.country.to_string()),
            latitude: s.latitude,
            longitude: s.longitude,
            rating: Some(s.rating),
            price_range: Some(s.price_range),
            amenities: s.amenities.iter().map(|a| a.to_string()).collect(),
            description: Some(s.description.to_string()),
            image_url: Some(s.image_url.to_string()),
            created_at: now,
        })
        .collect()
}

/// Insert the sample catalog if the place table is empty.
///
/// Returns the number of places inserted (zero when the table already has
/// data).
pub async fn seed_if_empty(repo: &dyn PlaceRepository) -> Result<usize> {
    if repo.count().await? > 0 {
        return Ok(0);
    }

    let places = sample_places();
    repo.upsert(&places).await?;

    info!(
        subsystem = "db",
        component = "seed",
        op = "bootstrap",
        result_count = places.len(),
        "Seeded sample places"
    );
    Ok(places.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_has_unique_ids() {
        let places = sample_places();
        let mut ids: Vec<_> = places.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), places.len());
    }

    #[test]
    fn test_sample_catalog_coordinates_are_valid() {
        for place in sample_places() {
            assert!(place.has_valid_coordinates(), "bad coords on {}", place.id);
        }
    }

    #[test]
    fn test_sample_catalog_ids_are_not_provider_namespaced() {
        for place in sample_places() {
            assert!(
                !place.id.starts_with(roost_core::defaults::PROVIDER_ID_PREFIX),
                "seed id {} collides with provider namespace",
                place.id
            );
        }
    }
}
