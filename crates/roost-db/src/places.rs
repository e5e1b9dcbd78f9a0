//! Place repository implementation.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;

use roost_core::{Error, Place, PlaceQuery, PlaceRepository, PriceRange, Result};

use crate::escape_like;

/// PostgreSQL implementation of PlaceRepository.
pub struct PgPlaceRepository {
    pool: Pool<Postgres>,
}

impl PgPlaceRepository {
    /// Create a new PgPlaceRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

const PLACE_COLUMNS: &str = "id, name, type, address, city, country, latitude, longitude, \
                             rating, price_range, amenities, description, image_url, created_at";

fn place_from_row(row: &PgRow) -> Place {
    // Stored amenities are JSON text; a missing or corrupt value reads as
    // an empty list rather than failing the whole query.
    let amenities: Vec<String> = row
        .get::<Option<String>, _>("amenities")
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    let price_range = row
        .get::<Option<String>, _>("price_range")
        .and_then(|s| PriceRange::from_symbol(&s));

    Place {
        id: row.get("id"),
        name: row.get("name"),
        place_type: row.get("type"),
        address: row.get("address"),
        city: row.get("city"),
        country: row.get("country"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        rating: row.get("rating"),
        price_range,
        amenities,
        description: row.get("description"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn query(&self, query: &PlaceQuery) -> Result<Vec<Place>> {
        let bounds = &query.bounds;

        let rows = if let Some(term) = query.effective_term() {
            let pattern = format!("%{}%", escape_like(term));
            sqlx::query(&format!(
                r#"
                SELECT {PLACE_COLUMNS}
                FROM place
                WHERE latitude BETWEEN $1 AND $2
                  AND longitude BETWEEN $3 AND $4
                  AND (name ILIKE $5 OR type ILIKE $5 OR city ILIKE $5)
                ORDER BY id
                LIMIT $6
                "#
            ))
            .bind(bounds.south)
            .bind(bounds.north)
            .bind(bounds.west)
            .bind(bounds.east)
            .bind(pattern)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?
        } else {
            sqlx::query(&format!(
                r#"
                SELECT {PLACE_COLUMNS}
                FROM place
                WHERE latitude BETWEEN $1 AND $2
                  AND longitude BETWEEN $3 AND $4
                ORDER BY id
                LIMIT $5
                "#
            ))
            .bind(bounds.south)
            .bind(bounds.north)
            .bind(bounds.west)
            .bind(bounds.east)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?
        };

        debug!(
            subsystem = "db",
            component = "places",
            op = "query",
            result_count = rows.len(),
            "Queried places in bounds"
        );

        Ok(rows.iter().map(place_from_row).collect())
    }

    async fn upsert(&self, places: &[Place]) -> Result<()> {
        if places.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        for place in places {
            let amenities = serde_json::to_string(&place.amenities)?;

            // created_at is set on first insert only; the conflict arm
            // refreshes every other mutable field.
            sqlx::query(
                r#"
                INSERT INTO place (
                    id, name, type, address, city, country,
                    latitude, longitude, rating, price_range,
                    amenities, description, image_url, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                ON CONFLICT (id) DO UPDATE SET
                    name = EXCLUDED.name,
                    type = EXCLUDED.type,
                    address = EXCLUDED.address,
                    city = EXCLUDED.city,
                    country = EXCLUDED.country,
                    latitude = EXCLUDED.latitude,
                    longitude = EXCLUDED.longitude,
                    rating = EXCLUDED.rating,
                    price_range = EXCLUDED.price_range,
                    amenities = EXCLUDED.amenities,
                    description = EXCLUDED.description,
                    image_url = EXCLUDED.image_url
                "#,
            )
            .bind(&place.id)
            .bind(&place.name)
            .bind(&place.place_type)
            .bind(&place.address)
            .bind(&place.city)
            .bind(&place.country)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(place.rating)
            .bind(place.price_range.map(|p| p.as_str()))
            .bind(amenities)
            .bind(&place.description)
            .bind(&place.image_url)
            .bind(place.created_at)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;
        }

        tx.commit().await.map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "places",
            op = "upsert",
            result_count = places.len(),
            "Upserted place batch"
        );

        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Place>> {
        let row = sqlx::query(&format!(
            "SELECT {PLACE_COLUMNS} FROM place WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.as_ref().map(place_from_row))
    }

    async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM place")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(row.get("n"))
    }
}
