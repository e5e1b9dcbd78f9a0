//! Viewport-to-radius conversion for provider queries.
//!
//! The provider's search endpoint takes a center point and a radius, not a
//! bounding box, and only accepts radii between 1 km and 50 km. The covering
//! radius approximates the box's half-diagonal using flat-earth degree
//! scaling, which is plenty accurate at city-viewport sizes.

use roost_core::defaults::{METERS_PER_DEGREE, PROVIDER_MAX_RADIUS_M, PROVIDER_MIN_RADIUS_M};
use roost_core::BoundingBox;

/// Approximate covering radius for a bounding box, in meters, clamped to
/// the provider's accepted range.
///
/// 1 degree of latitude is ~111,000 m; 1 degree of longitude shrinks by
/// cos(latitude).
pub fn covering_radius_m(bounds: &BoundingBox) -> f64 {
    let (center_lat, _) = bounds.center();

    let lat_extent_m = (bounds.north - bounds.south).abs() * METERS_PER_DEGREE;
    let lng_extent_m =
        (bounds.east - bounds.west).abs() * METERS_PER_DEGREE * center_lat.to_radians().cos();

    let half_diagonal = (lat_extent_m * lat_extent_m + lng_extent_m * lng_extent_m).sqrt() / 2.0;

    half_diagonal.clamp(PROVIDER_MIN_RADIUS_M, PROVIDER_MAX_RADIUS_M)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(north: f64, south: f64, east: f64, west: f64) -> BoundingBox {
        BoundingBox {
            north,
            south,
            east,
            west,
        }
    }

    #[test]
    fn test_tiny_viewport_clamps_to_min() {
        // 0.001 degree span is ~111 m across, well under the 1 km floor.
        let bounds = boxed(48.8505, 48.8495, 2.3505, 2.3495);
        assert_eq!(covering_radius_m(&bounds), PROVIDER_MIN_RADIUS_M);
    }

    #[test]
    fn test_huge_viewport_clamps_to_max() {
        // 10 degree span is over 1,000 km, far past the 50 km ceiling.
        let bounds = boxed(53.0, 43.0, 7.0, -3.0);
        assert_eq!(covering_radius_m(&bounds), PROVIDER_MAX_RADIUS_M);
    }

    #[test]
    fn test_mid_size_viewport_is_unclamped() {
        // Roughly 0.2 degrees: ~22 km tall, half-diagonal lands between the
        // clamps.
        let bounds = boxed(48.95, 48.75, 2.45, 2.25);
        let radius = covering_radius_m(&bounds);
        assert!(radius > PROVIDER_MIN_RADIUS_M);
        assert!(radius < PROVIDER_MAX_RADIUS_M);
    }

    #[test]
    fn test_longitude_shrinks_toward_poles() {
        let equator = boxed(0.1, -0.1, 0.1, -0.1);
        let arctic = boxed(70.1, 69.9, 0.1, -0.1);
        assert!(covering_radius_m(&arctic) < covering_radius_m(&equator));
    }
}
