use crate::error::PlusCodeError;
use crate::index::constants::{LATITUDE_MAX, LONGITUDE_MAX};

/// Clips a latitude into the range -90 to 90.
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Normalizes a longitude into the range -180 (inclusive) to 180 (exclusive).
///
/// ```
/// use plus_codes_rs::coord::normalize_longitude;
///
/// assert_eq!(normalize_longitude(185.0), -175.0);
/// assert_eq!(normalize_longitude(-905.0), 175.0);
/// assert_eq!(normalize_longitude(180.0), -180.0);
/// ```
pub fn normalize_longitude(longitude: f64) -> f64 {
    if (-LONGITUDE_MAX..LONGITUDE_MAX).contains(&longitude) {
        return longitude;
    }
    let circle = 2.0 * LONGITUDE_MAX;
    let wrapped = (longitude + LONGITUDE_MAX).rem_euclid(circle) - LONGITUDE_MAX;
    // rem_euclid can round up to the divisor for values just below a multiple of 360
    if wrapped >= LONGITUDE_MAX {
        wrapped - circle
    } else {
        wrapped
    }
}

/// Rejects NaN and infinite coordinates.
pub fn check_finite(latitude: f64, longitude: f64) -> Result<(), PlusCodeError> {
    if latitude.is_finite() && longitude.is_finite() {
        Ok(())
    } else {
        Err(PlusCodeError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }
}
