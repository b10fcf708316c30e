mod normalize;

pub use normalize::{check_finite, clip_latitude, normalize_longitude};

use geo_types::Point;

/// Trait for types that can provide WGS84 coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`, both in
/// `(longitude, latitude)` order so they line up with GeoJSON and WKT.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
