use crate::geom::rect_to_polygon;
use crate::index::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The bounding box of a decoded Plus Code.
///
/// Holds the lower-left and upper-right corners plus the derived center, all
/// in WGS84 degrees. Lower bounds are inclusive, upper bounds exclusive.
/// The center is always derived from the bounds, including when deserializing.
///
/// # Example
///
/// ```
/// use plus_codes_rs::decode;
///
/// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
/// let area = decode("8FVC2222+22")?;
/// assert!(area.contains(47.0000625, 8.0000625));
/// assert!(!area.contains(area.latitude_hi, area.longitude_hi));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "AreaBounds")]
pub struct CodeArea {
    /// Southern edge in degrees (inclusive)
    pub latitude_lo: f64,
    /// Western edge in degrees (inclusive)
    pub longitude_lo: f64,
    /// Northern edge in degrees (exclusive)
    pub latitude_hi: f64,
    /// Eastern edge in degrees (exclusive)
    pub longitude_hi: f64,
    /// Number of significant digits that produced this area (2-15)
    pub code_length: usize,
    latitude_center: f64,
    longitude_center: f64,
}

#[derive(Deserialize)]
struct AreaBounds {
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    code_length: usize,
}

impl From<AreaBounds> for CodeArea {
    fn from(b: AreaBounds) -> Self {
        Self::new(
            b.latitude_lo,
            b.longitude_lo,
            b.latitude_hi,
            b.longitude_hi,
            b.code_length,
        )
    }
}

impl CodeArea {
    pub(crate) fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            code_length,
            latitude_center: (latitude_lo + (latitude_hi - latitude_lo) / 2.0).min(LATITUDE_MAX),
            longitude_center: (longitude_lo + (longitude_hi - longitude_lo) / 2.0)
                .min(LONGITUDE_MAX),
        }
    }

    /// Latitude of the center, capped at 90.
    pub fn latitude_center(&self) -> f64 {
        self.latitude_center
    }

    /// Longitude of the center, capped at 180.
    pub fn longitude_center(&self) -> f64 {
        self.longitude_center
    }

    /// Height of the area in degrees of latitude.
    pub fn latitude_height(&self) -> f64 {
        self.latitude_hi - self.latitude_lo
    }

    /// Width of the area in degrees of longitude.
    pub fn longitude_width(&self) -> f64 {
        self.longitude_hi - self.longitude_lo
    }

    /// Returns true if the point lies inside the area.
    ///
    /// The southern and western edges belong to the area, the northern and
    /// eastern edges belong to the neighbouring cells.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.latitude_lo <= latitude
            && latitude < self.latitude_hi
            && self.longitude_lo <= longitude
            && longitude < self.longitude_hi
    }

    /// Returns the center as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude_center, self.latitude_center)
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude_lo, y: self.latitude_lo },
            coord! { x: self.longitude_hi, y: self.latitude_hi },
        )
    }

    /// Converts the area to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        rect_to_polygon(&self.to_rect())
    }
}
