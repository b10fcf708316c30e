use crate::area::CodeArea;
use crate::coord::Coordinate;
use crate::error::PlusCodeError;
use crate::index::{decode, encode, is_full, is_padded, latitude_precision, shorten};
use crate::io::arrow::PlusCodesToArrow;
use crate::io::parquet::PlusCodesToGeoParquet;
use arrow_array::RecordBatch;
use geo::Centroid;
use geo_types::{Geometry, LineString, Point, Polygon, Rect};
use geoarrow_array::array::{PointArray, PolygonArray};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// A single Plus Code together with the area it decodes to.
///
/// Serializes as the bare code string. Deserializing goes through
/// [`PlusCode::from_code`], so only valid full codes are accepted.
///
/// # Example
///
/// ```
/// use plus_codes_rs::PlusCode;
///
/// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
/// // (longitude, latitude)
/// let code = PlusCode::from_wgs84(&(2.7821875, 20.3700625), 10)?;
/// assert_eq!(code.to_string(), "7FG49QCJ+2V");
/// assert!(code.contains(&(2.7821875, 20.3700625)));
///
/// // Cell outline for GIS work
/// let polygon = code.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlusCode {
    /// Upper case full code, e.g. `7FG49QCJ+2V`
    pub code: String,
    /// Decoded bounding box
    pub area: CodeArea,
}

impl PlusCode {
    /// Creates a PlusCode from a WGS84 coordinate (x = longitude, y = latitude).
    ///
    /// # Example
    /// ```
    /// use plus_codes_rs::PlusCode;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
    /// let from_tuple = PlusCode::from_wgs84(&(8.0000625, 47.0000625), 10)?;
    /// let from_point = PlusCode::from_wgs84(&Point::new(8.0000625, 47.0000625), 10)?;
    /// assert_eq!(from_tuple, from_point);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, code_length: usize) -> Result<Self, PlusCodeError> {
        Self::from_lat_lng(coord.y(), coord.x(), code_length)
    }

    pub fn from_lat_lng(
        latitude: f64,
        longitude: f64,
        code_length: usize,
    ) -> Result<Self, PlusCodeError> {
        let code = encode(latitude, longitude, code_length)?;
        let area = decode(&code)?;
        Ok(Self { code, area })
    }

    /// Creates a PlusCode from a full code string, in any case.
    ///
    /// # Example
    /// ```
    /// use plus_codes_rs::PlusCode;
    ///
    /// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
    /// let code = PlusCode::from_code("7fg49qcj+2v")?;
    /// assert_eq!(code.code, "7FG49QCJ+2V");
    /// assert!(PlusCode::from_code("9QCJ+2V").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, PlusCodeError> {
        if !is_full(code) {
            return Err(PlusCodeError::InvalidFullCode(code.to_string()));
        }
        let code = code.to_ascii_uppercase();
        let area = decode(&code)?;
        Ok(Self { code, area })
    }

    /// Creates PlusCodes along a LineString in WGS84 coordinates.
    ///
    /// Samples each segment at half the cell height and returns every distinct
    /// code the line passes through, in order of first contact.
    pub fn from_line_string(
        line: &LineString,
        code_length: usize,
    ) -> Result<Vec<Self>, PlusCodeError> {
        let step_size = latitude_precision(code_length) * 0.5;

        let mut seen: HashSet<String> = HashSet::with_capacity(line.0.len());
        let mut codes: Vec<PlusCode> = Vec::with_capacity(line.0.len());

        // Only cells not seen before are decoded
        let mut visit = |x: f64, y: f64| -> Result<(), PlusCodeError> {
            let code = encode(y, x, code_length)?;
            if !seen.contains(&code) {
                let area = decode(&code)?;
                seen.insert(code.clone());
                codes.push(PlusCode { code, area });
            }
            Ok(())
        };

        if let [only] = line.0.as_slice() {
            visit(only.x, only.y)?;
        }

        for window in line.0.windows(2) {
            let start = &window[0];
            let end = &window[1];

            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let segment_length = (dx * dx + dy * dy).sqrt();
            let steps = (segment_length / step_size).ceil() as usize;

            for i in 0..=steps {
                let t = if steps == 0 {
                    0.0
                } else {
                    i as f64 / steps as f64
                };
                visit(start.x + t * dx, start.y + t * dy)?;
            }
        }

        debug!(
            vertices = line.0.len(),
            codes = codes.len(),
            code_length,
            "sampled line string"
        );
        Ok(codes)
    }

    /// Creates PlusCodes from an arbitrary `geo_types::Geometry` in WGS84.
    ///
    /// Points map directly, areal geometries through their centroid, lines by
    /// sampling and collections recursively. Empty geometries produce no codes.
    pub fn from_geometry(
        geom: Geometry<f64>,
        code_length: usize,
    ) -> Result<Vec<Self>, PlusCodeError> {
        match geom {
            Geometry::Point(pt) => Ok(vec![Self::from_wgs84(&pt, code_length)?]),
            Geometry::MultiPoint(mp) => mp
                .0
                .iter()
                .map(|pt| Self::from_wgs84(pt, code_length))
                .collect(),
            Geometry::Line(line) => {
                Self::from_line_string(&LineString::from(vec![line.start, line.end]), code_length)
            }
            Geometry::LineString(line) => Self::from_line_string(&line, code_length),
            Geometry::MultiLineString(mls) => {
                let mut all_codes = Vec::new();
                for line in &mls.0 {
                    all_codes.extend(Self::from_line_string(line, code_length)?);
                }
                Ok(all_codes)
            }
            Geometry::Polygon(poly) => Self::from_centroid(poly.centroid(), code_length),
            Geometry::MultiPolygon(mp) => {
                let mut codes = Vec::new();
                for poly in &mp.0 {
                    codes.extend(Self::from_centroid(poly.centroid(), code_length)?);
                }
                Ok(codes)
            }
            Geometry::Rect(rect) => Self::from_centroid(Some(rect.centroid()), code_length),
            Geometry::Triangle(tri) => Self::from_centroid(Some(tri.centroid()), code_length),
            Geometry::GeometryCollection(gc) => {
                let mut all_codes = Vec::new();
                for g in gc.0 {
                    all_codes.extend(Self::from_geometry(g, code_length)?);
                }
                Ok(all_codes)
            }
        }
    }

    fn from_centroid(
        centroid: Option<Point<f64>>,
        code_length: usize,
    ) -> Result<Vec<Self>, PlusCodeError> {
        match centroid {
            Some(pt) => Ok(vec![Self::from_wgs84(&pt, code_length)?]),
            None => {
                warn!("skipping empty geometry with no centroid");
                Ok(vec![])
            }
        }
    }

    /// Number of significant digits (padding and separator excluded).
    pub fn code_length(&self) -> usize {
        self.area.code_length
    }

    pub fn is_padded(&self) -> bool {
        is_padded(&self.code)
    }

    /// Returns true if the coordinate (x = longitude, y = latitude) falls in this code's area.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.area.contains(coord.y(), coord.x())
    }

    pub fn center(&self) -> Point<f64> {
        self.area.center()
    }

    pub fn to_rect(&self) -> Rect<f64> {
        self.area.to_rect()
    }

    /// Converts this code's area to a rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.area.to_polygon()
    }

    /// Shortens this code relative to a nearby reference coordinate.
    ///
    /// # Example
    /// ```
    /// use plus_codes_rs::PlusCode;
    ///
    /// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
    /// let code = PlusCode::from_code("9C3W9QCJ+2VX")?;
    /// assert_eq!(code.shorten(&(-1.217765625, 51.3852125))?, "9QCJ+2VX");
    /// # Ok(())
    /// # }
    /// ```
    pub fn shorten(&self, reference: &impl Coordinate) -> Result<String, PlusCodeError> {
        shorten(&self.code, reference.y(), reference.x())
    }

    /// Converts this code's center to an Arrow PointArray.
    pub fn to_arrow_points(&self) -> PointArray {
        std::slice::from_ref(self).to_arrow_points()
    }

    /// Converts this code's area to an Arrow PolygonArray.
    pub fn to_arrow_polygons(&self) -> PolygonArray {
        std::slice::from_ref(self).to_arrow_polygons()
    }

    /// Converts this code to an Arrow RecordBatch with all attributes.
    pub fn to_record_batch(&self) -> Result<RecordBatch, PlusCodeError> {
        std::slice::from_ref(self).to_record_batch()
    }

    /// Writes this code to a GeoParquet file.
    pub fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), PlusCodeError> {
        std::slice::from_ref(self).to_geoparquet(path)
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl TryFrom<String> for PlusCode {
    type Error = PlusCodeError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}

impl From<PlusCode> for String {
    fn from(code: PlusCode) -> Self {
        code.code
    }
}

impl FromStr for PlusCode {
    type Err = PlusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
