use crate::code::PlusCode;
use crate::error::PlusCodeError;
use crate::geom::{parse_geometry, polygon_to_geojson, polygon_to_wkt};
use csv::StringRecord;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

enum SourceIndices {
    Geometry(usize),
    Coordinates { lng_idx: usize, lat_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns {
        lng_column: String,
        lat_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct CsvCodeConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub code_length: usize,
    pub include_code_geometry: Option<GeometryFormat>,
}

impl CsvCodeConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use plus_codes_rs::CsvCodeConfig;
    ///
    /// let config = CsvCodeConfig::new("geometry", 10);
    /// ```
    pub fn new(geometry_column: impl Into<String>, code_length: usize) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            code_length,
            include_code_geometry: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use plus_codes_rs::CsvCodeConfig;
    ///
    /// let config = CsvCodeConfig::from_coords("Longitude", "Latitude", 11);
    /// ```
    pub fn from_coords(
        lng_column: impl Into<String>,
        lat_column: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lng_column: lng_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            code_length,
            include_code_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    // Include the code area rectangle in output.
    pub fn with_code_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_code_geometry = Some(format);
        self
    }
}

pub trait CsvToPlusCode {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvCodeConfig,
    ) -> Result<(), PlusCodeError>;
}

impl<P: AsRef<Path>> CsvToPlusCode for P {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvCodeConfig,
    ) -> Result<(), PlusCodeError> {
        csv_to_plus_code_csv(self, output_path, config)
    }
}

fn csv_error(e: impl std::fmt::Display) -> PlusCodeError {
    PlusCodeError::CsvError(e.to_string())
}

fn column_index(headers: &StringRecord, name: &str, role: &str) -> Result<usize, PlusCodeError> {
    if name.is_empty() {
        return Err(PlusCodeError::CsvError(format!(
            "{} column name cannot be empty",
            role
        )));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PlusCodeError::CsvError(format!("{} column '{}' not found", role, name)))
}

fn parse_field(record: &StringRecord, idx: usize, role: &str) -> Result<f64, PlusCodeError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| PlusCodeError::CsvError(format!("Missing {} column at index {}", role, idx)))?
        .trim();
    raw.parse()
        .map_err(|_| PlusCodeError::CsvError(format!("Invalid {}: '{}'", role, raw)))
}

/// Converts a CSV file with geometry or coordinate columns to a CSV file with Plus Codes.
///
/// Streams output to minimize memory usage for large files. A row whose
/// geometry covers several codes (e.g. a line) is written once per code.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use plus_codes_rs::{csv_to_plus_code_csv, CsvCodeConfig, GeometryFormat};
///
/// let config = CsvCodeConfig::new("Geo Shape", 10)
///     .exclude(vec!["Geo Point".into()])
///     .with_code_geometry(GeometryFormat::Wkt);
///
/// csv_to_plus_code_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use plus_codes_rs::{csv_to_plus_code_csv, CsvCodeConfig};
///
/// let config = CsvCodeConfig::from_coords("Longitude", "Latitude", 11);
///
/// csv_to_plus_code_csv("stations.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_plus_code_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvCodeConfig,
) -> Result<(), PlusCodeError> {
    let csv_path = csv_path.as_ref();
    let file = File::open(csv_path).map_err(csv_error)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(csv_error)?.clone();

    // Source columns are always dropped from the output
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lng_column,
            lat_column,
        } => {
            let lng_idx = column_index(&headers, lng_column, "Longitude")?;
            let lat_idx = column_index(&headers, lat_column, "Latitude")?;
            (
                SourceIndices::Coordinates { lng_idx, lat_idx },
                HashSet::from([lng_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| PlusCodeError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["plus_code"];
    if config.include_code_geometry.is_some() {
        header_row.push("plus_code_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer.write_record(&header_row).map_err(csv_error)?;

    let mut rows_read = 0usize;
    let mut rows_written = 0usize;

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        rows_read += 1;

        let codes = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    PlusCodeError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                PlusCode::from_geometry(geom, config.code_length)?
            }
            SourceIndices::Coordinates { lng_idx, lat_idx } => {
                let lng = parse_field(&record, *lng_idx, "Longitude")?;
                let lat = parse_field(&record, *lat_idx, "Latitude")?;
                vec![PlusCode::from_lat_lng(lat, lng, config.code_length)?]
            }
        };

        if codes.is_empty() {
            debug!(row = rows_read, "row produced no codes");
        }

        for code in codes {
            let mut row: Vec<String> = vec![code.code.clone()];

            if let Some(format) = config.include_code_geometry {
                let polygon = code.to_polygon();
                let geom_str = match format {
                    GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                    GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                };
                row.push(geom_str);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer.write_record(&row).map_err(csv_error)?;
            rows_written += 1;
        }
    }

    writer.flush().map_err(csv_error)?;

    info!(
        input = %csv_path.display(),
        rows_read,
        rows_written,
        code_length = config.code_length,
        "annotated csv with plus codes"
    );
    Ok(())
}
