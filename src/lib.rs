//! # plus-codes-rs
//!
//! Open Location Codes ("Plus Codes") for Rust. There are currently three main
//! entry points.
//!
//! ### 1. Free functions - encode, decode, shorten, recover
//!
//! ```
//! use plus_codes_rs::{decode, encode, recover_nearest, shorten};
//!
//! # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
//! let code = encode(20.375, 2.775, 6)?;
//! assert_eq!(code, "7FG49Q00+");
//!
//! let area = decode("7FG49QCJ+2V")?;
//! println!("{} {} {} {}", area.latitude_lo, area.longitude_lo, area.latitude_hi, area.longitude_hi);
//!
//! let short = shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625)?;
//! assert_eq!(short, "+2VX");
//! assert_eq!(recover_nearest(&short, 51.3701125, -1.217765625)?, "9C3W9QCJ+2VX");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PlusCode` - Single Code Operations
//!
//! ```
//! use plus_codes_rs::PlusCode;
//!
//! # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
//! // (longitude, latitude)
//! let code = PlusCode::from_wgs84(&(-0.1276, 51.5072), 10)?;
//! println!("{}", code);
//! let polygon = code.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToPlusCode` - CSV File Conversion
//!
//! Convert CSV files with geometry columns (WKT or GeoJSON) to code-annotated CSVs:
//!
//! ```no_run
//! use plus_codes_rs::{CsvToPlusCode, CsvCodeConfig, GeometryFormat};
//!
//! let config = CsvCodeConfig::new("geometry", 10)
//!     .exclude(vec!["Geo Point".into()])
//!     .with_code_geometry(GeometryFormat::Wkt);
//!
//! // Using trait method
//! "input.csv".to_plus_code_csv("output.csv", &config).unwrap();
//! ```
//!
//! Or use separate longitude/latitude columns:
//!
//! ```no_run
//! use plus_codes_rs::{CsvCodeConfig, csv_to_plus_code_csv};
//!
//! let config = CsvCodeConfig::from_coords("Longitude", "Latitude", 11);
//!
//! csv_to_plus_code_csv("stations.csv", "output.csv", &config).unwrap();
//! ```
//!

pub mod area;
pub mod code;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;

pub use area::CodeArea;
pub use code::PlusCode;
pub use coord::Coordinate;
pub use error::PlusCodeError;
pub use geom::{parse_geojson, parse_geometry, parse_wkt};
pub use index::{
    CODE_ALPHABET, CODE_PRECISION_EXTRA, CODE_PRECISION_NORMAL, MAX_DIGIT_COUNT,
    PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION, decode, encode, is_full, is_padded,
    is_short, is_valid, latitude_precision, recover_nearest, shorten,
};
pub use io::{
    CoordinateSource, CsvCodeConfig, CsvToPlusCode, GeometryFormat, PlusCodesToArrow,
    PlusCodesToGeoParquet, csv_to_plus_code_csv, write_geoparquet,
};

pub use geo_types;
pub use geoarrow_array;
pub use geoarrow_schema;
pub use geoparquet;
