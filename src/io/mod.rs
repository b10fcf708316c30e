pub mod arrow;
pub mod csv;
pub mod parquet;

pub use arrow::PlusCodesToArrow;
pub use csv::{CoordinateSource, CsvCodeConfig, CsvToPlusCode, GeometryFormat, csv_to_plus_code_csv};
pub use parquet::{PlusCodesToGeoParquet, write_geoparquet};
