use crate::code::PlusCode;
use crate::error::PlusCodeError;
use crate::io::arrow::PlusCodesToArrow;
use arrow_array::RecordBatch;
use geoparquet::writer::{
    GeoParquetRecordBatchEncoder, GeoParquetWriterEncoding, GeoParquetWriterOptionsBuilder,
};
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::path::Path;
use tracing::info;

fn io_error(e: impl std::fmt::Display) -> PlusCodeError {
    PlusCodeError::IoError(e.to_string())
}

/// Writes a RecordBatch with a GeoArrow geometry column to a GeoParquet file (WKB encoded).
pub fn write_geoparquet(batch: &RecordBatch, path: impl AsRef<Path>) -> Result<(), PlusCodeError> {
    let path = path.as_ref();
    let schema = batch.schema();

    let options = GeoParquetWriterOptionsBuilder::default()
        .set_encoding(GeoParquetWriterEncoding::WKB)
        .build();

    let mut encoder = GeoParquetRecordBatchEncoder::try_new(&schema, &options).map_err(io_error)?;

    let file = File::create(path).map_err(io_error)?;
    let mut writer = ArrowWriter::try_new(file, encoder.target_schema(), None).map_err(io_error)?;

    let encoded_batch = encoder.encode_record_batch(batch).map_err(io_error)?;
    writer.write(&encoded_batch).map_err(io_error)?;

    let kv_metadata = encoder.into_keyvalue().map_err(io_error)?;
    writer.append_key_value_metadata(kv_metadata);
    writer.finish().map_err(io_error)?;

    info!(path = %path.display(), rows = batch.num_rows(), "wrote geoparquet");
    Ok(())
}

pub trait PlusCodesToGeoParquet: PlusCodesToArrow {
    fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), PlusCodeError>;
}

impl PlusCodesToGeoParquet for [PlusCode] {
    fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), PlusCodeError> {
        let batch = self.to_record_batch()?;
        write_geoparquet(&batch, path)
    }
}

impl PlusCodesToGeoParquet for Vec<PlusCode> {
    fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), PlusCodeError> {
        self.as_slice().to_geoparquet(path)
    }
}
