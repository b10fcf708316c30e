use crate::code::PlusCode;
use crate::error::PlusCodeError;
use arrow_array::{Float64Array, RecordBatch, StringArray, UInt8Array};
use arrow_schema::{DataType, Field, Schema};
use geoarrow_array::IntoArrow;
use geoarrow_array::array::{PointArray, PolygonArray};
use geoarrow_array::builder::{PointBuilder, PolygonBuilder};
use geoarrow_schema::{Crs, Dimension, Metadata, PointType, PolygonType};
use rayon::prelude::*;
use std::sync::Arc;

fn wgs84_metadata() -> Arc<Metadata> {
    let crs = Crs::from_authority_code("EPSG:4326".to_string());
    Arc::new(Metadata::new(crs, None))
}

/// Trait for converting collections of [`PlusCode`]s to Arrow arrays.
///
/// Implemented for `[PlusCode]` and `Vec<PlusCode>`.
pub trait PlusCodesToArrow {
    /// Converts code area centers to an Arrow PointArray.
    fn to_arrow_points(&self) -> PointArray;
    /// Converts code areas to an Arrow PolygonArray of rectangles.
    fn to_arrow_polygons(&self) -> PolygonArray;
    /// Converts codes to a RecordBatch with code, code_length, the area bounds, and geometry.
    fn to_record_batch(&self) -> Result<RecordBatch, PlusCodeError>;
}

impl PlusCodesToArrow for [PlusCode] {
    fn to_arrow_points(&self) -> PointArray {
        let point = PointType::new(Dimension::XY, wgs84_metadata());
        let mut builder = PointBuilder::with_capacity(point, self.len());

        for code in self {
            builder.push_point(Some(&code.center()));
        }
        builder.finish()
    }

    fn to_arrow_polygons(&self) -> PolygonArray {
        let poly = PolygonType::new(Dimension::XY, wgs84_metadata());
        let polygons: Vec<_> = self.par_iter().map(|c: &PlusCode| c.to_polygon()).collect();
        PolygonBuilder::from_polygons(&polygons, poly).finish()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, PlusCodeError> {
        let polygon_array = self.to_arrow_polygons();
        let codes: StringArray = self.iter().map(|c| Some(c.code.as_str())).collect();
        let lengths: UInt8Array = self.iter().map(|c| Some(c.code_length() as u8)).collect();
        let lat_lo: Float64Array = self.iter().map(|c| Some(c.area.latitude_lo)).collect();
        let lng_lo: Float64Array = self.iter().map(|c| Some(c.area.longitude_lo)).collect();
        let lat_hi: Float64Array = self.iter().map(|c| Some(c.area.latitude_hi)).collect();
        let lng_hi: Float64Array = self.iter().map(|c| Some(c.area.longitude_hi)).collect();

        let geometry_field = polygon_array.extension_type().to_field("geometry", false);
        let schema = Schema::new(vec![
            Field::new("code", DataType::Utf8, false),
            Field::new("code_length", DataType::UInt8, false),
            Field::new("latitude_lo", DataType::Float64, false),
            Field::new("longitude_lo", DataType::Float64, false),
            Field::new("latitude_hi", DataType::Float64, false),
            Field::new("longitude_hi", DataType::Float64, false),
            geometry_field,
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(codes),
                Arc::new(lengths),
                Arc::new(lat_lo),
                Arc::new(lng_lo),
                Arc::new(lat_hi),
                Arc::new(lng_hi),
                Arc::new(polygon_array.into_arrow()),
            ],
        )
        .map_err(|e| PlusCodeError::IoError(e.to_string()))
    }
}

impl PlusCodesToArrow for Vec<PlusCode> {
    fn to_arrow_points(&self) -> PointArray {
        self.as_slice().to_arrow_points()
    }

    fn to_arrow_polygons(&self) -> PolygonArray {
        self.as_slice().to_arrow_polygons()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, PlusCodeError> {
        self.as_slice().to_record_batch()
    }
}
