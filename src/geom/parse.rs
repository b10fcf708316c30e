use crate::error::PlusCodeError;
use geo_types::{Geometry, GeometryCollection};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
/// Coordinates are expected in WGS84 `(longitude, latitude)` order.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, PlusCodeError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
///
/// Features are unwrapped to their geometry; a FeatureCollection becomes a
/// `GeometryCollection` of its features' geometries (features without one are
/// skipped).
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, PlusCodeError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| PlusCodeError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => geojson_to_geo(geom),
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| PlusCodeError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(geojson_to_geo),
        GeoJson::FeatureCollection(fc) => {
            let geometries = fc
                .features
                .into_iter()
                .filter_map(|f| f.geometry)
                .map(geojson_to_geo)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::GeometryCollection(
                geometries.into_iter().collect::<GeometryCollection<f64>>(),
            ))
        }
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, PlusCodeError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| PlusCodeError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        PlusCodeError::GeometryParseError(format!("Unsupported WKT geometry: '{}'", s))
    })
}

fn geojson_to_geo(geom: geojson::Geometry) -> Result<Geometry<f64>, PlusCodeError> {
    Geometry::try_from(geom).map_err(|e| PlusCodeError::GeometryParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geojson_point() -> Result<(), PlusCodeError> {
        let json = r#"{"type":"Point","coordinates":[8.0000625,47.0000625]}"#;
        match parse_geometry(json)? {
            Geometry::Point(pt) => {
                assert!((pt.x() - 8.0000625).abs() < 1e-9);
                assert!((pt.y() - 47.0000625).abs() < 1e-9);
            }
            other => panic!("Expected Point, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), PlusCodeError> {
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[2.775,20.375]}}"#;
        assert!(matches!(parse_geometry(json)?, Geometry::Point(_)));
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature_collection() -> Result<(), PlusCodeError> {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[2.775,20.375]}},
            {"type":"Feature","properties":{},"geometry":null},
            {"type":"Feature","properties":{},"geometry":{"type":"LineString","coordinates":[[-0.1,51.5],[-0.2,51.6]]}}
        ]}"#;
        match parse_geometry(json)? {
            Geometry::GeometryCollection(gc) => assert_eq!(gc.0.len(), 2),
            other => panic!("Expected GeometryCollection, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), PlusCodeError> {
        match parse_geometry("POINT(-122.375069724 37.539669125)")? {
            Geometry::Point(pt) => {
                assert!((pt.x() + 122.375069724).abs() < 1e-9);
                assert!((pt.y() - 37.539669125).abs() < 1e-9);
            }
            other => panic!("Expected Point, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_polygon() -> Result<(), PlusCodeError> {
        let wkt = "POLYGON((2.75 20.35, 2.8 20.35, 2.8 20.4, 2.75 20.4, 2.75 20.35))";
        assert!(matches!(parse_geometry(wkt)?, Geometry::Polygon(_)));
        Ok(())
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_geometry("not a geometry"),
            Err(PlusCodeError::GeometryParseError(_))
        ));
        assert!(parse_geometry("{not json").is_err());
    }
}
