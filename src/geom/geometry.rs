use geo_types::{Coord, LineString, Polygon, Rect};

/// Builds a closed, counter-clockwise polygon from a rectangle.
///
/// Vertices run from the south-west corner, so the ring has 5 coordinates.
pub fn rect_to_polygon(rect: &Rect<f64>) -> Polygon<f64> {
    let (min, max) = (rect.min(), rect.max());
    let coords = vec![
        Coord { x: min.x, y: min.y },
        Coord { x: max.x, y: min.y },
        Coord { x: max.x, y: max.y },
        Coord { x: min.x, y: max.y },
        Coord { x: min.x, y: min.y },
    ];

    Polygon::new(LineString::from(coords), vec![])
}

pub fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}
