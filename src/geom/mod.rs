mod geometry;
mod parse;

pub use geometry::{polygon_to_geojson, polygon_to_wkt, rect_to_polygon};
pub use parse::{parse_geojson, parse_geometry, parse_wkt};
