//! Even-odd ray casting containment.

use geo_types::{Coord, LineString, MultiPolygon, Polygon};

/// Ray casting test against a single ring.
///
/// Casts a horizontal ray towards +x and counts edge crossings. The ring
/// wraps around by index, so it may be given open or explicitly closed.
pub fn point_in_ring(ring: &LineString<f64>, point: Coord<f64>) -> bool {
    let coords = &ring.0;
    let n = coords.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = coords[i];
        let pj = coords[j];

        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Whether `point` lies in the filled area of `polygon`.
///
/// Interior rings are holes: a point inside any of them is outside the polygon.
pub fn point_in_polygon(polygon: &Polygon<f64>, point: Coord<f64>) -> bool {
    if !point_in_ring(polygon.exterior(), point) {
        return false;
    }
    !polygon
        .interiors()
        .iter()
        .any(|hole| point_in_ring(hole, point))
}

/// Whether any part of `multi` contains `point`
pub fn point_in_multi_polygon(multi: &MultiPolygon<f64>, point: Coord<f64>) -> bool {
    multi.0.iter().any(|polygon| point_in_polygon(polygon, point))
}
