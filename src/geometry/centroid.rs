//! Closed-form polygon centroid.

use geo_types::{Coord, LineString, MultiPolygon};

use crate::error::GeometryError;

/// Edge-wise accumulation shared by the area and centroid computations.
///
/// Returns (Σa, Σ(x_i + x_j)·a, Σ(y_i + y_j)·a) where a is the cross term of
/// each edge. The ring wraps around by index, so an explicit closing point
/// only adds a zero-length edge.
fn accumulate(ring: &LineString<f64>) -> (f64, f64, f64) {
    let coords = &ring.0;
    let n = coords.len();

    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for i in 0..n {
        let p0 = coords[i];
        let p1 = coords[(i + 1) % n];

        let a = p0.x * p1.y - p1.x * p0.y;
        area2 += a;
        cx += (p0.x + p1.x) * a;
        cy += (p0.y + p1.y) * a;
    }

    (area2, cx, cy)
}

/// Signed area of a ring. Positive for counter-clockwise traversal.
pub fn signed_area(ring: &LineString<f64>) -> f64 {
    accumulate(ring).0 * 0.5
}

/// Centroid of a simple ring, independent of winding and starting vertex.
///
/// Fails with [`GeometryError::Degenerate`] when the signed area is zero
/// (collinear or repeated points) or the result is not finite.
pub fn compute_centroid(ring: &LineString<f64>) -> Result<Coord<f64>, GeometryError> {
    let (area2, cx, cy) = accumulate(ring);
    let signed_area = area2 * 0.5;

    if signed_area == 0.0 {
        return Err(GeometryError::Degenerate {
            points: ring.0.len(),
        });
    }

    let centroid = Coord {
        x: cx / (6.0 * signed_area),
        y: cy / (6.0 * signed_area),
    };

    if !centroid.x.is_finite() || !centroid.y.is_finite() {
        return Err(GeometryError::Degenerate {
            points: ring.0.len(),
        });
    }

    Ok(centroid)
}

/// Area-weighted centroid over the outer rings of every part.
///
/// Degenerate parts carry no weight and are skipped. Fails only when no part
/// has a usable area.
pub fn multi_polygon_centroid(multi: &MultiPolygon<f64>) -> Result<Coord<f64>, GeometryError> {
    let mut total = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    let mut points = 0;

    for polygon in multi.0.iter() {
        let ring = polygon.exterior();
        points += ring.0.len();

        let Ok(c) = compute_centroid(ring) else {
            continue;
        };
        let weight = signed_area(ring).abs();
        total += weight;
        x += c.x * weight;
        y += c.y * weight;
    }

    if total == 0.0 || !total.is_finite() {
        return Err(GeometryError::Degenerate { points });
    }

    Ok(Coord {
        x: x / total,
        y: y / total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Polygon;

    fn ring(points: &[(f64, f64)]) -> LineString<f64> {
        LineString::from(points.to_vec())
    }

    fn assert_close(c: Coord<f64>, x: f64, y: f64) {
        assert!((c.x - x).abs() < 1e-9, "x: expected {}, got {}", x, c.x);
        assert!((c.y - y).abs() < 1e-9, "y: expected {}, got {}", y, c.y);
    }

    #[test]
    fn test_unit_square() {
        let square = ring(&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        assert_close(compute_centroid(&square).unwrap(), 0.5, 0.5);
    }

    #[test]
    fn test_winding_independent() {
        let clockwise = ring(&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        let mut counter = clockwise.0.clone();
        counter.reverse();
        let counter = LineString::new(counter);

        assert!(signed_area(&clockwise) < 0.0);
        assert!(signed_area(&counter) > 0.0);
        assert_close(compute_centroid(&counter).unwrap(), 0.5, 0.5);
    }

    #[test]
    fn test_rotation_invariant() {
        let points = vec![
            (0.0, 0.0),
            (4.0, 0.0),
            (5.0, 3.0),
            (2.0, 6.0),
            (-1.0, 2.0),
        ];
        let expected = compute_centroid(&ring(&points)).unwrap();

        for shift in 1..points.len() {
            let mut rotated = points.clone();
            rotated.rotate_left(shift);
            let c = compute_centroid(&ring(&rotated)).unwrap();
            assert_close(c, expected.x, expected.y);
        }
    }

    #[test]
    fn test_explicitly_closed_ring() {
        let open = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let closed = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
        assert_eq!(compute_centroid(&open), compute_centroid(&closed));
    }

    #[test]
    fn test_triangle() {
        let triangle = ring(&[(0.0, 0.0), (6.0, 0.0), (0.0, 3.0)]);
        assert_close(compute_centroid(&triangle).unwrap(), 2.0, 1.0);
        assert!((signed_area(&triangle) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_identical_points() {
        let same = ring(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);
        assert!(matches!(
            compute_centroid(&same),
            Err(GeometryError::Degenerate { points: 4 })
        ));
    }

    #[test]
    fn test_degenerate_collinear_and_short() {
        let line = ring(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(compute_centroid(&line).is_err());

        let two = ring(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(compute_centroid(&two).is_err());

        assert!(compute_centroid(&LineString::new(vec![])).is_err());
    }

    #[test]
    fn test_non_finite_input() {
        let bad = ring(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]);
        assert!(compute_centroid(&bad).is_err());
    }

    #[test]
    fn test_multi_polygon_area_weighted() {
        // 2x2 square at origin (area 4) and 1x1 square at (10, 0) (area 1)
        let big = Polygon::new(
            ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]),
            vec![],
        );
        let small = Polygon::new(
            ring(&[(10.0, 0.0), (11.0, 0.0), (11.0, 1.0), (10.0, 1.0)]),
            vec![],
        );
        let multi = MultiPolygon::new(vec![big, small]);

        let c = multi_polygon_centroid(&multi).unwrap();
        assert_close(c, (1.0 * 4.0 + 10.5) / 5.0, (1.0 * 4.0 + 0.5) / 5.0);
    }

    #[test]
    fn test_multi_polygon_skips_degenerate_parts() {
        let flat = Polygon::new(ring(&[(5.0, 5.0), (6.0, 6.0), (7.0, 7.0)]), vec![]);
        let square = Polygon::new(
            ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
            vec![],
        );
        let multi = MultiPolygon::new(vec![flat, square]);
        assert_close(multi_polygon_centroid(&multi).unwrap(), 0.5, 0.5);
    }

    #[test]
    fn test_multi_polygon_all_degenerate() {
        let flat = Polygon::new(ring(&[(5.0, 5.0), (6.0, 6.0), (7.0, 7.0)]), vec![]);
        assert!(multi_polygon_centroid(&MultiPolygon::new(vec![flat])).is_err());
        assert!(multi_polygon_centroid(&MultiPolygon::new(vec![])).is_err());
    }
}
