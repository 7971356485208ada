//! Ear-clipping triangulation for filling simple polygons
//!
//! egui only fills convex paths on its own, while the area under the
//! backdrop line is concave. Filled paths are flattened to polygons and
//! cut into triangles here, then submitted as a mesh.

use super::path::Point;

const EPSILON: f32 = 1e-6;

/// Twice the signed area of a polygon
fn signed_area2(points: &[Point]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

/// Turn direction at `b` when walking a -> b -> c
fn cross(a: Point, b: Point, c: Point) -> f32 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Side of `p` relative to the directed edge a -> b
fn edge(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    if p == a || p == b || p == c {
        return false;
    }
    edge(a, b, p) >= 0.0 && edge(b, c, p) >= 0.0 && edge(c, a, p) >= 0.0
}

/// Triangulate a simple polygon
///
/// # Arguments
/// * `points` - Polygon vertices in order, either winding
///
/// # Returns
/// Index triples into `points`. Polygons with fewer than three vertices
/// or zero area produce no triangles. Self-intersecting input is
/// triangulated as far as possible and the remainder is dropped.
pub fn triangulate(points: &[Point]) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let area = signed_area2(points);
    if !area.is_finite() || area.abs() <= EPSILON {
        return Vec::new();
    }

    // Work in positive winding
    let mut ring: Vec<usize> = if area > 0.0 {
        (0..n).collect()
    } else {
        (0..n).rev().collect()
    };

    let mut triangles = Vec::with_capacity(n - 2);
    let mut i = 0;
    let mut misses = 0;

    while ring.len() > 3 {
        let m = ring.len();
        if misses >= m {
            break;
        }

        let cur = i % m;
        let prev = ring[(cur + m - 1) % m];
        let here = ring[cur];
        let next = ring[(cur + 1) % m];
        let (a, b, c) = (points[prev], points[here], points[next]);

        let turn = cross(a, b, c);
        if turn.abs() <= EPSILON {
            // Collinear or spike vertex: contributes no area
            ring.remove(cur);
            i = cur;
            misses = 0;
            continue;
        }

        let is_ear = turn > 0.0
            && ring
                .iter()
                .filter(|&&j| j != prev && j != here && j != next)
                .all(|&j| !contains(a, b, c, points[j]));

        if is_ear {
            triangles.push([prev as u32, here as u32, next as u32]);
            ring.remove(cur);
            i = cur;
            misses = 0;
        } else {
            i = cur + 1;
            misses += 1;
        }
    }

    if ring.len() == 3 {
        let (a, b, c) = (points[ring[0]], points[ring[1]], points[ring[2]]);
        if cross(a, b, c).abs() > EPSILON {
            triangles.push([ring[0] as u32, ring[1] as u32, ring[2] as u32]);
        }
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_of(points: &[Point], tris: &[[u32; 3]]) -> f32 {
        tris.iter()
            .map(|t| {
                let (a, b, c) = (
                    points[t[0] as usize],
                    points[t[1] as usize],
                    points[t[2] as usize],
                );
                cross(a, b, c).abs() / 2.0
            })
            .sum()
    }

    #[test]
    fn test_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let tris = triangulate(&square);
        assert_eq!(tris.len(), 2);
        assert!((area_of(&square, &tris) - 100.0).abs() < 1e-3);

        let mut reversed = square;
        reversed.reverse();
        let tris = triangulate(&reversed);
        assert!((area_of(&reversed, &tris) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_concave_area_under_curve() {
        // Zig-zag top edge closed down to a baseline at y = 100
        let poly = [
            Point::new(0.0, 40.0),
            Point::new(10.0, 20.0),
            Point::new(20.0, 60.0),
            Point::new(30.0, 10.0),
            Point::new(40.0, 50.0),
            Point::new(40.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        let tris = triangulate(&poly);
        let expected = signed_area2(&poly).abs() / 2.0;
        assert_eq!(tris.len(), poly.len() - 2);
        assert!((area_of(&poly, &tris) - expected).abs() < 1e-2);
    }

    #[test]
    fn test_collinear_points() {
        let poly = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let tris = triangulate(&poly);
        assert!((area_of(&poly, &tris) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_empty());

        let flat = [
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 5.0),
        ];
        assert!(triangulate(&flat).is_empty());
    }
}
