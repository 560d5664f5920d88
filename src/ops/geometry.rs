// ============================================================================
// GEOMETRY — signed distance fields + antialiased coverage
// ============================================================================
//
// Every silhouette in the renderer (pad body, shadow, shine, pattern
// elements) is evaluated per pixel through one of these SDFs and converted
// to coverage with a half-pixel smoothstep.

/// SDF for an axis-aligned box centered at the origin with half extents
/// (hx, hy). Negative inside.
#[inline]
pub fn sdf_box(px: f32, py: f32, hx: f32, hy: f32) -> f32 {
    let dx = px.abs() - hx;
    let dy = py.abs() - hy;
    let outside = (dx.max(0.0) * dx.max(0.0) + dy.max(0.0) * dy.max(0.0)).sqrt();
    let inside = dx.max(dy).min(0.0);
    outside + inside
}

/// SDF for a rounded box. The corner radius is clamped to half the shorter
/// side so corners never self-intersect.
#[inline]
pub fn sdf_rounded_box(px: f32, py: f32, hx: f32, hy: f32, r: f32) -> f32 {
    let r = clamp_corner_radius(r, hx * 2.0, hy * 2.0);
    sdf_box(px, py, hx - r, hy - r) - r
}

/// Largest usable corner radius for a w×h rectangle: `min(r, w/2, h/2)`.
#[inline]
pub fn clamp_corner_radius(r: f32, w: f32, h: f32) -> f32 {
    r.min(w * 0.5).min(h * 0.5)
}

/// Distance from (px, py) to the circle boundary around (cx, cy).
/// Negative inside.
#[inline]
pub fn sdf_circle(px: f32, py: f32, cx: f32, cy: f32, r: f32) -> f32 {
    let dx = px - cx;
    let dy = py - cy;
    (dx * dx + dy * dy).sqrt() - r
}

/// Unsigned distance from (px, py) to the segment (ax, ay)→(bx, by).
#[inline]
pub fn sdf_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let pax = px - ax;
    let pay = py - ay;
    let bax = bx - ax;
    let bay = by - ay;
    let len_sq = bax * bax + bay * bay;
    if len_sq < 1e-12 {
        return (pax * pax + pay * pay).sqrt();
    }
    let h = ((pax * bax + pay * bay) / len_sq).clamp(0.0, 1.0);
    let dx = pax - bax * h;
    let dy = pay - bay * h;
    (dx * dx + dy * dy).sqrt()
}

/// Antialiased coverage for a signed distance: 1 well inside, 0 well
/// outside, smooth over a one-pixel band.
#[inline]
pub fn coverage(d: f32) -> f32 {
    smoothstep(0.5, -0.5, d)
}

/// Coverage of a stroke of the given width centered on the zero set of `d`.
#[inline]
pub fn stroke_coverage(d: f32, width: f32) -> f32 {
    coverage(d.abs() - width * 0.5)
}

#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_signs() {
        assert!(sdf_box(0.0, 0.0, 10.0, 5.0) < 0.0);
        assert!(sdf_box(11.0, 0.0, 10.0, 5.0) > 0.0);
        // On the edge
        assert!(sdf_box(10.0, 0.0, 10.0, 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_rounded_box_corner_is_rounded() {
        // A sharp box contains its corner point; the rounded one does not.
        assert!(sdf_box(10.0 - 0.1, 5.0 - 0.1, 10.0, 5.0) < 0.0);
        assert!(sdf_rounded_box(10.0 - 0.1, 5.0 - 0.1, 10.0, 5.0, 4.0) > 0.0);
        // Edge midpoints are unaffected by the radius
        let d = sdf_rounded_box(10.0, 0.0, 10.0, 5.0, 4.0);
        assert!(d.abs() < 1e-5);
    }

    #[test]
    fn test_radius_clamps_to_half_shorter_side() {
        assert_eq!(clamp_corner_radius(22.0, 100.0, 100.0), 22.0);
        assert_eq!(clamp_corner_radius(22.0, 100.0, 30.0), 15.0);
        assert_eq!(clamp_corner_radius(80.0, 100.0, 100.0), 50.0);
        // An over-large radius degenerates to a stadium, never inverts
        let d = sdf_rounded_box(0.0, 0.0, 10.0, 5.0, 1000.0);
        assert!(d < 0.0);
    }

    #[test]
    fn test_segment_distance() {
        // Perpendicular distance to a horizontal segment
        let d = sdf_segment(5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 3.0).abs() < 1e-6);
        // Beyond an endpoint the distance is to that endpoint
        let d = sdf_segment(14.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 5.0).abs() < 1e-6);
        // Degenerate segment behaves like a point
        let d = sdf_segment(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_coverage_band() {
        assert_eq!(coverage(-1.0), 1.0);
        assert_eq!(coverage(1.0), 0.0);
        assert!((coverage(0.0) - 0.5).abs() < 1e-6);
        // Monotonically decreasing across the band
        assert!(coverage(-0.25) > coverage(0.25));
    }

    #[test]
    fn test_stroke_coverage_is_symmetric() {
        let w = 1.0;
        assert!((stroke_coverage(0.3, w) - stroke_coverage(-0.3, w)).abs() < 1e-6);
        assert_eq!(stroke_coverage(0.0, w), 1.0);
        assert_eq!(stroke_coverage(2.0, w), 0.0);
    }
}
