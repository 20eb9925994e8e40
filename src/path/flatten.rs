//! Curve flattening: every curve type is reduced to a polyline whose
//! deviation from the true curve is bounded by a single flatness tolerance.

use std::f64::consts::PI;

use super::arc::{ArcParameterization, EndpointArc};
use crate::constants::{
    FALLBACK_CIRCLE_SEGMENTS, MAX_CURVE_SEGMENTS, MAX_SUBDIVISION_DEPTH, MIN_CIRCLE_SEGMENTS,
};
use crate::geometry::{Point, Subpath};

/// Flatten a cubic Bézier by recursive midpoint subdivision.
///
/// A piece is accepted once both inner control points lie within
/// `tolerance` of its chord, or the depth ceiling is reached. The result
/// always starts with `p0` and ends with `p3`.
pub fn flatten_cubic(p0: Point, p1: Point, p2: Point, p3: Point, tolerance: f64) -> Vec<Point> {
    let mut out = vec![p0];
    subdivide(&mut out, [p0, p1, p2, p3], tolerance * tolerance, 0);
    out
}

fn subdivide(out: &mut Vec<Point>, [a, b, c, d]: [Point; 4], tol2: f64, depth: u32) {
    let flat = dist2_to_line(b, a, d) <= tol2 && dist2_to_line(c, a, d) <= tol2;
    if flat || depth > MAX_SUBDIVISION_DEPTH {
        out.push(d);
        return;
    }
    // de Casteljau split at t = 0.5
    let ab = a.mid(b);
    let bc = b.mid(c);
    let cd = c.mid(d);
    let abc = ab.mid(bc);
    let bcd = bc.mid(cd);
    let abcd = abc.mid(bcd);
    subdivide(out, [a, ab, abc, abcd], tol2, depth + 1);
    subdivide(out, [abcd, bcd, cd, d], tol2, depth + 1);
}

/// Degree-elevate a quadratic Bézier to the identical cubic.
pub fn elevate_quadratic(p0: Point, p1: Point, p2: Point) -> [Point; 4] {
    [p0, p0.lerp(p1, 2. / 3.), p2.lerp(p1, 2. / 3.), p2]
}

pub fn flatten_quadratic(p0: Point, p1: Point, p2: Point, tolerance: f64) -> Vec<Point> {
    let [c0, c1, c2, c3] = elevate_quadratic(p0, p1, p2);
    flatten_cubic(c0, c1, c2, c3, tolerance)
}

/// Number of equal angular steps needed to keep the chord sagitta of an
/// arc spanning `delta_theta` on radius `radius` within `tolerance`.
///
/// Never less than one, never more than `MAX_CURVE_SEGMENTS`; non-finite
/// results (zero or oversize tolerance) give one.
pub fn arc_segment_count(delta_theta: f64, radius: f64, tolerance: f64) -> usize {
    let step = 2. * (1. - tolerance / (radius + 1e-9)).acos();
    let segs = (delta_theta.abs() / step).ceil();
    if segs.is_finite() && segs >= 1. {
        (segs as usize).min(MAX_CURVE_SEGMENTS)
    } else {
        1
    }
}

/// Flatten an elliptical arc given in endpoint form.
///
/// The result starts with `arc.from`; a zero radius gives a straight line
/// and coincident endpoints give the start point alone.
pub fn flatten_arc(arc: &EndpointArc, tolerance: f64) -> Vec<Point> {
    let center = match arc.center_parameterization() {
        ArcParameterization::Center(center) => center,
        ArcParameterization::LineTo => return vec![arc.from, arc.to],
        ArcParameterization::Omit => return vec![arc.from],
    };
    let segs = arc_segment_count(center.delta_theta, center.max_radius(), tolerance);
    let step = center.delta_theta / segs as f64;
    let mut out = Vec::with_capacity(segs + 1);
    out.push(arc.from);
    out.extend((1..=segs).map(|i| center.point_at(center.theta1 + step * i as f64)));
    out
}

/// Polygon segment count for a full circle.
///
/// `scaled_radius` is the radius in output units and only decides the
/// oversize-tolerance case; the angular step itself uses `radius`. Huge
/// radii are capped at `MAX_CURVE_SEGMENTS`.
pub fn circle_segment_count(radius: f64, scaled_radius: f64, tolerance: f64) -> usize {
    if scaled_radius <= 0. {
        return MIN_CIRCLE_SEGMENTS;
    }
    if tolerance >= scaled_radius {
        return MIN_CIRCLE_SEGMENTS;
    }
    let theta = 2. * (1. - tolerance / radius).acos();
    if theta <= 0. {
        return FALLBACK_CIRCLE_SEGMENTS;
    }
    let segs = (2. * PI / theta).ceil();
    if segs.is_finite() && segs >= MIN_CIRCLE_SEGMENTS as f64 {
        (segs as usize).min(MAX_CURVE_SEGMENTS)
    } else {
        MIN_CIRCLE_SEGMENTS
    }
}

/// Approximate a circle with a closed regular polygon.
///
/// Vertices are generated in source units and passed through `xf`; the
/// first vertex is repeated to close the polygon.
pub fn flatten_circle<F>(
    center: Point,
    radius: f64,
    scaled_radius: f64,
    tolerance: f64,
    xf: F,
) -> Subpath
where
    F: Fn(Point) -> Point,
{
    let segs = circle_segment_count(radius, scaled_radius, tolerance);
    let vertices = (0..segs)
        .map(|i| {
            let ang = (i as f64 / segs as f64) * 2. * PI;
            xf(Point::new(
                center.x + radius * ang.cos(),
                center.y + radius * ang.sin(),
            ))
        })
        .collect();
    Subpath::polygon(vertices)
}

/// Squared perpendicular distance from `p` to the line through `a` and `b`.
///
/// A degenerate (zero-length) line gives zero.
fn dist2_to_line(p: Point, a: Point, b: Point) -> f64 {
    let num = ((b.y - a.y) * p.x - (b.x - a.x) * p.y + b.x * a.y - b.y * a.x).abs();
    let den = (b.y - a.y).hypot(b.x - a.x);
    if den == 0. {
        return 0.;
    }
    let d = num / den;
    d * d
}
