//! Elliptical arc conversion from endpoint to center parameterization.
//!
//! See section B.2.4 of the SVG 2 implementation notes, "Conversion from
//! endpoint to center parameterization".

use std::f64::consts::PI;

use crate::geometry::Point;

/// An arc as given in path data: two endpoints plus ellipse shape and flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointArc {
    pub from: Point,
    pub to: Point,
    /// (x-axis, y-axis) radii, as given; may be negative or too small
    pub radii: (f64, f64),
    /// Rotation of the ellipse x-axis, in degrees
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// An arc described by its ellipse center and angular span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Point,
    /// Radii after any correction needed to reach both endpoints
    pub radii: (f64, f64),
    /// Rotation of the ellipse x-axis, in radians
    pub phi: f64,
    pub theta1: f64,
    pub delta_theta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcParameterization {
    Center(CenterArc),
    /// A zero radius: the arc is a straight line to the end point
    LineTo,
    /// Coincident endpoints: the arc contributes nothing
    Omit,
}

impl EndpointArc {
    pub fn center_parameterization(&self) -> ArcParameterization {
        let (mut rx, mut ry) = self.radii;
        if rx == 0. || ry == 0. {
            return ArcParameterization::LineTo;
        }
        rx = rx.abs();
        ry = ry.abs();

        let (p0, p1) = (self.from, self.to);
        let phi = self.x_axis_rotation * PI / 180.;
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Move the origin to the chord midpoint, then rotate into the
        // ellipse's frame; primed values are in that frame.
        let dx2 = (p0.x - p1.x) / 2.;
        let dy2 = (p0.y - p1.y) / 2.;
        let x1p = cos_phi * dx2 + sin_phi * dy2;
        let y1p = -sin_phi * dx2 + cos_phi * dy2;

        // Scale up radii which can't span the endpoints.
        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1. {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        let den = rx * rx * y1p * y1p + ry * ry * x1p * x1p;
        if den == 0. {
            return ArcParameterization::Omit;
        }
        let sign = if self.large_arc == self.sweep { -1. } else { 1. };
        let num = (rx * rx * ry * ry - rx * rx * y1p * y1p - ry * ry * x1p * x1p).max(0.);
        let cfac = sign * (num / den).sqrt();
        let cxp = cfac * (rx * y1p) / ry;
        let cyp = cfac * (-ry * x1p) / rx;

        let center = Point::new(
            cos_phi * cxp - sin_phi * cyp + (p0.x + p1.x) / 2.,
            sin_phi * cxp + cos_phi * cyp + (p0.y + p1.y) / 2.,
        );

        let ux = (x1p - cxp) / rx;
        let uy = (y1p - cyp) / ry;
        let vx = (-x1p - cxp) / rx;
        let vy = (-y1p - cyp) / ry;
        let theta1 = angle_between((1., 0.), (ux, uy));
        let mut delta_theta = angle_between((ux, uy), (vx, vy));
        if !self.sweep && delta_theta > 0. {
            delta_theta -= 2. * PI;
        } else if self.sweep && delta_theta < 0. {
            delta_theta += 2. * PI;
        }

        ArcParameterization::Center(CenterArc {
            center,
            radii: (rx, ry),
            phi,
            theta1,
            delta_theta,
        })
    }
}

impl CenterArc {
    /// Point on the ellipse at parametric angle `theta`
    pub fn point_at(&self, theta: f64) -> Point {
        let (rx, ry) = self.radii;
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_t, cos_t) = theta.sin_cos();
        Point::new(
            self.center.x + rx * cos_t * cos_phi - ry * sin_t * sin_phi,
            self.center.y + rx * cos_t * sin_phi + ry * sin_t * cos_phi,
        )
    }

    pub fn max_radius(&self) -> f64 {
        self.radii.0.max(self.radii.1)
    }
}

/// Signed angle from vector `u` to vector `v`
fn angle_between(u: (f64, f64), v: (f64, f64)) -> f64 {
    let dot = u.0 * v.0 + u.1 * v.1;
    let det = u.0 * v.1 - u.1 * v.0;
    det.atan2(dot)
}
