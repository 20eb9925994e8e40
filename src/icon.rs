use crate::document::{CircleRecord, SvgSource};
use crate::geometry::{Point, Subpath, ViewBox, ViewTransform};
use crate::path::{flatten_circle, interpret_path};
use crate::types::{strp, strp_or};
use crate::ConvertConfig;

/// Flattened geometry of a single icon, in output units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconGeometry {
    /// Path subpaths in document order, followed by one per circle
    pub subpaths: Vec<Subpath>,
    /// Output width, including the upscale factor
    pub width: f64,
    /// Output height, including the upscale factor
    pub height: f64,
    pub upscale: u32,
    /// Human readable path warnings, in the order they were found
    pub warnings: Vec<String>,
}

impl IconGeometry {
    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Subpath::len).sum()
    }
}

/// Build the output geometry for a parsed document.
///
/// Paths are interpreted first (in document order), then circles.
pub fn build_geometry(source: &SvgSource, config: &ConvertConfig) -> IconGeometry {
    let view_box = ViewBox::parse_or_default(source.view_box.as_deref());
    let xf = ViewTransform::new(&view_box, config.size, config.upscale);
    let (width, height) = xf.output_size();

    let mut icon = IconGeometry {
        width,
        height,
        upscale: xf.upscale(),
        ..Default::default()
    };

    for d in &source.paths {
        let geom = interpret_path(d, config.flatness, |p| xf.apply(p));
        icon.subpaths.extend(geom.subpaths);
        icon.warnings.extend(geom.warnings.iter().map(ToString::to_string));
    }

    for circle in &source.circles {
        if let Some(sp) = circle_subpath(circle, &xf, config.flatness) {
            icon.subpaths.push(sp);
        }
    }

    icon
}

/// Polygon for a circle record; `None` if the radius is missing or unusable.
fn circle_subpath(circle: &CircleRecord, xf: &ViewTransform, flatness: f64) -> Option<Subpath> {
    let r = match circle.r.as_deref().map(strp) {
        Some(Ok(r)) if r > 0. => r,
        _ => {
            log::debug!("skipping circle with radius {:?}", circle.r);
            return None;
        }
    };
    let center = Point::new(
        strp_or(circle.cx.as_deref(), 0.),
        strp_or(circle.cy.as_deref(), 0.),
    );
    Some(flatten_circle(
        center,
        r,
        xf.apply_length(r),
        flatness,
        |p| xf.apply(p),
    ))
}
