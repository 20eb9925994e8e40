use super::{Point, ViewBox};

/// Affine mapping from viewBox coordinates to output coordinates.
///
/// Translates the viewBox origin to (0, 0), applies a uniform
/// normalization scale, then the integer pre-rounding upscale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    origin: Point,
    scale: f64,
    upscale: u32,
    out_width: f64,
    out_height: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(&ViewBox::default(), 0, 1)
    }
}

impl ViewTransform {
    /// Build the transform for a viewBox.
    ///
    /// `size` of zero keeps the viewBox dimensions; otherwise the larger
    /// extent is scaled to `size`. An `upscale` below 1 is treated as 1.
    pub fn new(vb: &ViewBox, size: u32, upscale: u32) -> Self {
        let mut scale = 1.;
        let (mut out_width, mut out_height) = (vb.width, vb.height);
        if size > 0 && vb.width > 0. && vb.height > 0. {
            scale = size as f64 / vb.max_extent();
            out_width = vb.width * scale;
            out_height = vb.height * scale;
        }
        Self {
            origin: Point::new(vb.min_x, vb.min_y),
            scale,
            upscale: upscale.max(1),
            out_width,
            out_height,
        }
    }

    pub fn apply(&self, pt: Point) -> Point {
        let factor = self.factor();
        Point::new(
            (pt.x - self.origin.x) * factor,
            (pt.y - self.origin.y) * factor,
        )
    }

    /// Map a length (e.g. a radius) into output units
    pub fn apply_length(&self, len: f64) -> f64 {
        len * self.factor()
    }

    /// Combined multiplier: normalization scale times upscale
    pub fn factor(&self) -> f64 {
        self.scale * self.upscale as f64
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn upscale(&self) -> u32 {
        self.upscale
    }

    /// Output (width, height), including the upscale factor
    pub fn output_size(&self) -> (f64, f64) {
        let up = self.upscale as f64;
        (self.out_width * up, self.out_height * up)
    }
}
