use std::str::FromStr;

use crate::constants::{DEFAULT_VIEWBOX, POINT_EPSILON};
use crate::errors::{Error, Result};
use crate::types::{attr_split, strp};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by the given deltas
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn mid(&self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2., (self.y + other.y) / 2.)
    }

    /// Point a fraction `t` of the way from `self` to `other`
    pub fn lerp(&self, other: Point, t: f64) -> Self {
        Self::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    /// Mirror image of `self` about `center`
    pub fn reflect_about(&self, center: Point) -> Self {
        Self::new(2. * center.x - self.x, 2. * center.y - self.y)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// True if both coordinates differ by less than `POINT_EPSILON`
    pub fn approx_eq(&self, other: Point) -> bool {
        (self.x - other.x).abs() < POINT_EPSILON && (self.y - other.y).abs() < POINT_EPSILON
    }
}

/// One contiguous polyline; `closed` is only ever set by an explicit close.
#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    points: Vec<Point>,
    closed: bool,
}

impl Subpath {
    /// Start a new (open) subpath at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
            closed: false,
        }
    }

    /// Build a closed polygon from its distinct vertices; the first
    /// vertex is repeated at the end.
    pub fn polygon(vertices: Vec<Point>) -> Self {
        let mut points = vertices;
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Self {
            points,
            closed: true,
        }
    }

    /// Append a vertex unless it duplicates the current last vertex.
    ///
    /// Returns whether the point was added.
    pub fn push(&mut self, pt: Point) -> bool {
        if let Some(last) = self.points.last() {
            if last.approx_eq(pt) {
                return false;
            }
        }
        self.points.push(pt);
        true
    }

    /// Mark the subpath as closed, adding a final copy of the first point
    /// if the polyline doesn't already end there.
    ///
    /// Subpaths with fewer than two points are left untouched.
    pub fn close(&mut self) {
        if self.points.len() < 2 {
            return;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if (first.x - last.x).abs() > POINT_EPSILON || (first.y - last.y).abs() > POINT_EPSILON {
            self.points.push(first);
        }
        self.closed = true;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Point>, bool) {
        (self.points, self.closed)
    }
}

/// Source coordinate system of an icon, from the root `viewBox` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        let [min_x, min_y, width, height] = DEFAULT_VIEWBOX;
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl FromStr for ViewBox {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let parts: Vec<String> = attr_split(value).collect();
        if parts.len() != 4 {
            return Err(Error::Parse(format!(
                "viewBox needs four numbers: '{value}'"
            )));
        }
        Ok(Self {
            min_x: strp(&parts[0])?,
            min_y: strp(&parts[1])?,
            width: strp(&parts[2])?,
            height: strp(&parts[3])?,
        })
    }
}

impl ViewBox {
    /// Parse an optional `viewBox` attribute, falling back to the default
    /// `0 0 24 24` if it is missing or malformed.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(str::parse::<ViewBox>) {
            Some(Ok(vb)) => vb,
            Some(Err(e)) => {
                log::debug!("ignoring viewBox: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn max_extent(&self) -> f64 {
        self.width.max(self.height)
    }
}
