mod transform;
mod types;

pub use transform::ViewTransform;
pub use types::{Point, Subpath, ViewBox};
