//! ## svgpoly - flatten SVG icon paths into fixed-point polylines
//!
//! `svgpoly` is normally run as a command line tool, taking a directory of
//! SVG icons and emitting one C source file per icon, each holding the
//! icon's outline as arrays of 16-bit points.
//!
//! ## Library use
//!
//! A `ConvertConfig` object configures how geometry is produced (output
//! size, curve flatness, pre-rounding upscale). `convert_str` or
//! `convert_stream` turn a document into an `IconGeometry`, which the
//! functions in `emit` render into C source or JSON.
//!
//! Lower-level access is available through `path::interpret_path`, which
//! flattens a single path data string through any coordinate mapping.
//!
//! ## Example
//!
//! ```
//! let cfg = svgpoly::ConvertConfig::default();
//!
//! let input = r#"<svg viewBox="0 0 10 10"><path d="M1 1 H9 V9 Z"/></svg>"#;
//! let icon = svgpoly::convert_str(input, &cfg).unwrap();
//!
//! assert_eq!(icon.subpaths.len(), 1);
//! assert!(icon.subpaths[0].is_closed());
//! ```

use std::io::{BufRead, Cursor};

#[cfg(feature = "cli")]
pub mod cli;
pub mod constants;
pub mod document;
pub mod emit;
pub mod errors;
pub mod geometry;
mod icon;
pub mod path;
mod types;

pub use document::SvgSource;
pub use errors::{Error, PathWarning, Result};
pub use geometry::{Point, Subpath, ViewBox, ViewTransform};
pub use icon::{build_geometry, IconGeometry};

// Allow users of this as a library to easily retrieve the version of svgpoly being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings controlling how a document is turned into geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertConfig {
    /// Scale the larger viewBox extent to this size (0 keeps the viewBox size)
    pub size: u32,
    /// Maximum deviation of flattened curves from the true curve, in source units
    pub flatness: f64,
    /// Integer factor applied to all coordinates before quantization
    pub upscale: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            size: 0,
            flatness: constants::DEFAULT_FLATNESS,
            upscale: 1,
        }
    }
}

/// Reads an SVG document from `reader` and flattens its geometry.
pub fn convert_stream(reader: &mut dyn BufRead, config: &ConvertConfig) -> Result<IconGeometry> {
    let source = SvgSource::from_reader(reader)?;
    Ok(build_geometry(&source, config))
}

/// Convert an SVG document held in a string.
pub fn convert_str<T: Into<String>>(input: T, config: &ConvertConfig) -> Result<IconGeometry> {
    let mut input = Cursor::new(input.into());
    convert_stream(&mut input, config)
}

/// Convert an SVG document held in a string, using default settings.
pub fn convert_str_default<T: Into<String>>(input: T) -> Result<IconGeometry> {
    convert_str(input, &ConvertConfig::default())
}
