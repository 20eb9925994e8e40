//! Constants used throughout svgpoly

/// Absolute difference below which two coordinates are considered equal
pub const POINT_EPSILON: f64 = 1e-6;

/// Recursion ceiling for cubic subdivision; output stability depends on it
pub const MAX_SUBDIVISION_DEPTH: u32 = 12;

/// Ceiling on arc and circle segment counts; matches the number of pieces
/// a cubic can reach at the subdivision depth ceiling
pub const MAX_CURVE_SEGMENTS: usize = 1 << (MAX_SUBDIVISION_DEPTH + 1);

/// viewBox used when the root element has none (or an unusable one)
pub const DEFAULT_VIEWBOX: [f64; 4] = [0., 0., 24., 24.];

/// Default flattening tolerance, in source units
pub const DEFAULT_FLATNESS: f64 = 0.25;

/// Lower bound on polygon segments used to approximate a circle
pub const MIN_CIRCLE_SEGMENTS: usize = 8;
/// Circle segment count used when the angular step degenerates to zero
pub const FALLBACK_CIRCLE_SEGMENTS: usize = 16;

/// Symbol prefix for generated C functions
pub const DEFAULT_PREFIX: &str = "vg_icon_";
/// Prefix fragment marking a filled icon set, which implies grouping
pub const FILLED_PREFIX_MARKER: &str = "_f_";
/// Name of the generated C header listing every icon
pub const HEADER_FILE_NAME: &str = "icons.h";
