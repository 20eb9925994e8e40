//! Rendering of flattened icon geometry into output source formats.

mod c;
#[cfg(feature = "json")]
mod json;

pub use c::{emit_c, emit_header};
#[cfg(feature = "json")]
pub use json::emit_json;

use crate::constants::{DEFAULT_PREFIX, FILLED_PREFIX_MARKER};
use crate::errors::{Error, Result};
use crate::IconGeometry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// C source using the `vg` shape API
    #[default]
    C,
    /// JSON document, one per icon
    Json,
}

impl OutputFormat {
    /// File extension for files written in this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::C => "c",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "c" => Ok(OutputFormat::C),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::Parse(format!("unknown output format '{s}'"))),
        }
    }
}

/// Settings controlling how geometry is written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitConfig {
    /// Prefix for generated symbol names
    pub prefix: String,
    /// Emit all subpaths as one path separated by breaks, rather than
    /// one shape per subpath
    pub group: bool,
    pub format: OutputFormat,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            group: false,
            format: OutputFormat::default(),
        }
    }
}

impl EmitConfig {
    /// Whether grouped output is in effect; filled icon sets, marked by
    /// their prefix, always group so holes are kept.
    pub fn grouped(&self) -> bool {
        self.group || self.prefix.contains(FILLED_PREFIX_MARKER)
    }

    /// Full C symbol name for an icon
    pub fn symbol(&self, name: &str) -> String {
        format!("{}{}", self.prefix, sanitize_ident(name))
    }
}

/// Render `icon` in the configured format.
pub fn emit(name: &str, icon: &IconGeometry, config: &EmitConfig) -> Result<String> {
    match config.format {
        OutputFormat::C => Ok(emit_c(name, icon, config)),
        #[cfg(feature = "json")]
        OutputFormat::Json => emit_json(name, icon),
        #[cfg(not(feature = "json"))]
        OutputFormat::Json => Err(Error::Message(
            "JSON output requires the 'json' feature".into(),
        )),
    }
}

/// Quantize a coordinate to a signed 16-bit integer.
///
/// Rounds half away from zero; out of range values saturate.
pub fn clamp16(value: f64) -> i16 {
    if value > i16::MAX as f64 {
        i16::MAX
    } else if value < i16::MIN as f64 {
        i16::MIN
    } else {
        // NaN lands here and becomes 0
        value.round() as i16
    }
}

/// Turn an arbitrary name into a C identifier fragment.
///
/// ASCII letters and `_` are kept, as are digits other than at the start;
/// `-`, space and `.` become `_`, and anything else is dropped.
pub fn sanitize_ident(name: &str) -> String {
    let ident: String = name
        .char_indices()
        .filter_map(|(i, c)| match c {
            'a'..='z' | 'A'..='Z' | '_' => Some(c),
            '0'..='9' if i > 0 => Some(c),
            '-' | ' ' | '.' => Some('_'),
            _ => None,
        })
        .collect();
    if ident.is_empty() {
        "icon".to_owned()
    } else {
        ident
    }
}
