use serde_derive::Serialize;

use super::clamp16;
use crate::errors::{Error, Result};
use crate::IconGeometry;

#[derive(Serialize)]
struct JsonIcon<'a> {
    name: &'a str,
    width: i64,
    height: i64,
    upscale: u32,
    warnings: &'a [String],
    subpaths: Vec<JsonSubpath>,
}

#[derive(Serialize)]
struct JsonSubpath {
    closed: bool,
    points: Vec<[i16; 2]>,
}

/// Render one icon as a JSON document with quantized coordinates.
pub fn emit_json(name: &str, icon: &IconGeometry) -> Result<String> {
    let doc = JsonIcon {
        name,
        width: icon.width as i64,
        height: icon.height as i64,
        upscale: icon.upscale,
        warnings: &icon.warnings,
        subpaths: icon
            .subpaths
            .iter()
            .map(|sp| JsonSubpath {
                closed: sp.is_closed(),
                points: sp
                    .points()
                    .iter()
                    .map(|p| [clamp16(p.x), clamp16(p.y)])
                    .collect(),
            })
            .collect(),
    };
    let mut out = serde_json::to_string_pretty(&doc).map_err(Error::from_err)?;
    out.push('\n');
    Ok(out)
}
