//! C source output for the `vg` shape library.
//!
//! Each icon becomes a function with the signature
//!
//! ```c
//! bool <prefix><name>(vg_shape_t **out, size_t *count);
//! ```
//!
//! which creates the icon's shapes (owned by the caller) and reports how
//! many were written to `out`. It returns false on allocation failure.

use super::{clamp16, sanitize_ident, EmitConfig};
use crate::geometry::Subpath;
use crate::IconGeometry;

const INCLUDES: &str = "#include <vg/shape.h>\n#include <vg/primitives.h>\n#include <vg/vg.h>\n\n";

/// Render one icon as a C translation unit.
pub fn emit_c(name: &str, icon: &IconGeometry, config: &EmitConfig) -> String {
    let sym = config.symbol(name);
    let group = config.grouped();
    let subs = &icon.subpaths;

    let mut out = String::new();
    out.push_str(&format!(
        "// Generated icon: {name} ({}x{})\n",
        icon.width as i64, icon.height as i64
    ));
    out.push_str(&format!("// Upscale factor: {}\n", icon.upscale));
    if group {
        out.push_str("// Grouped subpaths: yes (multiple SVG subpaths emitted as one vg_path_t with segment breaks)\n");
    }
    for warning in &icon.warnings {
        out.push_str(&format!("// WARNING: {warning}\n"));
    }
    out.push_str(INCLUDES);

    for (i, sp) in subs.iter().enumerate() {
        point_array(&mut out, &sym, i, sp);
    }
    if group {
        grouped_builder(&mut out, &sym, subs);
    } else {
        shape_builders(&mut out, &sym, subs);
    }
    out
}

fn point_array(out: &mut String, sym: &str, idx: usize, sp: &Subpath) {
    out.push_str(&format!("static const pix_point_t {sym}_p{idx}[] = {{\n"));
    for pt in sp.points() {
        out.push_str(&format!("  {{ {}, {} }},\n", clamp16(pt.x), clamp16(pt.y)));
    }
    out.push_str("};\n");
}

fn append_loop(out: &mut String, sym: &str, idx: usize, len: usize) {
    out.push_str(&format!(
        "  for(int i=0;i<{len};++i){{ vg_path_append(p, &{sym}_p{idx}[i], NULL); }}\n"
    ));
}

/// A single shape holding one path, with a break between subpaths.
fn grouped_builder(out: &mut String, sym: &str, subs: &[Subpath]) {
    out.push_str(&format!("bool {sym}(vg_shape_t **out, size_t *count) {{\n"));
    out.push_str("  if(!out||!count) return false; *count=1;\n");
    out.push_str("  out[0]=vg_shape_create(); if(!out[0]) return false;\n");
    // reserve for the first subpath; later ones start new segments
    let reserve = subs.first().map_or(4, Subpath::len);
    out.push_str(&format!(
        "  if(!vg_shape_path_clear(out[0], {reserve})) return false;\n"
    ));
    out.push_str("  vg_path_t *p = vg_shape_path(out[0]); if(!p) return false;\n");
    for (i, sp) in subs.iter().enumerate() {
        out.push_str(&format!("  // subpath {i}\n"));
        if i > 0 {
            out.push_str(&format!(
                "  if(!vg_path_break(p, {})) return false;\n",
                sp.len()
            ));
        }
        append_loop(out, sym, i, sp.len());
    }
    out.push_str("  return true;\n}\n");
}

/// One shape per subpath, each filled by its own static helper.
fn shape_builders(out: &mut String, sym: &str, subs: &[Subpath]) {
    for (i, sp) in subs.iter().enumerate() {
        let total = sp.len();
        out.push_str(&format!(
            "static bool {sym}_build_{i}(vg_shape_t *s) {{\n  if(!s) return false;\n  if(!vg_shape_path_clear(s, {total})) return false;\n  vg_path_t *p = vg_shape_path(s); if(!p) return false;\n"
        ));
        append_loop(out, sym, i, total);
        out.push_str("  return true;\n}\n");
    }
    let n = subs.len();
    out.push_str(&format!("bool {sym}(vg_shape_t **out, size_t *count) {{\n"));
    out.push_str(&format!("  if(!out||!count) return false; *count={n};\n"));
    out.push_str(&format!(
        "  for(size_t i=0;i<{n};++i){{ out[i]=vg_shape_create(); if(!out[i]) {{ for(size_t j=0;j<i;++j) vg_shape_destroy(out[j]); return false; }} }}\n"
    ));
    for i in 0..n {
        out.push_str(&format!(
            "  if(!{sym}_build_{i}(out[{i}])) return false;\n"
        ));
    }
    out.push_str("  return true;\n}\n");
}

/// Header declaring the builder function for each named icon.
pub fn emit_header<S: AsRef<str>>(names: &[S], prefix: &str, upscale: u32) -> String {
    let mut out = String::from(
        "// Generated icons header\n#pragma once\n#include <stddef.h>\n#include <vg/shape.h>\n\n",
    );
    out.push_str(&format!(
        "#ifndef SVG2PIX_UPSCALE\n#define SVG2PIX_UPSCALE {}\n#endif\n\n",
        upscale.max(1)
    ));
    for name in names {
        out.push_str(&format!(
            "bool {prefix}{}(vg_shape_t **out, size_t *count);\n",
            sanitize_ident(name.as_ref())
        ));
    }
    out
}
