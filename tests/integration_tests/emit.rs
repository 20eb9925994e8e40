use assertables::{assert_contains, assert_not_contains};

use svgpoly::emit::{emit, emit_c, EmitConfig, OutputFormat};
use svgpoly::{convert_str, convert_str_default, ConvertConfig};

const HOLE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <path d="M2 2h20v20H2z M8 8v8h8V8z"/>
</svg>"#;

#[test]
fn test_emit_c_outline() {
    let icon = convert_str_default(HOLE_ICON).expect("valid");
    let out = emit_c("square-hole", &icon, &EmitConfig::default());
    assert_contains!(out, "// Generated icon: square-hole (24x24)\n");
    assert_contains!(
        out,
        "static const pix_point_t vg_icon_square_hole_p0[] = {\n  { 2, 2 },\n  { 22, 2 },\n  { 22, 22 },\n  { 2, 22 },\n  { 2, 2 },\n};\n"
    );
    assert_contains!(
        out,
        "static const pix_point_t vg_icon_square_hole_p1[] = {\n  { 8, 8 },\n  { 8, 16 },\n  { 16, 16 },\n  { 16, 8 },\n  { 8, 8 },\n};\n"
    );
    assert_contains!(out, "*count=2;\n");
    assert_contains!(out, "  if(!vg_icon_square_hole_build_1(out[1])) return false;\n");
}

#[test]
fn test_emit_c_filled_prefix() {
    let icon = convert_str_default(HOLE_ICON).expect("valid");
    let cfg = EmitConfig {
        prefix: "vg_icon_f_".into(),
        ..Default::default()
    };
    let out = emit_c("square-hole", &icon, &cfg);
    assert_contains!(out, "bool vg_icon_f_square_hole(vg_shape_t **out, size_t *count) {\n");
    assert_contains!(out, "  if(!vg_shape_path_clear(out[0], 5)) return false;\n");
    assert_contains!(out, "  if(!vg_path_break(p, 5)) return false;\n");
    assert_not_contains!(out, "_build_");
}

#[test]
fn test_emit_upscaled() {
    let input = r#"<svg viewBox="0 0 24 24"><path d="M0.3 0.3 L12.25 -0.75"/></svg>"#;
    let cfg = ConvertConfig {
        upscale: 4,
        ..Default::default()
    };
    let icon = convert_str(input, &cfg).expect("valid");
    let out = emit_c("dot", &icon, &EmitConfig::default());
    assert_contains!(out, "// Generated icon: dot (96x96)\n// Upscale factor: 4\n");
    assert_contains!(out, "  { 1, 1 },\n  { 49, -3 },\n");
}

#[test]
fn test_emit_warnings() {
    let input = r#"<svg><path d="M0 0 L1 1 K 2 2"/></svg>"#;
    let icon = convert_str_default(input).expect("valid");
    let out = emit_c("w", &icon, &EmitConfig::default());
    assert_contains!(out, "// WARNING: unsupported cmd K\n#include");
}

#[cfg(feature = "json")]
#[test]
fn test_emit_json_format() {
    let icon = convert_str_default(HOLE_ICON).expect("valid");
    let cfg = EmitConfig {
        format: OutputFormat::Json,
        ..Default::default()
    };
    let out = emit("square-hole", &icon, &cfg).expect("json output");
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["name"], "square-hole");
    assert_eq!(value["subpaths"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["subpaths"][1]["points"][2], serde_json::json!([16, 16]));
    assert_eq!(value["subpaths"][0]["closed"], true);
}

#[test]
fn test_emit_dispatch_c() {
    let icon = convert_str_default(HOLE_ICON).expect("valid");
    let out = emit("x", &icon, &EmitConfig::default()).expect("c output");
    assert_contains!(out, "#include <vg/vg.h>\n");
}
