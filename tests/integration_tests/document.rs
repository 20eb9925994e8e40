use assertables::assert_contains;

use svgpoly::geometry::Point;
use svgpoly::{convert_str, convert_str_default, ConvertConfig, Error};

use super::utils::init_logging;

#[test]
fn test_default_viewbox() {
    let icon = convert_str_default(r#"<svg><path d="M1 2 L3 4"/></svg>"#).expect("valid");
    assert_eq!((icon.width, icon.height), (24., 24.));
    assert_eq!(icon.subpaths[0].points()[0], Point::new(1., 2.));
}

#[test]
fn test_malformed_viewbox() {
    init_logging();
    for vb in ["0 0 16", "a b c d", "0 0 16 16 16", ""] {
        let input = format!(r#"<svg viewBox="{vb}"><path d="M1 1"/></svg>"#);
        let icon = convert_str_default(input).expect("valid");
        assert_eq!((icon.width, icon.height), (24., 24.), "viewBox '{vb}'");
    }
    let icon = convert_str_default(r#"<svg viewBox="0,0,16,8"/>"#).expect("valid");
    assert_eq!((icon.width, icon.height), (16., 8.));
}

#[test]
fn test_viewbox_origin() {
    let input = r#"<svg viewBox="-12 -12 24 24"><path d="M-12 -12 L12 12"/></svg>"#;
    let icon = convert_str_default(input).expect("valid");
    assert_eq!(
        icon.subpaths[0].points(),
        &[Point::new(0., 0.), Point::new(24., 24.)]
    );
}

#[test]
fn test_normalize_and_upscale() {
    let input = r#"<svg viewBox="0 0 960 480"><path d="M480 240 h480"/></svg>"#;
    let cfg = ConvertConfig {
        size: 24,
        upscale: 16,
        ..Default::default()
    };
    let icon = convert_str(input, &cfg).expect("valid");
    assert_eq!((icon.width, icon.height), (384., 192.));
    assert_eq!(icon.upscale, 16);
    assert_eq!(
        icon.subpaths[0].points(),
        &[Point::new(192., 96.), Point::new(384., 96.)]
    );
}

#[test]
fn test_zero_extent_not_normalized() {
    let cfg = ConvertConfig {
        size: 24,
        ..Default::default()
    };
    let icon = convert_str(r#"<svg viewBox="0 0 0 10"/>"#, &cfg).expect("valid");
    assert_eq!((icon.width, icon.height), (0., 10.));
}

#[test]
fn test_warnings_reported() {
    let input = r#"<svg>
  <path d="M0 0 L1 1 L2"/>
  <path d="M"/>
  <path/>
</svg>"#;
    let icon = convert_str_default(input).expect("valid");
    assert_eq!(icon.warnings, vec!["bad lineto", "bad moveto"]);
    assert_eq!(icon.subpaths.len(), 1);
}

#[test]
fn test_document_errors() {
    let err = convert_str_default("<html/>").unwrap_err();
    assert!(matches!(err, Error::Document(_)));
    assert_contains!(err.to_string(), "no <svg> root element");

    assert!(convert_str_default(r#"<svg><path d="M0 0/></svg>"#).is_err());
}

#[test]
fn test_only_root_children_used() {
    let input = r#"<svg viewBox="0 0 24 24">
  <g transform="translate(4 4)"><path d="M0 0 L8 8"/><circle r="2"/></g>
  <defs><path id="p" d="M1 1 L9 9"/></defs>
  <path d="M2 2 L6 6"/>
</svg>"#;
    let icon = convert_str_default(input).expect("valid");
    assert_eq!(icon.subpaths.len(), 1);
    assert_eq!(
        icon.subpaths[0].points(),
        &[Point::new(2., 2.), Point::new(6., 6.)]
    );
}
