use assertables::{assert_ge, assert_in_delta};
use itertools::Itertools;

use svgpoly::geometry::Point;
use svgpoly::path::{circle_segment_count, flatten_circle};
use svgpoly::{convert_str, ConvertConfig};

#[test]
fn test_circle_radius_5() {
    let center = Point::new(12., 12.);
    let sp = flatten_circle(center, 5., 5., 0.25, |p| p);
    assert!(sp.is_closed());
    // segments plus the repeated first vertex
    assert_ge!(sp.len() - 1, 8);
    for &p in sp.points() {
        assert_in_delta!(p.distance(center), 5., 1e-9);
    }
    assert_eq!(sp.points().first(), sp.points().last());
}

#[test]
fn test_circle_segments_within_tolerance() {
    let center = Point::new(0., 0.);
    for r in [3., 10., 50.] {
        let sp = flatten_circle(center, r, r, 0.25, |p| p);
        for (a, b) in sp.points().iter().tuple_windows() {
            // sagitta of each chord
            let mid = a.mid(*b);
            assert!(r - mid.distance(center) <= 0.25 + 1e-9);
        }
    }
}

#[test]
fn test_circle_fallbacks() {
    // tolerance at or above the output radius
    assert_eq!(circle_segment_count(0.5, 0.5, 0.5), 8);
    assert_eq!(circle_segment_count(0.1, 0.1, 0.25), 8);
    // zero tolerance degenerates to a zero angular step
    assert_eq!(circle_segment_count(5., 5., 0.), 16);
    // small circles are never below 8 segments
    assert_eq!(circle_segment_count(1., 1., 0.25), 8);
}

#[test]
fn test_circle_in_document() {
    let input = r#"<svg viewBox="10 10 20 20">
  <circle cx="20" cy="20" r="5"/>
</svg>"#;
    let cfg = ConvertConfig {
        size: 40,
        upscale: 2,
        ..Default::default()
    };
    let icon = convert_str(input, &cfg).expect("valid document");
    assert_eq!(icon.subpaths.len(), 1);
    // (20 - 10) * 2 * 2 = 40; radius 5 * 4 = 20
    let center = Point::new(40., 40.);
    let sp = &icon.subpaths[0];
    for &p in sp.points() {
        assert_in_delta!(p.distance(center), 20., 1e-9);
    }
    // segment count uses the unscaled radius
    assert_eq!(sp.len(), circle_segment_count(5., 20., 0.25) + 1);
}
