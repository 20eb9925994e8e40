use assertables::{assert_ge, assert_in_delta, assert_le};
use itertools::Itertools;

use svgpoly::geometry::Point;
use svgpoly::path::{elevate_quadratic, flatten_cubic, flatten_quadratic};
use svgpoly::PathWarning;

use super::utils::{cubic_at, init_logging, interpret, polyline_distance, pts};

// Material-style "radio button" outline: two concentric circles drawn
// with relative cubic and smooth-cubic commands.
const RING: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z";

#[test]
fn test_closed_square_path() {
    let geom = interpret("M0,0 L10,0 L10,10 Z", 0.25);
    assert!(geom.warnings.is_empty());
    assert_eq!(geom.subpaths.len(), 1);
    let sp = &geom.subpaths[0];
    assert!(sp.is_closed());
    assert_eq!(sp.points(), pts(&[(0., 0.), (10., 0.), (10., 10.), (0., 0.)]));
}

#[test]
fn test_moveto_without_close() {
    let geom = interpret("M0,0 L10,0 M20,0 L30,0", 0.25);
    assert_eq!(geom.subpaths.len(), 2);
    for sp in &geom.subpaths {
        assert!(!sp.is_closed());
        assert_eq!(sp.len(), 2);
    }
    assert_eq!(geom.subpaths[1].points()[0], Point::new(20., 0.));
}

#[test]
fn test_implicit_repetition() {
    let geom = interpret("M0,0 10,10 20,20", 0.25);
    assert_eq!(geom.subpaths.len(), 1);
    assert_eq!(
        geom.subpaths[0].points(),
        pts(&[(0., 0.), (10., 10.), (20., 20.)])
    );

    // relative moveto repeats as relative lineto
    let geom = interpret("m1 1 2 2 3 3", 0.25);
    assert_eq!(
        geom.subpaths[0].points(),
        pts(&[(1., 1.), (3., 3.), (6., 6.)])
    );
}

#[test]
fn test_ring_icon() {
    let geom = interpret(RING, 0.1);
    assert!(geom.warnings.is_empty());
    assert_eq!(geom.subpaths.len(), 2);

    let center = Point::new(12., 12.);
    for (sp, radius) in geom.subpaths.iter().zip([10., 8.]) {
        assert!(sp.is_closed());
        assert_eq!(sp.points().first(), sp.points().last());
        for &p in sp.points() {
            assert_in_delta!(p.distance(center), radius, 0.05);
        }
    }
    assert_eq!(geom.subpaths[1].points()[0], Point::new(12., 20.));
}

#[test]
fn test_no_adjacent_duplicates() {
    let data = format!("{RING} M0 0 L0 0 L0 0.0000001 h0 v0 L5 5 Q5 5 5 5 A3 3 0 0 1 5 5 z");
    for tol in [1., 0.25, 0.01] {
        let geom = interpret(&data, tol);
        for sp in &geom.subpaths {
            for (a, b) in sp.points().iter().tuple_windows() {
                assert!(!a.approx_eq(*b), "duplicate vertices {a:?} {b:?}");
            }
        }
    }
}

#[test]
fn test_cubic_within_tolerance() {
    let curve = [
        Point::new(0., 0.),
        Point::new(30., 90.),
        Point::new(70., -60.),
        Point::new(100., 10.),
    ];
    for tol in [2., 0.5, 0.1] {
        let line = flatten_cubic(curve[0], curve[1], curve[2], curve[3], tol);
        assert_eq!(line.first(), Some(&curve[0]));
        assert_eq!(line.last(), Some(&curve[3]));
        for i in 0..=500 {
            let p = cubic_at(curve, i as f64 / 500.);
            assert_le!(polyline_distance(p, &line), tol + 1e-9);
        }
    }
}

#[test]
fn test_tolerance_monotonic() {
    let mut previous = 0;
    for tol in [4., 2., 1., 0.5, 0.25, 0.1, 0.05, 0.01] {
        let geom = interpret(RING, tol);
        let count: usize = geom.subpaths.iter().map(|sp| sp.len()).sum();
        assert_ge!(count, previous);
        previous = count;
    }
}

#[test]
fn test_quadratic_matches_elevation() {
    let (p0, p1, p2) = (Point::new(0., 0.), Point::new(50., 80.), Point::new(100., 0.));
    let [c0, c1, c2, c3] = elevate_quadratic(p0, p1, p2);
    let quad = flatten_quadratic(p0, p1, p2, 0.2);
    let cubic = flatten_cubic(c0, c1, c2, c3, 0.2);
    assert_eq!(quad.len(), cubic.len());
    for (a, b) in quad.iter().zip(&cubic) {
        assert_in_delta!(a.x, b.x, 1e-12);
        assert_in_delta!(a.y, b.y, 1e-12);
    }

    // and the path commands agree with each other
    let q = interpret("M0 0 Q50 80 100 0", 0.2);
    let c = interpret(
        &format!("M0 0 C{} {} {} {} 100 0", c1.x, c1.y, c2.x, c2.y),
        0.2,
    );
    assert_eq!(q.subpaths[0].len(), c.subpaths[0].len());
}

#[test]
fn test_arc_reaches_endpoint() {
    for flags in ["0 0", "0 1", "1 0", "1 1"] {
        let geom = interpret(&format!("M10 10 A8 5 30 {flags} 20 14"), 0.05);
        let sp = &geom.subpaths[0];
        let last = sp.points()[sp.len() - 1];
        assert_in_delta!(last.x, 20., 1e-6);
        assert_in_delta!(last.y, 14., 1e-6);
        assert_ge!(sp.len(), 3);
    }
}

#[test]
fn test_malformed_input() {
    init_logging();

    // a bad moveto stops; earlier subpaths survive
    let geom = interpret("M0 0 L5 5 M1", 0.25);
    assert_eq!(geom.subpaths.len(), 1);
    assert_eq!(geom.warnings, vec![PathWarning::BadMoveTo]);

    // other bad commands are skipped
    let geom = interpret("M0 0 C1 1 2 L4 4", 0.25);
    assert_eq!(geom.warnings, vec![PathWarning::BadOperands('C')]);

    // unsupported commands are reported once
    let geom = interpret("M0 0 R 1 2 3 L4 4", 0.25);
    assert_eq!(geom.warnings, vec![PathWarning::Unsupported('R')]);
    assert_eq!(geom.subpaths[0].points(), pts(&[(0., 0.), (4., 4.)]));

    // a huge arc radius still gives a bounded polyline
    let geom = interpret("M0 0 A1e15 1e15 0 1 1 1 0", 0.25);
    assert!(geom.warnings.is_empty());
    assert_le!(geom.subpaths[0].len(), 8193);

    assert!(interpret("", 0.25).subpaths.is_empty());
    assert!(interpret("  ,, ", 0.25).warnings.is_empty());
}
