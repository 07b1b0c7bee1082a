//! 2D end-to-end scenarios: construction, knot insertion, splitting and
//! Bezier decomposition on a curve with a non-trivial control polygon.

use bspline_kernel::{fequals, BSpline, KnotKind};

fn quadratic_triangle() -> BSpline {
    let _ = env_logger::try_init();
    let mut spline = BSpline::new(2, 2, 3, KnotKind::None).unwrap();
    spline
        .ctrlp_mut()
        .copy_from_slice(&[-1.5, 0.0, 0.0, 1.5, 1.5, 0.0]);
    spline
        .knots_mut()
        .copy_from_slice(&[0.0, 0.0, 0.0, 3.0, 3.0, 3.0]);
    spline
}

fn cubic_zigzag() -> BSpline {
    let mut spline = BSpline::new(3, 2, 4, KnotKind::None).unwrap();
    spline.ctrlp_mut().copy_from_slice(&[
        -1.5, -1.5, -0.5, 1.5, 0.5, -1.5, 1.5, 1.5,
    ]);
    spline
        .knots_mut()
        .copy_from_slice(&[0.0, 1.0, 2.0, 2.0, 5.0, 5.0, 6.0, 7.0]);
    spline
}

#[test]
fn quadratic_triangle_apex_is_the_curve_midpoint() {
    let spline = quadratic_triangle();
    let net = spline.evaluate(1.5).unwrap();
    assert!(fequals(net.result()[0], 0.0));
    assert!(fequals(net.result()[1], 0.75));
}

#[test]
fn cubic_zigzag_insert_knot_preserves_shape() {
    let spline = cubic_zigzag();
    let before = spline.evaluate(3.0).unwrap();
    let (inserted, _) = spline.insert_knot(3.0, 1).unwrap();
    let after = inserted.evaluate(3.0).unwrap();
    assert!(fequals(before.result()[0], after.result()[0]));
    assert!(fequals(before.result()[1], after.result()[1]));
    assert_eq!(inserted.n_ctrlp(), spline.n_ctrlp() + 1);
}

#[test]
fn cubic_zigzag_split_isolates_the_double_knot() {
    let spline = cubic_zigzag();
    let (split, k) = spline.split(2.0).unwrap();
    let mult = split
        .knots()
        .iter()
        .filter(|&&x| fequals(x, 2.0))
        .count();
    assert_eq!(mult, split.order());
    assert!(fequals(split.knots()[k], 2.0));
}

#[test]
fn quadratic_triangle_to_beziers_keeps_the_curve() {
    let spline = quadratic_triangle();
    let decomposed = spline.to_beziers().unwrap();
    for t in [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
        let before = spline.evaluate(t).unwrap();
        let after = decomposed.evaluate(t).unwrap();
        assert!(fequals(before.result()[0], after.result()[0]), "t={t}");
        assert!(fequals(before.result()[1], after.result()[1]), "t={t}");
    }
}
