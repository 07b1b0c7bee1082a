//! End-to-end scalar-curve scenarios, mirroring the degree/knot-vector
//! shapes the kernel this crate grew out of exercised in its own basic
//! tests, but against `BSpline`'s construct -> evaluate API.

use bspline_kernel::{BSpline, Error, KnotKind};

fn scalar_spline(deg: usize, ctrlp: &[f64], knots: &[f64]) -> BSpline {
    let mut spline = BSpline::new(deg, 1, ctrlp.len(), KnotKind::None).unwrap();
    spline.ctrlp_mut().copy_from_slice(ctrlp);
    spline.knots_mut().copy_from_slice(knots);
    spline
}

fn check(spline: &BSpline, expect: &[(f64, f64)]) {
    for &(t, x) in expect {
        let net = spline.evaluate(t).unwrap();
        assert!(
            (net.result()[0] - x).abs() < 1e-4,
            "t={t}: got {}, want {x}",
            net.result()[0]
        );
    }
}

#[test]
fn linear_bspline() {
    let expect = [(0.0, 0.0), (0.2, 0.2), (0.4, 0.4), (0.6, 0.6), (0.8, 0.8), (1.0, 1.0)];
    let spline = scalar_spline(1, &[0.0, 1.0], &[0.0, 0.0, 1.0, 1.0]);
    check(&spline, &expect);
}

#[test]
fn quadratic_bspline() {
    let expect = [
        (0.0, 0.0),
        (0.5, 0.125),
        (1.0, 0.5),
        (1.4, 0.74),
        (1.5, 0.75),
        (1.6, 0.74),
        (2.0, 0.5),
        (2.5, 0.125),
        (3.0, 0.0),
    ];
    let spline = scalar_spline(
        2,
        &[0.0, 0.0, 1.0, 0.0, 0.0],
        &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0],
    );
    check(&spline, &expect);
}

#[test]
fn cubic_bspline() {
    let expect = [
        (-2.0, 0.0),
        (-1.5, 0.125),
        (-1.0, 1.0),
        (-0.6, 2.488),
        (0.0, 4.0),
        (0.5, 2.875),
        (1.5, 0.125),
        (2.0, 0.0),
    ];
    let spline = scalar_spline(
        3,
        &[0.0, 0.0, 0.0, 6.0, 0.0, 0.0, 0.0],
        &[-2.0, -2.0, -2.0, -2.0, -1.0, 0.0, 1.0, 2.0, 2.0, 2.0, 2.0],
    );
    check(&spline, &expect);
}

#[test]
fn quartic_bspline() {
    let expect = [
        (0.0, 0.0),
        (0.4, 0.0010666668),
        (1.0, 0.041666668),
        (1.5, 0.19791667),
        (2.0, 0.4583333),
        (2.5, 0.5989583),
        (3.0, 0.4583333),
        (3.2, 0.35206667),
        (4.1, 0.02733751),
        (4.5, 0.002604167),
        (5.0, 0.0),
    ];
    let spline = scalar_spline(
        4,
        &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 5.0, 5.0],
    );
    check(&spline, &expect);
}

#[test]
fn evaluating_outside_the_knot_domain_is_undefined() {
    let spline = scalar_spline(1, &[0.0, 1.0], &[0.0, 0.0, 1.0, 1.0]);
    assert_eq!(spline.evaluate(-0.01), Err(Error::UUndefined));
    assert_eq!(spline.evaluate(1.01), Err(Error::UUndefined));
}
