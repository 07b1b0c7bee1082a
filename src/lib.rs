//! bspline-kernel
//! ===
//! A numerically careful kernel for non-uniform B-spline curves: de Boor
//! evaluation, Boehm knot insertion, knot-preserving splitting, control
//! point/knot resizing, and Bezier decomposition.
//!
//! Curves are stored densely: `ctrlp` is a flat row-major `Vec<f64>` of
//! `n_ctrlp * dim` scalars and `knots` a non-decreasing `Vec<f64>` of
//! `n_ctrlp + order` values, with `order == deg + 1`. There is no generic
//! point type - everything here is `f64`, which keeps the knot-insertion
//! and resize arithmetic exact and lets it be checked for overflow rather
//! than trusted to a generic numeric trait.
//!
//! # Example
//!
//! ```rust
//! use bspline_kernel::{BSpline, KnotKind};
//!
//! let mut spline = BSpline::new(3, 1, 7, KnotKind::Clamped).unwrap();
//! spline.ctrlp_mut().copy_from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let net = spline.evaluate(0.5).unwrap();
//! println!("{:?}", net.result());
//! ```
//!
//! # Readings on B-splines
//!
//! - [Wikipedia page on B-splines](https://en.wikipedia.org/wiki/B-spline)
//! - [Splines and B-splines: An Introduction](http://www.uio.no/studier/emner/matnat/ifi/INF-MAT5340/v07/undervisningsmateriale/kap1.pdf)

mod beziers;
mod bspline;
mod deboor;
mod error;
mod insert;
mod knot;
mod tolerance;

pub use bspline::BSpline;
pub use deboor::DeBoorNet;
pub use error::{Error, Result};
pub use knot::KnotKind;
pub use tolerance::{fequals, Tolerance, ABS_EPS, REL_EPS};
