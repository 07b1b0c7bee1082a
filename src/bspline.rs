use crate::error::{Error, Result};
use crate::knot::{setup_knots, KnotKind};
use crate::tolerance::Tolerance;

/// A non-uniform B-spline curve of degree `deg` in `R^dim`, backed by dense
/// row-major control-point and knot arrays.
///
/// `n_knots` is always `n_ctrlp + order` and `order` is always `deg + 1`;
/// every public constructor and mutator maintains this coupling.
#[derive(Debug, Clone)]
pub struct BSpline {
    pub(crate) deg: usize,
    pub(crate) order: usize,
    pub(crate) dim: usize,
    pub(crate) n_ctrlp: usize,
    pub(crate) n_knots: usize,
    pub(crate) ctrlp: Vec<f64>,
    pub(crate) knots: Vec<f64>,
}

impl BSpline {
    /// Allocates a new spline of the given `deg`/`dim`/`n_ctrlp`, filling the
    /// knot vector per `kind`.
    ///
    /// # Errors
    /// - [`Error::DimZero`] if `dim < 1`
    /// - [`Error::DegGeNCtrlp`] if `deg >= n_ctrlp`
    /// - [`Error::OverUnderflow`] if `order` or `n_knots` would overflow
    pub fn new(deg: usize, dim: usize, n_ctrlp: usize, kind: KnotKind) -> Result<BSpline> {
        if dim < 1 {
            return Err(Error::DimZero);
        }
        if deg >= n_ctrlp {
            return Err(Error::DegGeNCtrlp);
        }
        let order = deg.checked_add(1).ok_or(Error::OverUnderflow)?;
        let n_knots = n_ctrlp.checked_add(order).ok_or(Error::OverUnderflow)?;
        let n_ctrlp_scalars = n_ctrlp.checked_mul(dim).ok_or(Error::OverUnderflow)?;

        log::trace!(
            "BSpline::new deg={deg} dim={dim} n_ctrlp={n_ctrlp} order={order} n_knots={n_knots}"
        );

        let mut knots = vec![0.0; n_knots];
        setup_knots(&mut knots, kind, deg, order);

        Ok(BSpline {
            deg,
            order,
            dim,
            n_ctrlp,
            n_knots,
            ctrlp: vec![0.0; n_ctrlp_scalars],
            knots,
        })
    }

    /// Polynomial degree.
    pub fn degree(&self) -> usize {
        self.deg
    }

    /// `degree + 1`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Dimension of the ambient space the control points live in.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of control points.
    pub fn n_ctrlp(&self) -> usize {
        self.n_ctrlp
    }

    /// Number of knots.
    pub fn n_knots(&self) -> usize {
        self.n_knots
    }

    /// Row-major control-point scalars, `n_ctrlp * dim` entries.
    pub fn ctrlp(&self) -> &[f64] {
        &self.ctrlp
    }

    /// Mutable access to the row-major control-point scalars.
    pub fn ctrlp_mut(&mut self) -> &mut [f64] {
        &mut self.ctrlp
    }

    /// The `i`th control point.
    pub fn point(&self, i: usize) -> &[f64] {
        &self.ctrlp[i * self.dim..(i + 1) * self.dim]
    }

    /// The non-decreasing knot vector, `n_knots` entries.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Mutable access to the knot vector, for callers who constructed with
    /// [`KnotKind::None`] and need to fill it in by hand.
    pub fn knots_mut(&mut self) -> &mut [f64] {
        &mut self.knots
    }

    /// Re-fills the knot vector per `kind`, leaving control points and sizes
    /// untouched.
    pub fn setup_knots(&mut self, kind: KnotKind) {
        setup_knots(&mut self.knots, kind, self.deg, self.order);
    }

    /// Deep-copies `self` into `dst`, which may not alias `self`.
    ///
    /// # Errors
    /// [`Error::InputEqOutput`] if `dst` is the same spline as `self`.
    pub fn copy_into(&self, dst: &mut BSpline) -> Result<()> {
        if std::ptr::eq(self, dst) {
            return Err(Error::InputEqOutput);
        }
        dst.deg = self.deg;
        dst.order = self.order;
        dst.dim = self.dim;
        dst.n_ctrlp = self.n_ctrlp;
        dst.n_knots = self.n_knots;
        dst.ctrlp.clear();
        dst.ctrlp.extend_from_slice(&self.ctrlp);
        dst.knots.clear();
        dst.knots.extend_from_slice(&self.knots);
        Ok(())
    }

    /// Returns a new spline whose `n_ctrlp`/`n_knots` are each `n` greater
    /// than `self`'s, with existing data shifted to the `back` or front per
    /// the sign of `n`.
    ///
    /// # Errors
    /// - [`Error::DegGeNCtrlp`] if the result would have `n_ctrlp <= deg`
    /// - [`Error::OverUnderflow`] if `n`'s magnitude is inconsistent with the
    ///   current sizes (e.g. shrinking past zero)
    pub fn resize(&self, n: isize, back: bool) -> Result<BSpline> {
        let (new_n_ctrlp, new_n_knots) = resized_sizes(self.n_ctrlp, self.n_knots, n)?;
        if new_n_ctrlp <= self.deg {
            return Err(Error::DegGeNCtrlp);
        }
        log::trace!(
            "BSpline::resize n={n} back={back} n_ctrlp {}->{new_n_ctrlp}",
            self.n_ctrlp
        );
        let ctrlp = resize_array(&self.ctrlp, self.n_ctrlp, self.dim, n, back);
        let knots = resize_array(&self.knots, self.n_knots, 1, n, back);
        Ok(BSpline {
            deg: self.deg,
            order: self.order,
            dim: self.dim,
            n_ctrlp: new_n_ctrlp,
            n_knots: new_n_knots,
            ctrlp,
            knots,
        })
    }

    /// Like [`resize`](Self::resize), but overwrites `self` in place. The new
    /// buffers are built in full before `self`'s old buffers are dropped, so
    /// a failure never leaves `self` partially modified.
    pub fn resize_in_place(&mut self, n: isize, back: bool) -> Result<()> {
        let (new_n_ctrlp, new_n_knots) = resized_sizes(self.n_ctrlp, self.n_knots, n)?;
        if new_n_ctrlp <= self.deg {
            return Err(Error::DegGeNCtrlp);
        }
        let ctrlp = resize_array(&self.ctrlp, self.n_ctrlp, self.dim, n, back);
        let knots = resize_array(&self.knots, self.n_knots, 1, n, back);
        self.n_ctrlp = new_n_ctrlp;
        self.n_knots = new_n_knots;
        self.ctrlp = ctrlp;
        self.knots = knots;
        Ok(())
    }

    /// Linearly interpolates each control point toward the chord between the
    /// first and last control points by factor `1 - b`.
    ///
    /// Infallible: every valid spline has `n_ctrlp >= 2` (since `n_ctrlp >
    /// deg >= 0`), so the chord is always well-defined.
    pub fn buckle(&self, b: f64) -> BSpline {
        let n = self.n_ctrlp;
        let dim = self.dim;
        let mut ctrlp = vec![0.0; self.ctrlp.len()];
        let p0 = self.point(0);
        let plast = self.point(n - 1);
        for i in 0..n {
            let t = i as f64 / (n - 1) as f64;
            let pi = self.point(i);
            for d in 0..dim {
                let chord = p0[d] + t * (plast[d] - p0[d]);
                ctrlp[i * dim + d] = b * pi[d] + (1.0 - b) * chord;
            }
        }
        BSpline {
            deg: self.deg,
            order: self.order,
            dim: self.dim,
            n_ctrlp: self.n_ctrlp,
            n_knots: self.n_knots,
            ctrlp,
            knots: self.knots.clone(),
        }
    }

    /// Structural equality under the given tolerance: matching shape and
    /// every control-point scalar/knot equal within `tol`.
    pub fn equals(&self, other: &BSpline, tol: &Tolerance) -> bool {
        if self.deg != other.deg
            || self.dim != other.dim
            || self.n_ctrlp != other.n_ctrlp
            || self.n_knots != other.n_knots
        {
            return false;
        }
        self.ctrlp
            .iter()
            .zip(other.ctrlp.iter())
            .all(|(a, b)| tol.fequals(*a, *b))
            && self
                .knots
                .iter()
                .zip(other.knots.iter())
                .all(|(a, b)| tol.fequals(*a, *b))
    }
}

impl PartialEq for BSpline {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, &Tolerance::default())
    }
}

/// Validates and computes the post-resize sizes shared by `resize` and
/// `resize_in_place`.
fn resized_sizes(n_ctrlp: usize, n_knots: usize, n: isize) -> Result<(usize, usize)> {
    let new_n_ctrlp = n_ctrlp
        .checked_add_signed(n)
        .ok_or(Error::OverUnderflow)?;
    let new_n_knots = n_knots
        .checked_add_signed(n)
        .ok_or(Error::OverUnderflow)?;
    Ok((new_n_ctrlp, new_n_knots))
}

/// Grows/shrinks a flat row-major array of `old_items` rows of `width`
/// scalars each by `n` rows, biased to the `back` or front. Always builds
/// the new buffer before touching the old one.
pub(crate) fn resize_array(old: &[f64], old_items: usize, width: usize, n: isize, back: bool) -> Vec<f64> {
    let new_items = (old_items as isize + n) as usize;
    let mut new = vec![0.0; new_items * width];
    if n >= 0 {
        if back {
            new[..old_items * width].copy_from_slice(old);
        } else {
            let shift = n as usize;
            new[shift * width..].copy_from_slice(old);
        }
    } else {
        let removed = (-n) as usize;
        if back {
            new.copy_from_slice(&old[..new_items * width]);
        } else {
            new.copy_from_slice(&old[removed * width..]);
        }
    }
    new
}
