//! Boehm's knot insertion algorithm, and the split/to-beziers operations
//! built on top of it.

use crate::bspline::BSpline;
use crate::deboor::DeBoorNet;
use crate::error::{Error, Result};

/// Inserts `net.u` into `spline`'s knot vector `n` additional times, using
/// the already-computed de Boor net to rebuild the affected control points.
///
/// Returns the new spline and the index the new knot was inserted at
/// (`net.k + n`).
fn insert_from_net(spline: &BSpline, net: &DeBoorNet, n: usize) -> Result<(BSpline, usize)> {
    if net.s + n > spline.order {
        return Err(Error::Multiplicity);
    }
    let new_k = net.k + n;
    if n == 0 {
        // No new knot to splice in; this degenerates to a copy, and a
        // full-multiplicity net's fst/lst window isn't well-defined anyway.
        return Ok((spline.clone(), new_k));
    }

    let deg = spline.deg;
    let dim = spline.dim;
    let k = net.k;
    let n_tot = net.h + 1; // number of affected control points
    let fst = k - deg;
    let cidx = fst + n_tot; // == lst + 1
    let kidx = k + 1;

    let new_n_ctrlp = spline.n_ctrlp.checked_add(n).ok_or(Error::OverUnderflow)?;
    let new_n_knots = spline.n_knots.checked_add(n).ok_or(Error::OverUnderflow)?;

    log::trace!("insert_from_net u={} k={k} s={} n={n} N={n_tot}", net.u, net.s);

    let mut ctrlp = vec![0.0; new_n_ctrlp * dim];
    ctrlp[..fst * dim].copy_from_slice(&spline.ctrlp[..fst * dim]);
    ctrlp[(cidx + n) * dim..].copy_from_slice(&spline.ctrlp[cidx * dim..]);

    // Offsets (in points, not scalars) of each level of the net's triangle.
    let mut level_offset = vec![0usize; n_tot];
    let mut acc = 0usize;
    for (r, slot) in level_offset.iter_mut().enumerate() {
        *slot = acc;
        acc += n_tot - r;
    }

    // Down the left edge of the triangle: leftmost point of levels 0..n.
    for j in 0..n {
        let idx = level_offset[j];
        ctrlp[(fst + j) * dim..(fst + j + 1) * dim].copy_from_slice(net.point(idx));
    }
    // Straight across the centre: every point of level n, verbatim.
    let centre_len = n_tot - n;
    for j in 0..centre_len {
        let idx = level_offset[n] + j;
        ctrlp[(fst + n + j) * dim..(fst + n + j + 1) * dim].copy_from_slice(net.point(idx));
    }
    // Back up the right edge: rightmost point of levels n-1 downto 0.
    for i in 0..n {
        let level = n - 1 - i;
        let level_len = n_tot - level;
        let idx = level_offset[level] + level_len - 1;
        ctrlp[(fst + n_tot + i) * dim..(fst + n_tot + i + 1) * dim].copy_from_slice(net.point(idx));
    }

    let mut knots = vec![0.0; new_n_knots];
    knots[..kidx].copy_from_slice(&spline.knots[..kidx]);
    knots[kidx + n..].copy_from_slice(&spline.knots[kidx..]);
    knots[kidx..kidx + n].fill(net.u);

    Ok((
        BSpline {
            deg,
            order: spline.order,
            dim,
            n_ctrlp: new_n_ctrlp,
            n_knots: new_n_knots,
            ctrlp,
            knots,
        },
        new_k,
    ))
}

impl BSpline {
    /// Inserts `u` into the knot vector with multiplicity `n`, rebuilding
    /// control points via Boehm's algorithm. Returns the new spline and the
    /// index the new knot landed at.
    ///
    /// # Errors
    /// - [`Error::UUndefined`] / [`Error::Multiplicity`] propagated from
    ///   evaluating at `u`
    /// - [`Error::Multiplicity`] if `u`'s resulting multiplicity would
    ///   exceed `order`
    /// - [`Error::OverUnderflow`] if the resulting sizes would overflow
    pub fn insert_knot(&self, u: f64, n: usize) -> Result<(BSpline, usize)> {
        let net = self.evaluate(u)?;
        insert_from_net(self, &net, n)
    }

    /// Raises the multiplicity of `u` to exactly `order`, producing a spline
    /// with a full-multiplicity knot there. Returns the new spline and the
    /// index of that knot.
    pub fn split(&self, u: f64) -> Result<(BSpline, usize)> {
        let net = self.evaluate(u)?;
        if net.n_affected_points() >= 1 {
            // already at full multiplicity: an endpoint, or an existing
            // interior knot of full multiplicity.
            return Ok((self.clone(), net.k));
        }
        let n = net.h + 1;
        let new_k = net.k + net.h + 1;
        let (spline, _) = insert_from_net(self, &net, n)?;
        Ok((spline, new_k))
    }
}
