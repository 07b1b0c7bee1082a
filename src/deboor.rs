//! The de Boor evaluation net.

use crate::bspline::BSpline;
use crate::error::{Error, Result};
use crate::tolerance::Tolerance;

/// The triangular de Boor scheme computed while evaluating a spline at a
/// parameter `u`.
///
/// For a regular (`s <= deg`) evaluation, `points` holds the full recursion
/// triangle: the first `h + 1` entries are the affected control points, each
/// subsequent level is one point shorter, and the final, singleton level is
/// the curve value. For a full-multiplicity (`s == order`) evaluation no
/// recursion runs; `points` holds the one or two control points adjacent to
/// the knot, and `result_idx` picks out the correct one.
#[derive(Debug, Clone, PartialEq)]
pub struct DeBoorNet {
    /// The (possibly snapped) parameter this net was evaluated at.
    pub u: f64,
    /// Knot span index: `knots[k] <= u < knots[k+1]`.
    pub k: usize,
    /// Multiplicity of `u` in the knot vector.
    pub s: usize,
    /// Recursion levels remaining, `max(deg - s, 0)`.
    pub h: usize,
    /// Dimension of each stored point.
    pub dim: usize,
    /// Number of points stored in `points` (not scalars).
    pub n_points: usize,
    /// Dense row-major storage of the recursion triangle (or the degenerate
    /// one/two control points), `n_points * dim` scalars.
    pub points: Vec<f64>,
    /// Index (in points, not scalars) of the evaluated curve point.
    pub(crate) result_idx: usize,
    /// Number of control points copied verbatim without running the
    /// recursion: `0` for a regular evaluation, `1` or `2` for a
    /// full-multiplicity knot.
    pub(crate) degenerate_points: usize,
}

impl DeBoorNet {
    /// The evaluated curve point.
    pub fn result(&self) -> &[f64] {
        self.point(self.result_idx)
    }

    /// The `i`th stored point.
    pub fn point(&self, i: usize) -> &[f64] {
        &self.points[i * self.dim..(i + 1) * self.dim]
    }

    /// `0` if the recursion ran (`s <= deg`), or `1`/`2` if `u` landed on a
    /// knot of full multiplicity and evaluation short-circuited to a
    /// verbatim control point. [`split`](crate::BSpline::split) and
    /// [`insert_knot`](crate::BSpline::insert_knot) branch on this value.
    pub fn n_affected_points(&self) -> usize {
        self.degenerate_points
    }
}

impl BSpline {
    /// Evaluates the spline at `u`, producing the de Boor net.
    ///
    /// # Errors
    /// - [`Error::UUndefined`] if `u` lies outside the evaluable domain
    /// - [`Error::Multiplicity`] if `u`'s multiplicity exceeds `order`
    pub fn evaluate(&self, u: f64) -> Result<DeBoorNet> {
        self.evaluate_with_tolerance(u, &Tolerance::default())
    }

    /// Like [`evaluate`](Self::evaluate), with an explicit float-comparison
    /// tolerance instead of the crate default.
    pub fn evaluate_with_tolerance(&self, u: f64, tol: &Tolerance) -> Result<DeBoorNet> {
        let deg = self.deg;
        let order = self.order;
        let n_knots = self.n_knots;
        let knots = &self.knots;

        // k_raw is the first index with knots[i] > u (strictly, ignoring
        // fequals matches), or n_knots if the scan never finds one.
        let mut k_raw = n_knots;
        let mut s = 0usize;
        for (i, &knot) in knots.iter().enumerate() {
            if tol.fequals(u, knot) {
                s += 1;
            } else if u < knot {
                k_raw = i;
                break;
            }
        }

        if k_raw == 0 {
            log::trace!("evaluate u={u} below domain");
            return Err(Error::UUndefined);
        }
        if k_raw == n_knots && s == 0 {
            log::trace!("evaluate u={u} above domain");
            return Err(Error::UUndefined);
        }
        if s <= deg && (k_raw <= deg || k_raw > n_knots - deg + s - 1) {
            log::trace!("evaluate u={u} lands in clamped padding region");
            return Err(Error::UUndefined);
        }

        let k = k_raw - 1;
        let snapped_u = if tol.fequals(u, knots[k]) { knots[k] } else { u };

        log::trace!("evaluate u={snapped_u} k={k} s={s} deg={deg}");

        if s > order {
            return Err(Error::Multiplicity);
        }

        if s == order {
            return Ok(self.evaluate_full_multiplicity(snapped_u, k, s));
        }

        Ok(self.evaluate_recursive(snapped_u, k, s))
    }

    fn evaluate_full_multiplicity(&self, u: f64, k: usize, s: usize) -> DeBoorNet {
        let dim = self.dim;
        let left_idx = k as isize - s as isize;
        let right_idx = left_idx + 1;

        let mut points = Vec::with_capacity(2 * dim);
        if left_idx >= 0 {
            points.extend_from_slice(self.point(left_idx as usize));
        }
        if right_idx >= 0 && (right_idx as usize) < self.n_ctrlp {
            points.extend_from_slice(self.point(right_idx as usize));
        }
        let n_points = points.len() / dim;

        DeBoorNet {
            u,
            k,
            s,
            h: 0,
            dim,
            n_points,
            points,
            result_idx: n_points - 1,
            degenerate_points: n_points,
        }
    }

    fn evaluate_recursive(&self, u: f64, k: usize, s: usize) -> DeBoorNet {
        let deg = self.deg;
        let dim = self.dim;
        let h = deg - s;
        let fst = k - deg;
        let lst = k - s;
        let level_size = lst - fst + 1; // == h + 1
        let n_points = level_size * (level_size + 1) / 2;

        let mut points = vec![0.0; n_points * dim];
        points[..level_size * dim].copy_from_slice(&self.ctrlp[fst * dim..(fst + level_size) * dim]);

        let mut level_start = 0usize;
        let mut level_len = level_size;
        for r in 1..=h {
            let new_level_len = level_len - 1;
            let new_level_start = level_start + level_len;
            for j in 0..new_level_len {
                let i = fst + r + j;
                let alpha = (u - self.knots[i]) / (self.knots[i + deg - r + 1] - self.knots[i]);
                let left = level_start + j;
                let right = level_start + j + 1;
                for d in 0..dim {
                    let lv = points[left * dim + d];
                    let rv = points[right * dim + d];
                    points[(new_level_start + j) * dim + d] = alpha * rv + (1.0 - alpha) * lv;
                }
            }
            level_start = new_level_start;
            level_len = new_level_len;
        }

        DeBoorNet {
            u,
            k,
            s,
            h,
            dim,
            n_points,
            points,
            result_idx: level_start,
            degenerate_points: 0,
        }
    }
}
