//! Bezier decomposition: splitting a spline until every interior knot has
//! full multiplicity, leaving a chain of Bezier segments end to end.

use crate::bspline::BSpline;
use crate::error::Result;
use crate::tolerance::fequals;

impl BSpline {
    /// Repeatedly [`split`](Self::split)s `self` at every interior knot that
    /// isn't already at full multiplicity, until the whole spline is a
    /// sequence of Bezier segments.
    ///
    /// A curve that isn't clamped at one or both ends is first split and
    /// trimmed at `knots[deg]`/`knots[n_knots - order]` to push the
    /// boundary value to full multiplicity there too, so every resulting
    /// segment - including the first/last - is a genuine Bezier curve
    /// rather than one still carrying a fractional-multiplicity boundary.
    pub fn to_beziers(&self) -> Result<BSpline> {
        let mut result = self.clone();
        let deg = result.deg;

        if !fequals(result.knots[0], result.knots[deg]) {
            let (next, k) = result.split(result.knots[deg])?;
            let drop = k as isize - deg as isize;
            result = next.resize(-drop, false)?;
        }

        let tail_idx = result.n_knots - result.order;
        if !fequals(result.knots[result.n_knots - 1], result.knots[tail_idx]) {
            let (next, k) = result.split(result.knots[tail_idx])?;
            let drop = (next.n_knots - 1) as isize - k as isize;
            result = next.resize(-drop, true)?;
        }

        loop {
            match result.next_undersplit_knot() {
                Some(u) => {
                    let (next, _) = result.split(u)?;
                    result = next;
                }
                None => return Ok(result),
            }
        }
    }

    /// The value of the first interior knot whose multiplicity is below
    /// `order`, or `None` if the spline is already a Bezier chain.
    fn next_undersplit_knot(&self) -> Option<f64> {
        let order = self.order;
        let n_knots = self.n_knots;
        let mut i = order;
        while i < n_knots - order {
            let u = self.knots[i];
            let mut mult = 1;
            while i + mult < n_knots && fequals(self.knots[i + mult], u) {
                mult += 1;
            }
            if mult < order {
                return Some(u);
            }
            i += mult;
        }
        None
    }
}
