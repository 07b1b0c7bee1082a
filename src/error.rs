use thiserror::Error;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the spline kernel.
///
/// Every fallible entry point returns one of these instead of overloading a
/// success/failure code into a single signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Allocation failed. Unreachable from safe Rust (`Vec` aborts the
    /// process on allocation failure instead of returning); retained so
    /// every documented failure mode has a corresponding variant.
    #[error("allocation failed")]
    Malloc,
    /// A spline was constructed with `dim < 1`.
    #[error("dimension must be at least 1")]
    DimZero,
    /// A construction or resize would leave `n_ctrlp <= deg`.
    #[error("degree must be less than the number of control points")]
    DegGeNCtrlp,
    /// Signed size arithmetic overflowed or underflowed.
    #[error("control point or knot count arithmetic overflowed")]
    OverUnderflow,
    /// `u` lies outside the evaluable domain of the spline.
    #[error("parameter is outside the domain of the spline")]
    UUndefined,
    /// A knot's multiplicity would exceed the spline's order.
    #[error("multiplicity constraint violated")]
    Multiplicity,
    /// An operation that forbids aliasing was called with source == destination.
    #[error("input and output must not be the same spline")]
    InputEqOutput,
}
