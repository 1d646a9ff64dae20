//! Numeric precision and iteration-budget constants shared by every kernel.
//!
//! These mirror the four tuning constants of the reference algorithm: a
//! target relative precision, a per-term roundoff floor, the smallest sum
//! the double-exponential quadrature is expected to resolve, and the step
//! caps that keep a non-convergent series or refinement from looping
//! forever.

/// Target relative precision a series or quadrature sum must reach.
pub const DELTA: f64 = 2.2e-16;

/// Per-term roundoff floor; below this the accumulated rounding error in
/// a sum of `T` can no longer be distinguished from the signal.
pub const EPS: f64 = 5.5e-20;

/// Smallest sum the double-exponential quadrature is expected to resolve;
/// used only to size the quadrature's integration step `h`.
pub const S_MIN: f64 = 2e-20;

/// Upper bound on the number of terms summed by either series kernel.
pub const MAX_TERMS: u32 = 200;

/// Upper bound on the number of step-doubling refinements attempted by
/// the mid-frequency quadrature.
pub const MAX_ITER_INT: usize = 12;

/// Number of `beta`-ranges the quadrature's `(p, q)` table is split into.
pub const NUM_RANGE: usize = 6;

/// Overflow guard shared by log-gamma evaluation and the quadrature's
/// abscissa transform: half of `f64`'s maximum binary exponent, matching
/// the reference's `DBL_MAX_EXP / 2` check.
pub const OVERFLOW_GUARD: f64 = 512.0;
