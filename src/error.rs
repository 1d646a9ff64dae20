//! Error types for the KWW transforms.
//!
//! The reference implementation encodes failure as small negative
//! integers returned alongside (and indistinguishable in type from) a
//! successful numeric result, and treats a non-recoverable failure as
//! grounds to terminate the process. Here the two concerns are split:
//! [`KernelFailure`] is the sum-type replacement for the sentinel
//! integers (never unwinds, just a value a dispatcher pattern-matches
//! on to decide whether to retry with another kernel), and [`KwwError`]
//! is what a caller of the public API actually sees.

use std::fmt;

/// Reason a single numerical kernel (low-series, high-series or
/// mid-frequency quadrature) could not produce a value.
///
/// Each variant documents the sentinel integer it replaces in the
/// reference algorithm, since the regression literature and the
/// `debug` trace output still refer to those codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KernelFailure {
    /// Log-gamma argument would overflow (`-3`).
    GammaOverflow,
    /// Quadrature node count exceeded the overflow-protection ceiling
    /// (`N > 10^6`), also reported as `-3` in the reference.
    NodeCountOverflow,
    /// A quadrature integration variable underflowed to exactly zero at
    /// a node where that should not happen (`-4`).
    VariableUnderflow,
    /// Transforming an abscissa would overflow (`-5`).
    TransformOverflow,
    /// A series' terms are growing rather than shrinking, i.e. it has
    /// started to diverge before reaching the required precision
    /// (`-5`).
    AsymptoticDivergence,
    /// Excessive cancellation between positive and negative terms in a
    /// series (`-6`).
    SeriesCancellation,
    /// Excessive cancellation in the quadrature's trapezoid sum (`-2`).
    QuadratureCancellation,
    /// The quadrature's running sum went negative outside diff-mode,
    /// which can only happen if cancellation has destroyed the result
    /// (`-6`).
    NegativeSum,
    /// The running sum underflowed below `DBL_MIN` (`-7`).
    SumUnderflow,
    /// Term or refinement cap reached without convergence (`-9`).
    NotConverged,
    /// `debug` requested single-sum inspection; the quadrature
    /// deliberately returns without refining (reference code `-1`).
    SingleSumInspection,
}

impl fmt::Display for KernelFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GammaOverflow => write!(f, "log-gamma argument overflow"),
            Self::NodeCountOverflow => write!(f, "quadrature node count exceeded 10^6"),
            Self::VariableUnderflow => write!(f, "integration variable underflowed at a node"),
            Self::TransformOverflow => write!(f, "abscissa transform overflowed"),
            Self::AsymptoticDivergence => write!(f, "series diverged before reaching precision"),
            Self::SeriesCancellation => write!(f, "excessive cancellation in series sum"),
            Self::QuadratureCancellation => write!(f, "excessive cancellation in quadrature sum"),
            Self::NegativeSum => write!(f, "quadrature sum went negative"),
            Self::SumUnderflow => write!(f, "running sum underflowed"),
            Self::NotConverged => write!(f, "term or refinement cap reached without convergence"),
            Self::SingleSumInspection => write!(f, "single-sum inspection requested, no value returned"),
        }
    }
}

impl std::error::Error for KernelFailure {}

/// Error returned by the public `kwwc`/`kwws`/`kwwp` entry points and by
/// the low-level kernel entry points exposed for testing and
/// tabulation.
///
/// This replaces the reference implementation's `exit(EDOM)` /
/// `exit(ENOSYS)` / `exit(ENOMEM)` process termination with an ordinary
/// `Result`; the three CLI binaries translate each variant back to the
/// documented exit code.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum KwwError {
    /// `beta` fell outside `[0.1, 2.0]`.
    BetaOutOfRange {
        /// The out-of-range value supplied.
        beta: f64,
    },
    /// A low-level kernel entry point was called with `omega <= 0`; the
    /// public `kwwc`/`kwws`/`kwwp` never trigger this, since they handle
    /// `omega == 0` and negative `omega` themselves before a kernel is
    /// ever invoked.
    NonPositiveOmega {
        /// The offending value.
        omega: f64,
    },
    /// Neither series kernel applied (or the applicable one failed) and
    /// the mid-frequency quadrature also failed to converge. This is
    /// the reference implementation's `exit(ENOSYS)` branch.
    ///
    /// Not raised for the cosine transform at `beta > 1.9`, which
    /// returns `Ok(0.0)` instead; see [`crate::dispatch::kwwc`].
    IntegrationFailed {
        /// Angular frequency of the failing call.
        omega: f64,
        /// Stretching exponent of the failing call.
        beta: f64,
        /// The kernel failure that triggered the fatal branch.
        reason: KernelFailure,
    },
    /// The high-frequency kernel for the primitive transform produced a
    /// result `>= pi/2`, which the reference implementation treats as
    /// an internal inconsistency rather than a legitimate answer.
    PrimitiveOutOfBounds {
        /// The out-of-bounds raw result before the `pi/2` complement.
        raw: f64,
    },
    /// A quadrature node/weight table could not be allocated or grown
    /// (reference `exit(ENOMEM)`). In this pure-Rust port this can only
    /// happen if the process is already out of memory, since table
    /// sizes are bounded by [`crate::consts::MAX_ITER_INT`] doublings of
    /// a fixed base size.
    WorkspaceAllocation,
}

impl fmt::Display for KwwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BetaOutOfRange { beta } => {
                write!(f, "beta = {beta} is outside the supported range [0.1, 2.0]")
            }
            Self::NonPositiveOmega { omega } => {
                write!(f, "omega = {omega} must be strictly positive for a low-level kernel call")
            }
            Self::IntegrationFailed { omega, beta, reason } => write!(
                f,
                "numeric integration failed for omega={omega}, beta={beta}: {reason}"
            ),
            Self::PrimitiveOutOfBounds { raw } => {
                write!(f, "primitive-transform high-frequency kernel returned invalid result {raw} (>= pi/2)")
            }
            Self::WorkspaceAllocation => write!(f, "quadrature workspace allocation failed"),
        }
    }
}

impl std::error::Error for KwwError {}

impl KwwError {
    /// POSIX-style exit code the reference CLI tools use for this error.
    ///
    /// Values are the common Linux/macOS `errno.h` constants for
    /// `EDOM` (33), `ENOSYS` (38) and `ENOMEM` (12); a generic numeric
    /// failure (the reference's unconditional `exit(1)` on any other
    /// rejected input) maps to `1`.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::BetaOutOfRange { .. } => 33,
            Self::NonPositiveOmega { .. } => 1,
            Self::IntegrationFailed { .. } | Self::PrimitiveOutOfBounds { .. } => 38,
            Self::WorkspaceAllocation => 12,
        }
    }
}
