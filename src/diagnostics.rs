//! Diagnostic readout bundled with every successful transform result.
//!
//! The reference implementation exposes `kww_algorithm`, `kww_num_of_terms`
//! and `kww_debug` as process-wide globals, which the three demo programs
//! read right after a call. Globals are inherently racy under concurrent
//! callers, so here the first two are bundled into the return value
//! (the library's own recommendation for a reimplementation), and the
//! third becomes an explicit input parameter instead of a global toggle.

use kww_precision::Extended;

/// Which of the three regimes actually produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Low-frequency convergent series.
    Low = 1,
    /// Mid-frequency double-exponential quadrature.
    Mid = 2,
    /// High-frequency asymptotic series.
    High = 3,
}

/// Which trigonometric kernel a series or quadrature evaluates.
///
/// The reference code calls this `kappa` in the series kernels (`0` =
/// cosine, `1` = sine) and `kind` in the quadrature kernel; both name
/// the same two-valued choice, so this crate uses one enum for both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Cosine transform `C`.
    Cos = 0,
    /// Sine transform `S`.
    Sin = 1,
}

/// Per-call tracing flags, mirroring the reference's `kww_debug` bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugFlags(pub u8);

impl DebugFlags {
    /// No tracing.
    pub const NONE: Self = Self(0);
    /// Bit 1: trace the per-term table of a series kernel.
    pub const PER_TERM_TABLE: u8 = 1;
    /// Bit 2: trace the quadrature's per-node values and `sinphi`/`truncfac`.
    pub const NODE_TRACE: u8 = 2;
    /// Bit 4: inspect a single quadrature sum, skipping refinement.
    pub const SINGLE_SUM: u8 = 4;
    /// Bit 8: trace quadrature table (re-)initialization.
    pub const INIT_TRACE: u8 = 8;

    #[must_use]
    fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    /// True if bit 1 is set.
    #[must_use]
    pub fn per_term_table(self) -> bool {
        self.has(Self::PER_TERM_TABLE)
    }

    /// True if bit 2 is set.
    #[must_use]
    pub fn node_trace(self) -> bool {
        self.has(Self::NODE_TRACE)
    }

    /// True if bit 4 is set.
    #[must_use]
    pub fn single_sum(self) -> bool {
        self.has(Self::SINGLE_SUM)
    }

    /// True if bit 8 is set.
    #[must_use]
    pub fn init_trace(self) -> bool {
        self.has(Self::INIT_TRACE)
    }
}

/// Algorithm branch and term count for one completed kernel call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagnostics {
    /// The regime that produced the result.
    pub algorithm: Algorithm,
    /// Number of terms summed (series) or quadrature nodes visited in
    /// total across all refinements (mid quadrature).
    pub num_of_terms: u32,
}

/// Extended-precision value and term count returned by a single kernel,
/// before the dispatcher narrows to `f64` and attaches an [`Algorithm`].
#[derive(Clone, Copy, Debug)]
pub struct KernelOutput {
    /// The kernel's result, still at extended precision.
    pub value: Extended,
    /// Number of terms (series) or nodes visited (quadrature).
    pub num_of_terms: u32,
}

/// Result of a public `kwwc`/`kwws`/`kwwp` call: the `f64` transform
/// value plus a readout of which algorithm produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KwwOutcome {
    /// The transform value, narrowed to `f64`.
    pub value: f64,
    /// Which regime produced it, and how many terms it took.
    pub diagnostics: Diagnostics,
}
