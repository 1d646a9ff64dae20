//! Regression and property tests exercised only under `cfg(test)`.
//!
//! Unit tests for a single module's internals live next to that module;
//! this tree holds whole-crate checks that cut across the dispatcher,
//! the three kernels and the regime limits together.

mod invariants;
mod regression;
