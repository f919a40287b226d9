//! Application layer - Use case services.
//!
//! The `Calculator` session service is the single entry point front ends
//! use: it owns the mutable selection, clamps inputs at the boundary, and
//! keeps the derived quote consistent after every change.

mod calculator;

pub use calculator::Calculator;
