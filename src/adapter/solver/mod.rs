//! Solver implementations for integer linear programming.
//!
//! Implements the `port::Solver` trait with concrete backends.

#![allow(clippy::result_large_err)]

mod highs;

pub use highs::HiGHSSolver;
