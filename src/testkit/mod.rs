//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for players, squads and candidate pools.
//! - [`solver`] - `ScriptedSolver`, a [`Solver`](crate::port::Solver) that
//!   replays canned outcomes.

pub mod domain;
pub mod solver;
