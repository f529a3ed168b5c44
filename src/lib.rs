//! Wildcard - fantasy football squad optimization.
//!
//! Given a table of players with prices and expected points, selects the
//! fifteen-player squad that maximizes expected points net of transfer
//! penalties, subject to the league's squad rules.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Players, formations, squad rules and results
//! - [`application`] - The formation-by-formation squad optimizer
//! - [`port`] - The `Solver` seam the optimizer depends on
//! - [`adapter`] - HiGHS solver, player table loading, CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! Each legal formation is solved as a 0/1 integer program and the best
//! feasible answer wins. When nothing can be solved the current squad is
//! kept.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use wildcard::adapter::solver::HiGHSSolver;
//! use wildcard::adapter::table;
//! use wildcard::application::optimizer::{OptimizeParams, SquadOptimizer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let players = table::load("players.json")?;
//!     let optimizer = SquadOptimizer::new(Arc::new(HiGHSSolver::new()));
//!     let result = optimizer.optimize(&players, &OptimizeParams::default())?;
//!     for member in result.sorted_squad() {
//!         println!("{} {}", member.player.position, member.player.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
