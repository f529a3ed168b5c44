//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! capabilities, keeping the optimizer free of any concrete backend.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                          ┌─────────────┐
//! │ Solver  │                                          │ Table / CLI │
//! │ Adapter │                                          │  Adapters   │
//! └─────────┘                                          └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Solver`] - ILP optimization backend

pub mod outbound;

// Solver port
pub use outbound::solver::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};
