//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! squad-selection logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring the solver into the optimizer
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
