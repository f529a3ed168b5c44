//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies; today that is the
//! integer programming backend.

pub mod solver;
