//! Implementations of ports (hexagonal adapters).

pub mod inbound;
pub mod solver;
pub mod table;
