//! Application services built on the domain and ports.

pub mod optimizer;
