//! CLI module graph.

pub mod command;
pub mod config;
pub mod formations;
pub mod optimize;
pub mod output;
pub mod squad;
