//! League-agnostic domain logic: players, formations, squads.

mod club;
mod id;
mod player;
mod position;

pub mod constraint;
pub mod error;
pub mod formation;
pub mod squad;
pub mod transfer;

// Core domain types
pub use club::Club;
pub use id::PlayerId;
pub use player::{Player, PlayerTable};
pub use position::Position;

// Squad rules and results
pub use formation::{Formation, BASE_COMPOSITION, LEGAL_FORMATIONS};
pub use squad::{OptimizationResult, Role, SelectionRules, SquadMember};
