//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors and parameter
//! validation, always before any solving begins.
//!
//! # Examples
//!
//! ```
//! use wildcard::domain::error::DomainError;
//! use wildcard::domain::{Club, Player, PlayerId, Position};
//! use rust_decimal_macros::dec;
//!
//! let result = Player::try_new(
//!     PlayerId::new(1),
//!     "Raya",
//!     Club::Ars,
//!     Position::Goalkeeper,
//!     dec!(-1.0),
//!     dec!(4.5),
//! );
//!
//! assert!(matches!(result, Err(DomainError::InvalidValue { field: "price", .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use super::{PlayerId, Position};

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required field was absent from an input row.
    #[error("player {player} is missing required field `{field}`")]
    MissingField {
        /// Identifier (or row label) of the offending player.
        player: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field held a value outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Position code not in the fixed position set.
    #[error("unknown position `{0}`")]
    UnknownPosition(String),

    /// Club code not in the league's club set.
    #[error("unknown club `{0}`")]
    UnknownClub(String),

    /// Two rows share the same player identifier.
    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),

    /// The current squad has no player for a position.
    #[error("current squad has no {0} player")]
    IncompleteSquad(Position),

    /// A decoded selection breaks one of the squad rules.
    #[error("selection violates squad rules: {0}")]
    InvalidSelection(String),
}

impl DomainError {
    /// Shorthand for a negative numeric field.
    pub(crate) fn negative(field: &'static str, value: Decimal) -> Self {
        Self::InvalidValue {
            field,
            reason: format!("must be 0 or greater, got {value}"),
        }
    }
}
