//! Players and the canonical player table.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::{Club, PlayerId, Position};

/// One eligible athlete with a price and a points projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub club: Club,
    pub position: Position,
    /// Cost in league currency units (tenths).
    pub price: Decimal,
    /// Projection for the scoring horizon.
    pub expected_points: Decimal,
    /// Currently owned by the manager.
    pub in_squad: bool,
    /// Eligible for selection this horizon.
    pub is_available: bool,
}

impl Player {
    /// Create an available, unowned player.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] if `price` or `expected_points`
    /// is negative.
    pub fn try_new(
        id: PlayerId,
        name: impl Into<String>,
        club: Club,
        position: Position,
        price: Decimal,
        expected_points: Decimal,
    ) -> Result<Self, DomainError> {
        if price < Decimal::ZERO {
            return Err(DomainError::negative("price", price));
        }
        if expected_points < Decimal::ZERO {
            return Err(DomainError::negative("expected_points", expected_points));
        }
        Ok(Self {
            id,
            name: name.into(),
            club,
            position,
            price,
            expected_points,
            in_squad: false,
            is_available: true,
        })
    }

    /// Mark whether the manager currently owns this player.
    #[must_use]
    pub fn with_in_squad(mut self, in_squad: bool) -> Self {
        self.in_squad = in_squad;
        self
    }

    /// Mark whether this player can be selected this horizon.
    #[must_use]
    pub fn with_available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}

/// Validated, read-only table of players.
///
/// Row order is preserved; it is the tie-break order for captaincy.
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    players: Vec<Player>,
}

impl PlayerTable {
    /// Build a table, checking identifiers and the current squad.
    ///
    /// # Errors
    ///
    /// - [`DomainError::DuplicatePlayer`] when two rows share an id.
    /// - [`DomainError::IncompleteSquad`] when no owned player exists for a
    ///   position.
    pub fn try_new(players: Vec<Player>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id) {
                return Err(DomainError::DuplicatePlayer(player.id));
            }
        }

        for position in Position::ALL {
            if !players
                .iter()
                .any(|p| p.in_squad && p.position == position)
            {
                return Err(DomainError::IncompleteSquad(position));
            }
        }

        Ok(Self { players })
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players the manager owns, available or not.
    pub fn current_squad(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.in_squad)
    }

    /// Players eligible for selection.
    pub fn available(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_available)
    }

    /// Sale value of the current squad.
    #[must_use]
    pub fn squad_value(&self) -> Decimal {
        self.current_squad().map(|p| p.price).sum()
    }
}
