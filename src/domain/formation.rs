//! Starting formations and squad composition rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Position;

/// Per-position player counts, in squad order (GKP, DEF, MID, FWD).
///
/// Used both for starting formations (starters only) and for the
/// [`BASE_COMPOSITION`] of the full squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formation {
    pub goalkeepers: u32,
    pub defenders: u32,
    pub midfielders: u32,
    pub forwards: u32,
}

impl Formation {
    #[must_use]
    pub const fn new(goalkeepers: u32, defenders: u32, midfielders: u32, forwards: u32) -> Self {
        Self {
            goalkeepers,
            defenders,
            midfielders,
            forwards,
        }
    }

    /// Number of players required for `position`.
    #[must_use]
    pub const fn count(&self, position: Position) -> u32 {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    /// Counts as an array indexed by [`Position::index`].
    #[must_use]
    pub const fn counts(&self) -> [u32; 4] {
        [
            self.goalkeepers,
            self.defenders,
            self.midfielders,
            self.forwards,
        ]
    }

    /// Total number of players.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.goalkeepers + self.defenders + self.midfielders + self.forwards
    }

    /// True when this is one of the [`LEGAL_FORMATIONS`].
    #[must_use]
    pub fn is_legal(&self) -> bool {
        LEGAL_FORMATIONS.contains(self)
    }
}

/// Renders outfield lines only, e.g. `4-4-2`.
impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.forwards)
    }
}

/// Starting formations the league allows, in evaluation order.
pub const LEGAL_FORMATIONS: [Formation; 8] = [
    Formation::new(1, 3, 4, 3),
    Formation::new(1, 3, 5, 2),
    Formation::new(1, 4, 3, 3),
    Formation::new(1, 4, 4, 2),
    Formation::new(1, 4, 5, 1),
    Formation::new(1, 5, 2, 3),
    Formation::new(1, 5, 3, 2),
    Formation::new(1, 5, 4, 1),
];

/// Full squad composition, bench included.
pub const BASE_COMPOSITION: Formation = Formation::new(2, 5, 5, 3);

/// Number of players in a full squad.
pub const SQUAD_SIZE: u32 = BASE_COMPOSITION.total();

/// Number of starters in every legal formation.
pub const STARTERS: u32 = 11;

/// Non-starting squad slots; also the upper bound on fillers.
pub const BENCH_SIZE: u32 = SQUAD_SIZE - STARTERS;

/// Maximum number of selected players from one club.
pub const MAX_PLAYERS_PER_CLUB: u32 = 3;
