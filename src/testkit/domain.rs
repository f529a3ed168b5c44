//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Player`] rows and a complete,
//! legal current squad so tests focus on assertions rather than construction
//! boilerplate.

use rust_decimal::Decimal;

use crate::domain::{Club, Player, PlayerId, Position};

/// Create an available, unowned player.
///
/// # Panics
///
/// Panics on negative price or points.
pub fn player(id: u32, position: Position, club: Club, price: Decimal, points: Decimal) -> Player {
    Player::try_new(
        PlayerId::new(id),
        format!("{position}-{id}"),
        club,
        position,
        price,
        points,
    )
    .expect("valid test player")
}

/// Create a player the manager already owns.
pub fn owned(id: u32, position: Position, club: Club, price: Decimal, points: Decimal) -> Player {
    player(id, position, club, price, points).with_in_squad(true)
}

/// A legal 15-man current squad: ids 1-15, one club each, value 930.
///
/// Rows are in position order (2 GKP, 5 DEF, 5 MID, 3 FWD).
pub fn squad_of_fifteen() -> Vec<Player> {
    let rows: [(Position, i64, i64); 15] = [
        (Position::Goalkeeper, 45, 40),
        (Position::Goalkeeper, 45, 30),
        (Position::Defender, 50, 50),
        (Position::Defender, 50, 45),
        (Position::Defender, 50, 40),
        (Position::Defender, 50, 35),
        (Position::Defender, 50, 30),
        (Position::Midfielder, 70, 70),
        (Position::Midfielder, 70, 60),
        (Position::Midfielder, 70, 55),
        (Position::Midfielder, 70, 50),
        (Position::Midfielder, 70, 40),
        (Position::Forward, 80, 80),
        (Position::Forward, 80, 60),
        (Position::Forward, 80, 50),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, &(position, price, tenths))| {
            owned(
                i as u32 + 1,
                position,
                Club::ALL[i],
                Decimal::from(price),
                Decimal::new(tenths, 1),
            )
        })
        .collect()
}
