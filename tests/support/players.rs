use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use wildcard::domain::{Club, Player, PlayerTable, Position};
use wildcard::testkit::domain::{player, squad_of_fifteen};

/// Clubs not used by [`squad_of_fifteen`].
pub fn spare_clubs() -> &'static [Club] {
    &Club::ALL[15..]
}

/// The standard owned squad plus `extra` players.
pub fn table_with(extra: Vec<Player>) -> PlayerTable {
    let mut players = squad_of_fifteen();
    players.extend(extra);
    PlayerTable::try_new(players).expect("valid table")
}

/// The standard owned squad plus `size` random unowned candidates.
///
/// Prices run 40 to 130, points 0.0 to 10.0 in tenths.
pub fn random_table(seed: u64, size: u32) -> PlayerTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let extra = (0..size)
        .map(|i| {
            let position = Position::ALL[rng.gen_range(0..Position::ALL.len())];
            let club = Club::ALL[rng.gen_range(0..Club::ALL.len())];
            let price = Decimal::from(rng.gen_range(40..=130));
            let points = Decimal::new(rng.gen_range(0..=100), 1);
            let mut p = player(1000 + i, position, club, price, points);
            p.is_available = rng.gen_bool(0.9);
            p
        })
        .collect();
    table_with(extra)
}

/// Render players as a canonical CSV table.
pub fn to_csv(players: &[Player]) -> String {
    let mut csv = String::from("id,name,club,position,price,expected_points,in_squad,is_available\n");
    for p in players {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            p.id,
            p.name,
            p.club.code(),
            p.position.code(),
            p.price,
            p.expected_points,
            p.in_squad,
            p.is_available
        ));
    }
    csv
}
