//! Handler for `wildcard squad`: the squad currently owned.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::TableArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::table;
use crate::domain::{Player, PlayerTable};
use crate::error::Result;

#[derive(Tabled)]
struct OwnedRow {
    #[tabled(rename = "Pos")]
    position: &'static str,
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Club")]
    club: &'static str,
    #[tabled(rename = "Price")]
    price: Decimal,
    #[tabled(rename = "xPts")]
    points: Decimal,
    #[tabled(rename = "")]
    status: &'static str,
}

impl From<&Player> for OwnedRow {
    fn from(player: &Player) -> Self {
        Self {
            position: player.position.code(),
            name: player.name.clone(),
            club: player.club.code(),
            price: player.price,
            points: player.expected_points,
            status: if player.is_available { "" } else { "unavailable" },
        }
    }
}

/// Owned players ordered by position, then by expected points descending.
fn owned_sorted(players: &PlayerTable) -> Vec<&Player> {
    let mut owned: Vec<&Player> = players.current_squad().collect();
    owned.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then(b.expected_points.cmp(&a.expected_points))
    });
    owned
}

/// Execute `squad`.
pub fn execute(args: &TableArgs) -> Result<()> {
    let players = table::load(&args.table)?;
    let owned = owned_sorted(&players);

    if output::is_json() {
        output::json_output(json!({
            "command": "squad",
            "value": players.squad_value(),
            "players": owned,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Current squad");
    output::field("Players", owned.len());
    output::field("Squad value", players.squad_value());

    let rows: Vec<OwnedRow> = owned.into_iter().map(OwnedRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
