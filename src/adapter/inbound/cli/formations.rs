//! Handler for `wildcard formations`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::formation::{BENCH_SIZE, MAX_PLAYERS_PER_CLUB, SQUAD_SIZE};
use crate::domain::{Formation, BASE_COMPOSITION, LEGAL_FORMATIONS};
use crate::error::Result;

#[derive(Tabled)]
struct FormationRow {
    #[tabled(rename = "Formation")]
    name: String,
    #[tabled(rename = "GKP")]
    goalkeepers: u32,
    #[tabled(rename = "DEF")]
    defenders: u32,
    #[tabled(rename = "MID")]
    midfielders: u32,
    #[tabled(rename = "FWD")]
    forwards: u32,
}

impl From<&Formation> for FormationRow {
    fn from(f: &Formation) -> Self {
        Self {
            name: f.to_string(),
            goalkeepers: f.goalkeepers,
            defenders: f.defenders,
            midfielders: f.midfielders,
            forwards: f.forwards,
        }
    }
}

/// Execute `formations`.
pub fn execute() -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "formations",
            "formations": LEGAL_FORMATIONS.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "squad": BASE_COMPOSITION,
            "squad_size": SQUAD_SIZE,
            "bench_size": BENCH_SIZE,
            "max_per_club": MAX_PLAYERS_PER_CLUB,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Legal formations");
    let rows: Vec<FormationRow> = LEGAL_FORMATIONS.iter().map(FormationRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Squad");
    output::field("Composition", format!("{BASE_COMPOSITION} ({SQUAD_SIZE} players)"));
    output::field("Bench", BENCH_SIZE);
    output::field("Max per club", MAX_PLAYERS_PER_CLUB);
    Ok(())
}
