//! Handler for `wildcard optimize`.

use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::OptimizeArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::table;
use crate::application::optimizer::OptimizeParams;
use crate::domain::{OptimizationResult, PlayerId, PlayerTable, Role, SquadMember};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_optimizer;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct SelectionRow {
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
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "")]
    status: &'static str,
}

impl From<&SquadMember> for SelectionRow {
    fn from(member: &SquadMember) -> Self {
        let player = &member.player;
        let mark = if member.captain {
            " (C)"
        } else if member.vice_captain {
            " (V)"
        } else {
            ""
        };
        Self {
            position: player.position.code(),
            name: format!("{}{mark}", player.name),
            club: player.club.code(),
            price: player.price,
            points: player.expected_points,
            role: role_label(member.role),
            status: if player.in_squad { "" } else { "new" },
        }
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Starter => "starter",
        Role::Bench => "bench",
        Role::Filler => "filler",
        Role::Retained => "kept",
    }
}

/// Merge command-line overrides into the configured defaults.
///
/// # Errors
///
/// Returns a validation error when the merged parameters are out of range.
pub fn resolve_params(args: &OptimizeArgs, defaults: OptimizeParams) -> Result<OptimizeParams> {
    Ok(OptimizeParams::try_new(
        args.funds.unwrap_or(defaults.funds_in_bank),
        args.free_transfers.unwrap_or(defaults.free_transfers),
        args.margin.unwrap_or(defaults.transfer_margin),
        args.fillers.unwrap_or(defaults.filler_count),
    )?)
}

/// Execute `optimize`.
pub fn execute(args: &OptimizeArgs, config: &Config) -> Result<()> {
    let players = table::load(&args.table)?;
    let params = resolve_params(args, config.params())?;
    let optimizer = build_optimizer(config, args.time_limit.map(Duration::from_secs));

    let result = optimizer.optimize(&players, &params)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "optimize",
            "params": params,
            "result": result,
        }));
        return Ok(());
    }

    render(&players, &params, &result);
    Ok(())
}

fn render(players: &PlayerTable, params: &OptimizeParams, result: &OptimizationResult) {
    output::header(env!("CARGO_PKG_VERSION"));

    if result.is_fallback() {
        output::warning("No formation could be solved, keeping the current squad");
        output::hint("check that enough players are available in every position");
    }

    output::section("Summary");
    output::field(
        "Formation",
        result
            .formation
            .map_or_else(|| "unchanged".to_string(), |f| output::highlight(f)),
    );
    output::field("Expected points", output::highlight(result.expected_points));
    output::field("Starter points", result.starter_points);
    output::field(
        "Transfers",
        format!(
            "{} ({} free)",
            result.transfers,
            params.free_transfers.min(result.transfers)
        ),
    );
    output::field(
        "Transfer cost",
        if result.transfer_cost.is_zero() {
            output::muted(result.transfer_cost)
        } else {
            output::negative(format!("-{}", result.transfer_cost))
        },
    );
    output::field("Squad value", format!("{} (was {})", result.value, result.prior_value));
    let bank = params.funds_in_bank + result.bank_change;
    output::field(
        "Bank after",
        if result.bank_change < Decimal::ZERO {
            output::negative(bank)
        } else {
            output::positive(bank)
        },
    );

    output::section("Squad");
    let rows: Vec<SelectionRow> = result
        .sorted_squad()
        .into_iter()
        .map(SelectionRow::from)
        .collect();
    output::lines(&Table::new(rows).to_string());

    if result.transfers_in.is_empty() {
        return;
    }
    output::section("Transfers");
    let name_of = |id: PlayerId| {
        players
            .get(id)
            .map_or_else(|| id.to_string(), |p| format!("{} ({})", p.name, p.position))
    };
    for id in &result.transfers_out {
        output::note(&format!("out  {}", name_of(*id)));
    }
    for id in &result.transfers_in {
        output::note(&format!("in   {}", name_of(*id)));
    }
}
