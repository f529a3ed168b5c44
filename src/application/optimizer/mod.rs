//! Squad optimizer.
//!
//! Enumerates the legal starting formations, solves one 0/1 integer program
//! per formation through the [`Solver`] port, and folds the feasible answers
//! into the best result. Formations that cannot be solved are skipped; when
//! none can, the current squad is kept.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use wildcard::adapter::solver::HiGHSSolver;
//! use wildcard::application::optimizer::{OptimizeParams, SquadOptimizer};
//! use wildcard::adapter::table;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let players = table::load("players.csv")?;
//!     let optimizer = SquadOptimizer::new(Arc::new(HiGHSSolver::new()));
//!     let result = optimizer.optimize(&players, &OptimizeParams::default())?;
//!     println!("{:?} for {} points", result.formation, result.expected_points);
//!     Ok(())
//! }
//! ```

mod model;
mod params;

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

pub use params::OptimizeParams;

use crate::domain::formation::{Formation, LEGAL_FORMATIONS};
use crate::domain::squad::{assign_captaincy, count_transfers, transfer_plan};
use crate::domain::transfer::transfer_cost;
use crate::domain::{
    OptimizationResult, Player, PlayerTable, Role, SelectionRules, SquadMember,
};
use crate::error::Result;
use crate::port::Solver;

/// Finds the highest-scoring legal squad for a player table.
///
/// Holds no state between calls; one optimizer can serve any number of
/// tables.
#[derive(Clone)]
pub struct SquadOptimizer {
    solver: Arc<dyn Solver>,
}

impl std::fmt::Debug for SquadOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SquadOptimizer")
            .field("solver", &self.solver.name())
            .finish()
    }
}

/// Inputs shared by every formation of one run.
struct RunContext<'a> {
    table: &'a PlayerTable,
    candidates: Vec<&'a Player>,
    params: &'a OptimizeParams,
    prior_value: Decimal,
}

impl SquadOptimizer {
    /// Create an optimizer backed by `solver`.
    #[must_use]
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        Self { solver }
    }

    /// Name of the underlying solver backend.
    #[must_use]
    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    /// Find the best squad across all legal formations.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range parameters, and a solver
    /// error when a built model is malformed. Infeasible formations are not
    /// errors.
    pub fn optimize(
        &self,
        table: &PlayerTable,
        params: &OptimizeParams,
    ) -> Result<OptimizationResult> {
        params.validate()?;

        let ctx = RunContext {
            table,
            candidates: table.available().collect(),
            params,
            prior_value: table.squad_value(),
        };

        info!(
            players = table.len(),
            candidates = ctx.candidates.len(),
            prior_value = %ctx.prior_value,
            funds_in_bank = %params.funds_in_bank,
            free_transfers = params.free_transfers,
            solver = self.solver.name(),
            "Optimizing squad"
        );

        let best = LEGAL_FORMATIONS.iter().try_fold(
            OptimizationResult::retain(table),
            |best, &formation| -> Result<OptimizationResult> {
                match self.solve_formation(&ctx, formation)? {
                    Some(candidate) if candidate.improves_on(&best) => {
                        info!(
                            formation = %formation,
                            expected_points = %candidate.expected_points,
                            transfers = candidate.transfers,
                            value = %candidate.value,
                            "Found better squad"
                        );
                        Ok(candidate)
                    }
                    _ => Ok(best),
                }
            },
        )?;

        if best.is_fallback() {
            warn!("No formation improved on the current squad, keeping it");
        }
        Ok(best)
    }

    /// Solve one formation. `Ok(None)` means infeasible or unsolved.
    fn solve_formation(
        &self,
        ctx: &RunContext<'_>,
        formation: Formation,
    ) -> Result<Option<OptimizationResult>> {
        if !model::pool_can_fill_squad(&ctx.candidates) {
            warn!(formation = %formation, "Cannot optimize formation: pool too small");
            return Ok(None);
        }

        let squad_model = model::build(&ctx.candidates, formation, ctx.params, ctx.prior_value);
        debug!(
            formation = %formation,
            variables = squad_model.problem.lp.num_vars(),
            constraints = squad_model.problem.lp.constraints.len(),
            "Built squad model"
        );

        let solution = self.solver.solve_ilp(&squad_model.problem)?;
        if !solution.is_optimal() {
            warn!(formation = %formation, status = ?solution.status, "Cannot optimize formation");
            return Ok(None);
        }

        let Some(mut members) =
            model::decode(&ctx.candidates, &squad_model.layout, &solution.values)
        else {
            warn!(formation = %formation, "Solver assigned a player more than one role");
            return Ok(None);
        };

        let rules = SelectionRules {
            formation,
            filler_count: ctx.params.filler_count,
            budget: ctx.prior_value + ctx.params.funds_in_bank,
        };
        if let Err(err) = rules.verify(&members) {
            warn!(formation = %formation, error = %err, "Discarding solver answer");
            return Ok(None);
        }

        assign_captaincy(&mut members);
        Ok(Some(summarize(ctx, formation, members)))
    }
}

/// Score a verified selection exactly, independent of solver rounding.
fn summarize(
    ctx: &RunContext<'_>,
    formation: Formation,
    members: Vec<SquadMember>,
) -> OptimizationResult {
    let points_for = |role: Role| -> Decimal {
        members
            .iter()
            .filter(|m| m.role == role)
            .map(|m| m.player.expected_points)
            .sum()
    };
    let starter_points = points_for(Role::Starter);
    let bench_points = points_for(Role::Bench);

    let transfers = count_transfers(&members);
    let cost = transfer_cost(
        transfers,
        ctx.params.free_transfers,
        ctx.params.transfer_margin,
    );
    let value: Decimal = members.iter().map(|m| m.player.price).sum();
    let (transfers_in, transfers_out) = transfer_plan(ctx.table, &members);

    OptimizationResult {
        formation: Some(formation),
        expected_points: starter_points + bench_points - cost,
        starter_points,
        squad: members,
        transfers,
        transfer_cost: cost,
        transfers_in,
        transfers_out,
        value,
        prior_value: ctx.prior_value,
        bank_change: ctx.prior_value - value,
    }
}
