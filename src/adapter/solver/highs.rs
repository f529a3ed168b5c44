//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use std::time::Duration;

use good_lp::solvers::highs::highs;
use good_lp::solvers::SolutionStatus as HighsStatus;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::domain::constraint::ConstraintSense;
use crate::error::{Result, SolverError};
use crate::port::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// Slack allowed when re-checking a returned assignment.
const FEASIBILITY_TOLERANCE: Decimal = dec!(0.000001);

/// HiGHS-based ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver {
    time_limit: Option<Duration>,
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance without a time limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop each solve after `limit`.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        check_dimensions(problem)?;
        solve_with_good_lp(problem, self.time_limit)
    }
}

/// Reject problems whose vectors disagree on the number of variables.
fn check_dimensions(problem: &IlpProblem) -> Result<()> {
    let n = problem.lp.num_vars();

    if problem.lp.bounds.len() != n {
        return Err(SolverError::DimensionMismatch {
            what: "bounds",
            expected: n,
            actual: problem.lp.bounds.len(),
        }
        .into());
    }
    for constr in &problem.lp.constraints {
        if let Some(&(index, _)) = constr.terms.iter().find(|(i, _)| *i >= n) {
            return Err(SolverError::VariableOutOfRange {
                what: "constraint",
                index,
                num_vars: n,
            }
            .into());
        }
    }
    if let Some(&index) = problem.integer_vars.iter().find(|&&i| i >= n) {
        return Err(SolverError::VariableOutOfRange {
            what: "integer variable list",
            index,
            num_vars: n,
        }
        .into());
    }
    Ok(())
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &IlpProblem, time_limit: Option<Duration>) -> Result<LpSolution> {
    let lp = &problem.lp;
    let n = lp.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(LpSolution {
            values: vec![],
            objective: Decimal::ZERO,
            status: SolutionStatus::Optimal,
        });
    }

    let mut is_integer = vec![false; n];
    for &i in &problem.integer_vars {
        is_integer[i] = true;
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in lp.bounds.iter().enumerate() {
        let mut v = variable();

        if let Some(lb) = bounds.lower {
            v = v.min(lb.to_f64().unwrap_or(0.0));
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
        }
        if is_integer[i] {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    let objective: Expression = var_list
        .iter()
        .zip(lp.objective.iter())
        .filter(|(_, c)| !c.is_zero())
        .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
        .sum();

    let mut model = vars.minimise(&objective).using(highs);
    if let Some(limit) = time_limit {
        model = model.set_time_limit(limit.as_secs_f64());
    }

    for constr in &lp.constraints {
        let lhs: Expression = constr
            .terms
            .iter()
            .map(|&(i, c)| c.to_f64().unwrap_or(0.0) * var_list[i])
            .sum();

        let rhs = constr.rhs.to_f64().unwrap_or(0.0);

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
            ConstraintSense::Equal => {
                model = model.with(constraint!(lhs == rhs));
            }
        }
    }

    debug!(
        variables = n,
        constraints = lp.constraints.len(),
        integer = problem.integer_vars.len(),
        "Solving ILP with HiGHS"
    );

    match model.solve() {
        Ok(solution) => {
            let status = map_status(solution.status());
            if status != SolutionStatus::Optimal {
                warn!(?status, "HiGHS stopped before proving optimality");
                return Ok(LpSolution::empty(n, status));
            }

            let values: Vec<Decimal> = var_list
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let raw = solution.value(*v);
                    let raw = if is_integer[i] { raw.round() } else { raw };
                    Decimal::try_from(raw).unwrap_or(Decimal::ZERO)
                })
                .collect();

            // Rounded integers can still drift off a row
            if let Some(broken) = lp
                .constraints
                .iter()
                .position(|c| !c.is_satisfied(&values, FEASIBILITY_TOLERANCE))
            {
                warn!(constraint = broken, "HiGHS returned an infeasible assignment");
                return Ok(LpSolution::empty(n, SolutionStatus::TimeLimit));
            }

            Ok(LpSolution {
                objective: lp.objective_value(&values),
                values,
                status: SolutionStatus::Optimal,
            })
        }
        Err(err) => {
            let status = match err {
                ResolutionError::Infeasible => SolutionStatus::Infeasible,
                ResolutionError::Unbounded => SolutionStatus::Unbounded,
                other => {
                    warn!(error = %other, "HiGHS failed");
                    SolutionStatus::Error
                }
            };
            Ok(LpSolution::empty(n, status))
        }
    }
}

/// Translate good_lp's status for a returned solution.
///
/// A gap-limit stop carries HiGHS's own optimality certificate within the
/// configured MIP gap; a time-limit stop only holds an incumbent.
fn map_status(status: HighsStatus) -> SolutionStatus {
    match status {
        HighsStatus::Optimal | HighsStatus::GapLimit => SolutionStatus::Optimal,
        HighsStatus::TimeLimit => SolutionStatus::TimeLimit,
    }
}
