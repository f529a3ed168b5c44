//! Scripted [`Solver`] for exercising the optimizer without a backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;

use crate::error::Result;
use crate::port::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// One canned solver outcome.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Return this status with an all-zero assignment.
    Status(SolutionStatus),
    /// Return an "optimal" assignment with every variable set to the value.
    Fill(Decimal),
    /// Return this exact assignment as optimal.
    Assign(Vec<Decimal>),
}

/// Replays scripted replies in order, then repeats a fallback.
///
/// When built with [`ScriptedSolver::then_delegate`], an exhausted script
/// hands problems to the wrapped solver instead.
pub struct ScriptedSolver {
    script: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    delegate: Option<Arc<dyn Solver>>,
    calls: AtomicUsize,
}

impl ScriptedSolver {
    /// Replay `script`, answering `Infeasible` once it runs out.
    pub fn new(script: Vec<Reply>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: Reply::Status(SolutionStatus::Infeasible),
            delegate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer every call with `status`.
    pub fn always(status: SolutionStatus) -> Self {
        Self {
            fallback: Reply::Status(status),
            ..Self::new(vec![])
        }
    }

    /// Answer every call with all variables set to `value`.
    pub fn always_values(value: Decimal) -> Self {
        Self {
            fallback: Reply::Fill(value),
            ..Self::new(vec![])
        }
    }

    /// Replay `script`, then delegate to `inner`.
    pub fn then_delegate(script: Vec<Reply>, inner: Arc<dyn Solver>) -> Self {
        Self {
            delegate: Some(inner),
            ..Self::new(script)
        }
    }

    /// Number of problems submitted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Solver for ScriptedSolver {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let n = problem.lp.num_vars();

        let next = match self.script.lock() {
            Ok(mut script) => script.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        let reply = match (next, &self.delegate) {
            (Some(reply), _) => reply,
            (None, Some(inner)) => return inner.solve_ilp(problem),
            (None, None) => self.fallback.clone(),
        };

        Ok(match reply {
            Reply::Status(status) => LpSolution::empty(n, status),
            Reply::Fill(value) => {
                let values = vec![value; n];
                LpSolution {
                    objective: problem.lp.objective_value(&values),
                    values,
                    status: SolutionStatus::Optimal,
                }
            }
            Reply::Assign(values) => LpSolution {
                objective: problem.lp.objective_value(&values),
                values,
                status: SolutionStatus::Optimal,
            },
        })
    }
}
