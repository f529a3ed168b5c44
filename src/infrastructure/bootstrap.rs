//! Composition root: wires the configured solver into the optimizer.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::adapter::solver::HiGHSSolver;
use crate::application::optimizer::SquadOptimizer;
use crate::infrastructure::config::settings::Config;

/// Build an optimizer backed by HiGHS.
///
/// `time_limit` overrides the configured per-formation limit.
#[must_use]
pub fn build_optimizer(config: &Config, time_limit: Option<Duration>) -> SquadOptimizer {
    let limit = time_limit.unwrap_or_else(|| config.solver.time_limit());
    debug!(time_limit_secs = limit.as_secs_f64(), "Building HiGHS optimizer");
    SquadOptimizer::new(Arc::new(HiGHSSolver::new().with_time_limit(limit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimizer_uses_highs() {
        let optimizer = build_optimizer(&Config::default(), None);
        assert_eq!(optimizer.solver_name(), "highs");
    }
}
