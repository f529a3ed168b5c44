//! Default optimizer parameters.
//!
//! Command-line flags override each field for a single run.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::optimizer::OptimizeParams;
use crate::domain::formation::BENCH_SIZE;

/// `[optimizer]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizerConfig {
    /// Budget beyond the current squad's sale value.
    #[serde(default)]
    pub funds_in_bank: Decimal,
    /// Free transfers available (default: 1).
    #[serde(default = "default_free_transfers")]
    pub free_transfers: u32,
    /// Extra points charged per paid transfer.
    #[serde(default)]
    pub transfer_margin: Decimal,
    /// Bench slots reserved for fillers (default: 4).
    #[serde(default = "default_filler_count")]
    pub filler_count: u32,
}

const fn default_free_transfers() -> u32 {
    1
}

const fn default_filler_count() -> u32 {
    BENCH_SIZE
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            funds_in_bank: Decimal::ZERO,
            free_transfers: default_free_transfers(),
            transfer_margin: Decimal::ZERO,
            filler_count: default_filler_count(),
        }
    }
}

impl From<&OptimizerConfig> for OptimizeParams {
    fn from(config: &OptimizerConfig) -> Self {
        Self {
            funds_in_bank: config.funds_in_bank,
            free_transfers: config.free_transfers,
            transfer_margin: config.transfer_margin,
            filler_count: config.filler_count,
        }
    }
}
