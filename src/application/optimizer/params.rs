//! Scalar parameters for one optimizer run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::formation::BENCH_SIZE;

/// Money, transfer and bench settings for one optimizer run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizeParams {
    /// Budget available above the sale value of the current squad.
    pub funds_in_bank: Decimal,
    /// Transfers this horizon that carry no point penalty.
    pub free_transfers: u32,
    /// Surcharge on top of the standard per-transfer point cost.
    pub transfer_margin: Decimal,
    /// Squad slots reserved for cheap non-playing fillers.
    pub filler_count: u32,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            funds_in_bank: Decimal::ZERO,
            free_transfers: 1,
            transfer_margin: Decimal::ZERO,
            filler_count: BENCH_SIZE,
        }
    }
}

impl OptimizeParams {
    /// Build and validate parameters.
    ///
    /// # Errors
    ///
    /// See [`OptimizeParams::validate`].
    pub fn try_new(
        funds_in_bank: Decimal,
        free_transfers: u32,
        transfer_margin: Decimal,
        filler_count: u32,
    ) -> Result<Self, DomainError> {
        let params = Self {
            funds_in_bank,
            free_transfers,
            transfer_margin,
            filler_count,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every parameter is in range. Values are never clamped.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] for negative money or margin and
    /// for a filler count above the bench size.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.funds_in_bank < Decimal::ZERO {
            return Err(DomainError::negative("funds_in_bank", self.funds_in_bank));
        }
        if self.transfer_margin < Decimal::ZERO {
            return Err(DomainError::negative("transfer_margin", self.transfer_margin));
        }
        if self.filler_count > BENCH_SIZE {
            return Err(DomainError::InvalidValue {
                field: "filler_count",
                reason: format!("must be between 0 and {BENCH_SIZE}, got {}", self.filler_count),
            });
        }
        Ok(())
    }
}
