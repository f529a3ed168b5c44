//! Transfer cost economics.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Point cost of one transfer beyond the free allowance.
pub const TRANSFER_POINT_COST: Decimal = dec!(4);

/// Per-transfer charge once the free allowance is used up.
#[must_use]
pub fn transfer_unit_cost(margin: Decimal) -> Decimal {
    TRANSFER_POINT_COST + margin
}

/// Points deducted for `transfers` squad changes.
///
/// `max(0, (transfers - free_transfers) * (4 + margin))`.
#[must_use]
pub fn transfer_cost(transfers: u32, free_transfers: u32, margin: Decimal) -> Decimal {
    let charged = transfers.saturating_sub(free_transfers);
    Decimal::from(charged) * transfer_unit_cost(margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn free_transfers_cost_nothing() {
        assert_eq!(transfer_cost(0, 0, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(transfer_cost(2, 2, dec!(1)), Decimal::ZERO);
        assert_eq!(transfer_cost(1, 15, dec!(3)), Decimal::ZERO);
    }

    #[test]
    fn extra_transfers_cost_four_plus_margin() {
        assert_eq!(transfer_cost(3, 1, Decimal::ZERO), dec!(8));
        assert_eq!(transfer_cost(3, 1, dec!(0.5)), dec!(9));
    }

    #[test]
    fn unit_cost_constant_is_four() {
        assert_eq!(TRANSFER_POINT_COST, dec!(4));
        assert_eq!(transfer_unit_cost(dec!(2)), dec!(6));
    }
}
