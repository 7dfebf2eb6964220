//! USDC allowance amounts and the sufficiency policy.

use alloy_primitives::U256;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Number of decimals for the USDC token.
pub const USDC_DECIMALS: u32 = 6;

/// Default allowance floor in whole tokens.
pub const DEFAULT_MIN_ALLOWANCE: u64 = 1000;

/// Convert whole USDC to base units (6 decimals).
#[must_use]
pub fn to_usdc_units(whole_tokens: u64) -> U256 {
    U256::from(whole_tokens) * U256::from(10u64.pow(USDC_DECIMALS))
}

/// Convert USDC base units to decimal dollars.
///
/// Values beyond what a `Decimal` can hold (such as an unlimited
/// `type(uint256).max` approval) saturate to [`Decimal::MAX`].
#[must_use]
pub fn from_usdc_units(units: U256) -> Decimal {
    let Ok(int_val) = u128::try_from(units) else {
        return Decimal::MAX;
    };
    Decimal::from_u128(int_val)
        .map(|value| value / Decimal::from(10u64.pow(USDC_DECIMALS)))
        .unwrap_or(Decimal::MAX)
}

/// Outcome of one allowance read, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceCheck {
    /// Current allowance in base units.
    pub allowance: U256,
    /// Required floor in base units.
    pub floor: U256,
    /// `allowance >= floor`.
    pub sufficient: bool,
}

impl AllowanceCheck {
    /// Compare an allowance read against a floor given in whole tokens.
    #[must_use]
    pub fn evaluate(allowance: U256, min_whole_tokens: u64) -> Self {
        let floor = to_usdc_units(min_whole_tokens);
        Self {
            allowance,
            floor,
            sufficient: allowance >= floor,
        }
    }

    /// Allowance as a human-readable dollar amount.
    #[must_use]
    pub fn allowance_tokens(&self) -> Decimal {
        from_usdc_units(self.allowance)
    }

    /// Whether the allowance exceeds what a dollar amount can represent,
    /// as with a `type(uint256).max` approval.
    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        self.allowance_tokens() == Decimal::MAX
    }

    /// Allowance for logs and operator output: `unlimited` or the dollar
    /// amount.
    #[must_use]
    pub fn allowance_label(&self) -> String {
        if self.is_unlimited() {
            "unlimited".to_string()
        } else {
            self.allowance_tokens().to_string()
        }
    }

    /// Floor as a human-readable dollar amount.
    #[must_use]
    pub fn floor_tokens(&self) -> Decimal {
        from_usdc_units(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn to_usdc_units_scales_by_six_decimals() {
        assert_eq!(to_usdc_units(1), U256::from(1_000_000u64));
        assert_eq!(to_usdc_units(1000), U256::from(1_000_000_000u64));
        assert_eq!(to_usdc_units(0), U256::ZERO);
    }

    #[test]
    fn from_usdc_units_handles_fractional() {
        assert_eq!(from_usdc_units(U256::from(500_000u64)), dec!(0.5));
        assert_eq!(from_usdc_units(U256::from(999_000_000u64)), dec!(999));
    }

    #[test]
    fn from_usdc_units_saturates_unlimited_approval() {
        assert_eq!(from_usdc_units(U256::MAX), Decimal::MAX);
    }

    #[test]
    fn below_floor_is_insufficient() {
        let check = AllowanceCheck::evaluate(U256::from(999_000_000u64), 1000);
        assert!(!check.sufficient);
        assert_eq!(check.allowance_tokens(), dec!(999));
        assert_eq!(check.floor_tokens(), dec!(1000));
    }

    #[test]
    fn exactly_floor_is_sufficient() {
        let check = AllowanceCheck::evaluate(U256::from(1_000_000_000u64), 1000);
        assert!(check.sufficient);
    }

    #[test]
    fn one_unit_below_floor_is_insufficient() {
        let check = AllowanceCheck::evaluate(U256::from(999_999_999u64), 1000);
        assert!(!check.sufficient);
    }

    #[test]
    fn unlimited_approval_is_sufficient() {
        assert!(AllowanceCheck::evaluate(U256::MAX, 1000).sufficient);
    }

    #[test]
    fn unlimited_approval_is_labeled_unlimited() {
        let check = AllowanceCheck::evaluate(U256::MAX, 1000);
        assert!(check.is_unlimited());
        assert_eq!(check.allowance_label(), "unlimited");
    }

    #[test]
    fn finite_allowance_is_labeled_in_dollars() {
        let check = AllowanceCheck::evaluate(U256::from(2_500_500_000u64), 1000);
        assert!(!check.is_unlimited());
        assert_eq!(check.allowance_label().parse::<Decimal>().unwrap(), dec!(2500.5));
    }
}
