//! Business policy limits
//!
//! Per-transaction caps and PIN rules are business rules, not ledger
//! invariants: the account model never enforces them. They live in one place
//! so every code path that moves money consults the same configuration.

use crate::types::LedgerError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Caller-side limits consulted by the teller on every operation
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// Maximum withdrawal per transaction
    pub withdrawal_limit: Decimal,
    /// Withdrawals above this amount require PIN re-entry
    pub withdrawal_pin_threshold: Decimal,
    /// Maximum deposit per transaction
    pub deposit_limit: Decimal,
    /// Maximum transfer per transaction (transfers always require PIN re-entry)
    pub transfer_limit: Decimal,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            withdrawal_limit: dec!(50_000),
            withdrawal_pin_threshold: dec!(10_000),
            deposit_limit: dec!(100_000),
            transfer_limit: dec!(25_000),
        }
    }
}

/// Validate a PIN: exactly 4 ASCII digits
///
/// # Errors
///
/// Returns `ValidationFailed` for any other shape.
pub fn validate_pin(pin: &str) -> Result<(), LedgerError> {
    if pin.len() == 4 && pin.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(LedgerError::validation_failed(
            "PIN must be exactly 4 digits",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_limits_match_business_rules() {
        let policy = Policy::default();
        assert_eq!(policy.withdrawal_limit, dec!(50_000));
        assert_eq!(policy.withdrawal_pin_threshold, dec!(10_000));
        assert_eq!(policy.deposit_limit, dec!(100_000));
        assert_eq!(policy.transfer_limit, dec!(25_000));
    }

    #[rstest]
    #[case::four_digits("1234", true)]
    #[case::leading_zero("0042", true)]
    #[case::too_short("123", false)]
    #[case::too_long("12345", false)]
    #[case::letters("12a4", false)]
    #[case::empty("", false)]
    #[case::unicode_digits("١٢٣٤", false)]
    fn pin_validation(#[case] pin: &str, #[case] valid: bool) {
        assert_eq!(validate_pin(pin).is_ok(), valid);
    }
}
