//! Error types for the bank ledger
//!
//! This module defines all error kinds that can occur while operating on the
//! ledger. Errors are recoverable by design: every operation surfaces a typed
//! result for the caller (the console UI) to translate into a message and
//! re-prompt. Nothing here is used for control flow and nothing panics.
//!
//! # Error Categories
//!
//! - **Amount errors**: non-positive or malformed amounts
//! - **Balance errors**: withdrawal/transfer exceeding the available balance
//! - **Policy errors**: per-transaction caps exceeded
//! - **Authentication errors**: wrong PIN/password, inactive official credential
//! - **Registry errors**: unknown or duplicate account/official ids
//! - **Validation errors**: malformed PIN, empty required fields

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for ledger operations
///
/// Each variant carries the context needed to render a useful message
/// without the caller having to re-query the ledger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is non-positive or could not be parsed as a number
    #[error("Invalid amount '{amount}': must be a positive number")]
    InvalidAmount {
        /// The offending amount as entered
        amount: String,
    },

    /// Withdrawal or transfer amount exceeds the current balance
    ///
    /// The account state is left unchanged.
    #[error("Insufficient funds for account {account}: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Account id
        account: String,
        /// Current balance
        available: Decimal,
        /// Requested debit amount
        requested: Decimal,
    },

    /// A caller-side policy cap was exceeded
    ///
    /// The limits themselves live in [`crate::core::Policy`], not in the
    /// account model.
    #[error("{operation} limit exceeded: maximum {limit} per transaction, requested {requested}")]
    LimitExceeded {
        /// Operation whose cap was hit ("withdrawal", "deposit", "transfer")
        operation: String,
        /// The configured cap
        limit: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Wrong PIN or password, or an inactive official credential
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Unknown account or official id
    #[error("No account or official found with id {id}")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// Attempted creation with an id already in use
    ///
    /// The registry is left unchanged.
    #[error("Id {id} is already in use")]
    DuplicateId {
        /// The colliding id
        id: String,
    },

    /// Malformed input that never reached the ledger (bad PIN format,
    /// empty required field, self-transfer)
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of what was rejected
        message: String,
    },

    /// The account is blocked and rejects all mutating operations
    #[error("Account {id} is blocked")]
    AccountInactive {
        /// Account id of the blocked account
        id: String,
    },
}

// Helper constructors, so call sites stay one line.

impl LedgerError {
    /// Create an InvalidAmount error from anything displayable
    pub fn invalid_amount(amount: impl ToString) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            available,
            requested,
        }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(operation: &str, limit: Decimal, requested: Decimal) -> Self {
        LedgerError::LimitExceeded {
            operation: operation.to_string(),
            limit,
            requested,
        }
    }

    /// Create a NotFound error
    pub fn not_found(id: &str) -> Self {
        LedgerError::NotFound { id: id.to_string() }
    }

    /// Create a DuplicateId error
    pub fn duplicate_id(id: &str) -> Self {
        LedgerError::DuplicateId { id: id.to_string() }
    }

    /// Create a ValidationFailed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        LedgerError::ValidationFailed {
            message: message.into(),
        }
    }

    /// Create an AccountInactive error
    pub fn account_inactive(id: &str) -> Self {
        LedgerError::AccountInactive { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::invalid_amount("-5"),
        "Invalid amount '-5': must be a positive number"
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("123456789", dec!(5000), dec!(6000)),
        "Insufficient funds for account 123456789: available 5000, requested 6000"
    )]
    #[case::limit_exceeded(
        LedgerError::limit_exceeded("withdrawal", dec!(50000), dec!(60000)),
        "withdrawal limit exceeded: maximum 50000 per transaction, requested 60000"
    )]
    #[case::authentication_failed(LedgerError::AuthenticationFailed, "Authentication failed")]
    #[case::not_found(
        LedgerError::not_found("000000000"),
        "No account or official found with id 000000000"
    )]
    #[case::duplicate_id(LedgerError::duplicate_id("OFF001"), "Id OFF001 is already in use")]
    #[case::validation_failed(
        LedgerError::validation_failed("PIN must be exactly 4 digits"),
        "Validation failed: PIN must be exactly 4 digits"
    )]
    #[case::account_inactive(
        LedgerError::account_inactive("987654321"),
        "Account 987654321 is blocked"
    )]
    fn error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn helper_constructors_build_matching_variants() {
        assert_eq!(
            LedgerError::insufficient_funds("A", dec!(1), dec!(2)),
            LedgerError::InsufficientFunds {
                account: "A".to_string(),
                available: dec!(1),
                requested: dec!(2),
            }
        );
        assert_eq!(
            LedgerError::duplicate_id("X"),
            LedgerError::DuplicateId {
                id: "X".to_string()
            }
        );
    }
}
