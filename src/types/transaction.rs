//! Transaction log entries
//!
//! Every balance-affecting or informational event on an account is recorded as
//! a [`TransactionEntry`]. Entries are immutable once created and accumulate
//! append-only on the owning account, in strictly increasing sequence order.
//! Signed amounts classify the entry: positive is a credit, negative a debit,
//! zero an informational marker (balance inquiry, PIN change, ...).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Account identifier, assigned at creation and never reused
pub type AccountId = String;

/// Official identifier
pub type OfficialId = String;

/// The fixed set of events an account records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    /// Account opened; the entry amount carries the initial balance
    AccountCreated,
    /// Funds credited to the account
    Deposit,
    /// Funds debited from the account
    Withdrawal,
    /// Marker written on the recipient side of a transfer, in addition
    /// to the underlying Deposit entry
    TransferIn,
    /// Marker written on the sender side of a transfer, in addition
    /// to the underlying Withdrawal entry
    TransferOut,
    /// Zero-amount record of a balance check
    BalanceInquiry,
    /// Zero-amount record of a PIN change
    PinChanged,
    /// Zero-amount record of a statement request
    StatementRequested,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::AccountCreated => "Account Created",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::TransferIn => "Transfer In",
            TransactionKind::TransferOut => "Transfer Out",
            TransactionKind::BalanceInquiry => "Balance Inquiry",
            TransactionKind::PinChanged => "PIN Changed",
            TransactionKind::StatementRequested => "Statement Requested",
        };
        f.write_str(label)
    }
}

/// One immutable record in an account's history
///
/// The `balance` field is a snapshot of the owning account's balance
/// immediately after the event, which is what makes the history
/// self-consistent: the account's live balance always equals the
/// `balance` of its most recent entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionEntry {
    /// Per-account sequence number, strictly increasing from 1
    pub seq: u64,

    /// What happened
    pub kind: TransactionKind,

    /// Signed amount: positive credit, negative debit, zero informational
    pub amount: Decimal,

    /// Balance of the owning account after the event
    pub balance: Decimal,

    /// When the entry was created
    pub timestamp: DateTime<Utc>,
}

impl TransactionEntry {
    /// Whether this entry credited the account
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Whether this entry debited the account
    pub fn is_debit(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// The unsigned amount, for display
    pub fn amount_abs(&self) -> Decimal {
        self.amount.abs()
    }

    /// One-line summary for history listings
    pub fn summary(&self) -> String {
        let sign = if self.is_debit() { "-" } else { "+" };
        format!(
            "{} | {} | {}{:.2} | Balance: {:.2}",
            self.timestamp.format("%d/%m/%Y %H:%M"),
            self.kind,
            sign,
            self.amount_abs(),
            self.balance
        )
    }
}
