//! Account state and balance-mutating primitives
//!
//! An [`Account`] owns its balance, PIN, active flag and append-only
//! transaction history. The operations here enforce ledger invariants only
//! (positive amounts, sufficient funds, active account); business caps and
//! PIN-confirmation rules are the caller's responsibility and live in
//! [`crate::core::Policy`].
//!
//! Every mutation appends exactly one [`TransactionEntry`] carrying a snapshot
//! of the balance after the event, so the history is always consistent with
//! the live balance.

use crate::types::{AccountId, LedgerError, TransactionEntry, TransactionKind};
use chrono::Utc;
use rust_decimal::Decimal;

/// A holder's balance plus its transaction history
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    pin: String,
    holder: String,
    balance: Decimal,
    active: bool,
    entries: Vec<TransactionEntry>,
    next_seq: u64,
}

impl Account {
    /// Open a new account
    ///
    /// The caller (the teller's account-creation path) is responsible for
    /// validating the PIN format and that the initial balance is non-negative.
    /// Opening records an `AccountCreated` entry carrying the initial balance.
    pub fn new(id: impl Into<AccountId>, pin: impl Into<String>, holder: impl Into<String>, initial_balance: Decimal) -> Self {
        let mut account = Account {
            id: id.into(),
            pin: pin.into(),
            holder: holder.into(),
            balance: initial_balance,
            active: true,
            entries: Vec::new(),
            next_seq: 1,
        };
        account.push_entry(TransactionKind::AccountCreated, initial_balance);
        account
    }

    /// The account id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The holder display name
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Whether the account accepts mutating operations
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Block or unblock the account
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Check a PIN against the stored credential
    ///
    /// Exact match only; deliberately does not consult the active flag
    /// (blocked accounts can still authenticate, they just cannot transact).
    pub fn verify_pin(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// Whether the balance covers the given amount
    pub fn has_sufficient_funds(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    /// The transaction history, oldest first
    ///
    /// Returned as an immutable view; the underlying sequence is never
    /// exposed mutably.
    pub fn transactions(&self) -> &[TransactionEntry] {
        &self.entries
    }

    /// The most recent history entry
    ///
    /// Always present: opening the account records the first entry.
    pub fn last_entry(&self) -> Option<&TransactionEntry> {
        self.entries.last()
    }

    /// Credit funds to the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the account is blocked
    /// - the amount is not strictly positive
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.check_active()?;
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        self.balance += amount;
        self.push_entry(TransactionKind::Deposit, amount);
        Ok(())
    }

    /// Debit funds from the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the account is blocked
    /// - the amount is not strictly positive
    /// - the amount exceeds the current balance (state unchanged)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.check_active()?;
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                &self.id,
                self.balance,
                amount,
            ));
        }
        self.balance -= amount;
        self.push_entry(TransactionKind::Withdrawal, -amount);
        Ok(())
    }

    /// Overwrite the PIN
    ///
    /// Format validation and old-PIN confirmation are the caller's job.
    /// Records a zero-amount `PinChanged` entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is blocked.
    pub fn set_pin(&mut self, new_pin: impl Into<String>) -> Result<(), LedgerError> {
        self.check_active()?;
        self.pin = new_pin.into();
        self.push_entry(TransactionKind::PinChanged, Decimal::ZERO);
        Ok(())
    }

    /// Record an informational event at the current balance
    ///
    /// This is how non-mutating actions (balance inquiry, statement request)
    /// still appear in the history. Allowed on blocked accounts.
    pub fn record_event(&mut self, kind: TransactionKind) {
        self.push_entry(kind, Decimal::ZERO);
    }

    /// Append a transfer marker entry
    ///
    /// Written by the ledger's transfer operation in addition to the
    /// underlying Withdrawal/Deposit entry on each side.
    pub(crate) fn record_transfer_marker(&mut self, kind: TransactionKind, amount: Decimal) {
        self.push_entry(kind, amount);
    }

    fn check_active(&self) -> Result<(), LedgerError> {
        if self.active {
            Ok(())
        } else {
            Err(LedgerError::account_inactive(&self.id))
        }
    }

    fn push_entry(&mut self, kind: TransactionKind, amount: Decimal) {
        let entry = TransactionEntry {
            seq: self.next_seq,
            kind,
            amount,
            balance: self.balance,
            timestamp: Utc::now(),
        };
        self.next_seq += 1;
        self.entries.push(entry);
    }
}
