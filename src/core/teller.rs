//! Operation orchestration for customer and official sessions
//!
//! The [`Teller`] wraps the [`Ledger`] together with a [`Policy`] and exposes
//! the contract the console UI consumes: every customer action (balance,
//! withdraw, deposit, transfer, history, PIN change, statement) and every
//! official action (account creation, block/unblock, search, statistics,
//! transaction logs, official management).
//!
//! The teller is where business rules are applied: per-transaction caps, PIN
//! re-entry above the withdrawal threshold, PIN format checks. The "current
//! customer" and "current official" are values held by the caller; teller
//! operations take ids.

use crate::core::policy::{validate_pin, Policy};
use crate::core::Ledger;
use crate::types::{
    Account, AccountId, LedgerError, Official, Role, TransactionEntry, TransactionKind,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use super::BankStatistics;

/// A point-in-time statement snapshot
///
/// The entry list is captured before the `StatementRequested` marker is
/// recorded, so a statement never contains its own request.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub account_id: AccountId,
    pub holder: String,
    pub balance: Decimal,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<TransactionEntry>,
}

/// Policy-checked front door to the ledger
#[derive(Debug, Clone)]
pub struct Teller {
    ledger: Ledger,
    policy: Policy,
}

impl Teller {
    /// Create a teller over a ledger with the given policy
    pub fn new(ledger: Ledger, policy: Policy) -> Self {
        Teller { ledger, policy }
    }

    /// Read access to the underlying ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The active policy limits
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    // --- authentication ---

    /// Authenticate a customer login; PIN match only (blocked accounts can
    /// still log in)
    pub fn authenticate_customer(&self, account_id: &str, pin: &str) -> bool {
        self.ledger.authenticate_customer(account_id, pin)
    }

    /// Authenticate an official login; password match and active credential
    pub fn authenticate_official(&self, official_id: &str, password: &str) -> bool {
        self.ledger.authenticate_official(official_id, password)
    }

    // --- customer actions ---

    /// Current balance; records a `BalanceInquiry` entry
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account.
    pub fn balance(&mut self, account_id: &str) -> Result<Decimal, LedgerError> {
        let account = self.account_mut(account_id)?;
        account.record_event(TransactionKind::BalanceInquiry);
        Ok(account.balance())
    }

    /// Deposit funds, subject to the per-transaction deposit cap
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the account is unknown or blocked
    /// - the amount is not strictly positive
    /// - the amount exceeds the deposit limit
    pub fn deposit(&mut self, account_id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        if amount > self.policy.deposit_limit {
            return Err(LedgerError::limit_exceeded(
                "deposit",
                self.policy.deposit_limit,
                amount,
            ));
        }
        let account = self.account_mut(account_id)?;
        account.deposit(amount)?;
        debug!(account = account_id, %amount, "deposit accepted");
        Ok(account.balance())
    }

    /// Withdraw funds, subject to the withdrawal cap and PIN re-entry rule
    ///
    /// Withdrawals above the configured threshold require the PIN again;
    /// `pin` may be `None` for amounts at or below it. Returns the new
    /// balance. The check order matches the console flow: amount, funds,
    /// cap, PIN confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the account is unknown or blocked
    /// - the amount is not strictly positive
    /// - the amount exceeds the balance
    /// - the amount exceeds the withdrawal limit
    /// - the amount is above the threshold and the PIN is absent or wrong
    pub fn withdraw(
        &mut self,
        account_id: &str,
        amount: Decimal,
        pin: Option<&str>,
    ) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        let policy = self.policy.clone();
        let account = self.account_mut(account_id)?;
        if !account.has_sufficient_funds(amount) {
            return Err(LedgerError::insufficient_funds(
                account_id,
                account.balance(),
                amount,
            ));
        }
        if amount > policy.withdrawal_limit {
            return Err(LedgerError::limit_exceeded(
                "withdrawal",
                policy.withdrawal_limit,
                amount,
            ));
        }
        if amount > policy.withdrawal_pin_threshold {
            match pin {
                Some(pin) if account.verify_pin(pin) => {}
                _ => return Err(LedgerError::AuthenticationFailed),
            }
        }

        account.withdraw(amount)?;
        debug!(account = account_id, %amount, "withdrawal accepted");
        Ok(account.balance())
    }

    /// Transfer funds to another account; always requires PIN re-entry
    ///
    /// Returns the sender's new balance. Delegates the actual movement to
    /// [`Ledger::transfer`], the single transfer operation in the system.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either account is unknown, or sender and recipient are the same
    /// - the amount is not strictly positive
    /// - the sender lacks sufficient funds
    /// - the amount exceeds the transfer limit
    /// - the PIN does not match the sender's
    /// - either account is blocked
    pub fn transfer(
        &mut self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
        pin: &str,
    ) -> Result<Decimal, LedgerError> {
        if !self.ledger.account_exists(to_id) {
            return Err(LedgerError::not_found(to_id));
        }
        if from_id == to_id {
            return Err(LedgerError::validation_failed(
                "cannot transfer to your own account",
            ));
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        let sender = self
            .ledger
            .account(from_id)
            .ok_or_else(|| LedgerError::not_found(from_id))?;
        if !sender.has_sufficient_funds(amount) {
            return Err(LedgerError::insufficient_funds(
                from_id,
                sender.balance(),
                amount,
            ));
        }
        if amount > self.policy.transfer_limit {
            return Err(LedgerError::limit_exceeded(
                "transfer",
                self.policy.transfer_limit,
                amount,
            ));
        }
        if !sender.verify_pin(pin) {
            return Err(LedgerError::AuthenticationFailed);
        }

        self.ledger.transfer(from_id, to_id, amount)?;
        self.ledger
            .account(from_id)
            .map(|account| account.balance())
            .ok_or_else(|| LedgerError::not_found(from_id))
    }

    /// Transaction history, oldest first
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account.
    pub fn history(&self, account_id: &str) -> Result<&[TransactionEntry], LedgerError> {
        self.ledger
            .account(account_id)
            .map(|account| account.transactions())
            .ok_or_else(|| LedgerError::not_found(account_id))
    }

    /// Change the PIN after confirming the old one
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the account is unknown or blocked
    /// - the old PIN does not match
    /// - the new PIN is not exactly 4 digits
    pub fn change_pin(
        &mut self,
        account_id: &str,
        old_pin: &str,
        new_pin: &str,
    ) -> Result<(), LedgerError> {
        validate_pin(new_pin)?;
        let account = self.account_mut(account_id)?;
        if !account.verify_pin(old_pin) {
            return Err(LedgerError::AuthenticationFailed);
        }
        account.set_pin(new_pin)?;
        debug!(account = account_id, "PIN changed");
        Ok(())
    }

    /// Produce a statement snapshot; records a `StatementRequested` entry
    ///
    /// The snapshot is taken first, so the statement does not include its
    /// own request marker.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account.
    pub fn statement(&mut self, account_id: &str) -> Result<Statement, LedgerError> {
        let account = self.account_mut(account_id)?;
        let statement = Statement {
            account_id: account.id().to_string(),
            holder: account.holder().to_string(),
            balance: account.balance(),
            generated_at: Utc::now(),
            entries: account.transactions().to_vec(),
        };
        account.record_event(TransactionKind::StatementRequested);
        Ok(statement)
    }

    // --- official actions ---

    /// Open a new account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the id or holder name is empty
    /// - the PIN is not exactly 4 digits
    /// - the initial balance is negative
    /// - the id is already in use
    pub fn create_account(
        &mut self,
        account_id: &str,
        holder: &str,
        pin: &str,
        initial_balance: Decimal,
    ) -> Result<(), LedgerError> {
        if account_id.trim().is_empty() {
            return Err(LedgerError::validation_failed("account id is required"));
        }
        if holder.trim().is_empty() {
            return Err(LedgerError::validation_failed("holder name is required"));
        }
        validate_pin(pin)?;
        if initial_balance < Decimal::ZERO {
            return Err(LedgerError::validation_failed(
                "initial balance cannot be negative",
            ));
        }
        self.ledger
            .add_account(Account::new(account_id, pin, holder, initial_balance))
    }

    /// Block or unblock an account
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account.
    pub fn set_account_active(&mut self, account_id: &str, active: bool) -> Result<(), LedgerError> {
        let account = self.account_mut(account_id)?;
        account.set_active(active);
        debug!(account = account_id, active, "account status changed");
        Ok(())
    }

    /// All accounts, sorted by id
    pub fn list_accounts(&self) -> Vec<&Account> {
        self.ledger.all_accounts()
    }

    /// Look up one account by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account.
    pub fn find_account(&self, account_id: &str) -> Result<&Account, LedgerError> {
        self.ledger
            .account(account_id)
            .ok_or_else(|| LedgerError::not_found(account_id))
    }

    /// Case-insensitive holder-name search
    pub fn search_accounts(&self, name: &str) -> Vec<&Account> {
        self.ledger.search_by_holder(name)
    }

    /// Aggregate bank statistics
    pub fn statistics(&self) -> BankStatistics {
        self.ledger.statistics()
    }

    /// Every transaction entry across all accounts, grouped by account id
    pub fn transaction_log(&self) -> Vec<(&Account, &TransactionEntry)> {
        self.ledger
            .all_accounts()
            .into_iter()
            .flat_map(|account| {
                account
                    .transactions()
                    .iter()
                    .map(move |entry| (account, entry))
            })
            .collect()
    }

    /// Register a new official
    ///
    /// # Errors
    ///
    /// Returns an error if the id, password or name is empty, or the id is
    /// already in use.
    pub fn add_official(
        &mut self,
        official_id: &str,
        password: &str,
        role: Role,
        name: &str,
    ) -> Result<(), LedgerError> {
        if official_id.trim().is_empty() {
            return Err(LedgerError::validation_failed("official id is required"));
        }
        if password.is_empty() {
            return Err(LedgerError::validation_failed("password is required"));
        }
        if name.trim().is_empty() {
            return Err(LedgerError::validation_failed("name is required"));
        }
        self.ledger
            .add_official(Official::new(official_id, password, role, name))
    }

    /// Remove an official
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn remove_official(&mut self, official_id: &str) -> Result<(), LedgerError> {
        self.ledger.remove_official(official_id).map(|_| ())
    }

    /// All officials, sorted by id
    pub fn officials(&self) -> Vec<&Official> {
        self.ledger.all_officials()
    }

    fn account_mut(&mut self, account_id: &str) -> Result<&mut Account, LedgerError> {
        self.ledger
            .account_mut(account_id)
            .ok_or_else(|| LedgerError::not_found(account_id))
    }
}
