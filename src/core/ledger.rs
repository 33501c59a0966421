//! The ledger: owning registry of accounts and officials
//!
//! The [`Ledger`] owns every [`Account`] and [`Official`] in two id-keyed
//! maps, and provides lookup, creation, authentication, transfer
//! orchestration and aggregate reporting. It is a plain value created once in
//! `main` and passed down; there is no process-wide instance.
//!
//! Transfers span two accounts. Every failure mode is checked before the
//! first mutation, so a debit without its matching credit cannot occur and
//! total funds are conserved.

use crate::types::{Account, AccountId, LedgerError, Official, OfficialId, TransactionKind};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Aggregate figures over all accounts
///
/// `average_balance` is `None` for an empty ledger; the division is never
/// performed with a zero account count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankStatistics {
    pub total_accounts: usize,
    pub total_officials: usize,
    pub total_balance: Decimal,
    pub average_balance: Option<Decimal>,
}

/// Owning registry of all accounts and officials
#[derive(Debug, Clone)]
pub struct Ledger {
    name: String,
    accounts: HashMap<AccountId, Account>,
    officials: HashMap<OfficialId, Official>,
}

impl Ledger {
    /// Create an empty ledger with a display name
    pub fn new(name: impl Into<String>) -> Self {
        Ledger {
            name: name.into(),
            accounts: HashMap::new(),
            officials: HashMap::new(),
        }
    }

    /// The bank display name
    pub fn name(&self) -> &str {
        &self.name
    }

    // --- accounts ---

    /// Insert a new account
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if an account with the same id already exists;
    /// the registry is unchanged in that case.
    pub fn add_account(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.accounts.contains_key(account.id()) {
            return Err(LedgerError::duplicate_id(account.id()));
        }
        info!(account = account.id(), holder = account.holder(), "account added");
        self.accounts.insert(account.id().to_string(), account);
        Ok(())
    }

    /// Remove an account
    ///
    /// Present for registry completeness; the console never drives it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn remove_account(&mut self, id: &str) -> Result<Account, LedgerError> {
        let removed = self
            .accounts
            .remove(id)
            .ok_or_else(|| LedgerError::not_found(id))?;
        info!(account = id, "account removed");
        Ok(removed)
    }

    /// Look up an account
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Look up an account for mutation
    pub fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Whether an account with this id exists
    pub fn account_exists(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    /// Authenticate a customer by account id and PIN
    ///
    /// True iff the account exists and the PIN matches exactly. The active
    /// flag is deliberately not consulted: a blocked account can still log
    /// in, it just cannot transact. (Official authentication is stricter,
    /// see [`Ledger::authenticate_official`].)
    pub fn authenticate_customer(&self, id: &str, pin: &str) -> bool {
        self.accounts
            .get(id)
            .is_some_and(|account| account.verify_pin(pin))
    }

    /// Move funds between two accounts
    ///
    /// The single transfer operation in the system; policy caps and PIN
    /// confirmation are applied by the teller before calling in. A completed
    /// transfer writes two entries per side: the raw Withdrawal/Deposit plus
    /// a TransferOut/TransferIn marker.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - sender and recipient are the same account
    /// - the amount is not strictly positive
    /// - either account is unknown or blocked
    /// - the sender lacks sufficient funds
    ///
    /// On any error no entry is written to either account.
    pub fn transfer(&mut self, from_id: &str, to_id: &str, amount: Decimal) -> Result<(), LedgerError> {
        if from_id == to_id {
            return Err(LedgerError::validation_failed(
                "cannot transfer to the same account",
            ));
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        // Validate both sides before touching either balance, so the debit
        // and credit happen as one all-or-nothing unit.
        let from = self
            .accounts
            .get(from_id)
            .ok_or_else(|| LedgerError::not_found(from_id))?;
        if !from.is_active() {
            return Err(LedgerError::account_inactive(from_id));
        }
        if !from.has_sufficient_funds(amount) {
            return Err(LedgerError::insufficient_funds(
                from_id,
                from.balance(),
                amount,
            ));
        }
        let to = self
            .accounts
            .get(to_id)
            .ok_or_else(|| LedgerError::not_found(to_id))?;
        if !to.is_active() {
            return Err(LedgerError::account_inactive(to_id));
        }

        // Both sides validated; neither call below can fail.
        let from = self
            .accounts
            .get_mut(from_id)
            .ok_or_else(|| LedgerError::not_found(from_id))?;
        from.withdraw(amount)?;
        from.record_transfer_marker(TransactionKind::TransferOut, -amount);

        let to = self
            .accounts
            .get_mut(to_id)
            .ok_or_else(|| LedgerError::not_found(to_id))?;
        to.deposit(amount)?;
        to.record_transfer_marker(TransactionKind::TransferIn, amount);

        debug!(from = from_id, to = to_id, %amount, "transfer completed");
        Ok(())
    }

    // --- officials ---

    /// Insert a new official
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if an official with the same id already exists.
    pub fn add_official(&mut self, official: Official) -> Result<(), LedgerError> {
        if self.officials.contains_key(official.id()) {
            return Err(LedgerError::duplicate_id(official.id()));
        }
        info!(official = official.id(), role = %official.role(), "official added");
        self.officials.insert(official.id().to_string(), official);
        Ok(())
    }

    /// Remove an official
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub fn remove_official(&mut self, id: &str) -> Result<Official, LedgerError> {
        let removed = self
            .officials
            .remove(id)
            .ok_or_else(|| LedgerError::not_found(id))?;
        info!(official = id, "official removed");
        Ok(removed)
    }

    /// Look up an official
    pub fn official(&self, id: &str) -> Option<&Official> {
        self.officials.get(id)
    }

    /// Whether an official with this id exists
    pub fn official_exists(&self, id: &str) -> bool {
        self.officials.contains_key(id)
    }

    /// Authenticate an official by id and password
    ///
    /// True iff the official exists, the password matches and the credential
    /// is active.
    pub fn authenticate_official(&self, id: &str, password: &str) -> bool {
        self.officials
            .get(id)
            .is_some_and(|official| official.authenticate(password))
    }

    /// All officials, sorted by id
    pub fn all_officials(&self) -> Vec<&Official> {
        let mut officials: Vec<&Official> = self.officials.values().collect();
        officials.sort_by_key(|official| official.id().to_string());
        officials
    }

    // --- aggregates ---

    /// All accounts, sorted by id for deterministic output
    pub fn all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.id().to_string());
        accounts
    }

    /// Number of accounts
    pub fn total_accounts(&self) -> usize {
        self.accounts.len()
    }

    /// Case-insensitive substring search on holder names
    pub fn search_by_holder(&self, name: &str) -> Vec<&Account> {
        let needle = name.to_lowercase();
        self.all_accounts()
            .into_iter()
            .filter(|account| account.holder().to_lowercase().contains(&needle))
            .collect()
    }

    /// Accounts with balance >= `min` (inclusive)
    pub fn accounts_above(&self, min: Decimal) -> Vec<&Account> {
        self.all_accounts()
            .into_iter()
            .filter(|account| account.balance() >= min)
            .collect()
    }

    /// Accounts with balance <= `max` (inclusive)
    pub fn accounts_below(&self, max: Decimal) -> Vec<&Account> {
        self.all_accounts()
            .into_iter()
            .filter(|account| account.balance() <= max)
            .collect()
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> Decimal {
        self.accounts
            .values()
            .map(|account| account.balance())
            .sum()
    }

    /// Aggregate statistics over all accounts
    ///
    /// The average is `None` when the ledger holds no accounts.
    pub fn statistics(&self) -> BankStatistics {
        let total_accounts = self.accounts.len();
        let total_balance = self.total_balance();
        let average_balance = if total_accounts == 0 {
            None
        } else {
            Some((total_balance / Decimal::from(total_accounts)).round_dp(2))
        };
        BankStatistics {
            total_accounts,
            total_officials: self.officials.len(),
            total_balance,
            average_balance,
        }
    }
}
