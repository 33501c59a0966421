//! Bank Ledger Library
//! # Overview
//!
//! This library provides an in-memory bank account ledger with dual-role
//! access control, driven interactively through a text menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Official, TransactionEntry, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Owning registry of accounts and officials
//!   - [`core::teller`] - Operation orchestration and policy enforcement
//!   - [`core::policy`] - Transaction limits and PIN format rules
//! - [`io`] - CSV report rendering
//! - [`ui`] - Interactive console menus
//!
//! # Roles
//!
//! Two kinds of principal use the system:
//!
//! - **Customers** authenticate with an account number and PIN, and can check
//!   their balance, deposit, withdraw, transfer, change their PIN, and request
//!   history or a statement
//! - **Bank officials** authenticate with an id and password, and can open
//!   accounts, block or unblock them, search, view statistics and transaction
//!   logs, export CSV reports, and manage other officials
//!
//! # Accounts
//!
//! Each account maintains:
//! - `balance`: Current funds, kept equal to the running balance of the last
//!   history entry
//! - `active`: Whether the account may transact; blocked accounts can still
//!   log in and view their history
//! - an append-only transaction history with per-account sequence numbers

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;
pub mod ui;

pub use core::{BankStatistics, Ledger, Policy, Statement, Teller};
pub use io::{write_accounts_csv, write_transaction_log_csv};
pub use types::{
    Account, AccountId, LedgerError, Official, OfficialId, Role, TransactionEntry,
    TransactionKind,
};
