//! Core data types for the bank ledger
//!
//! Leaf types only; the registry and operation orchestration live in
//! [`crate::core`].

pub mod account;
pub mod error;
pub mod official;
pub mod transaction;

pub use account::Account;
pub use error::LedgerError;
pub use official::{Official, Role};
pub use transaction::{AccountId, OfficialId, TransactionEntry, TransactionKind};
