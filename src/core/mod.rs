//! Business logic: the ledger registry, policy limits and the teller
//! orchestration layer consumed by the console UI.

pub mod ledger;
pub mod policy;
pub mod teller;

pub use ledger::{BankStatistics, Ledger};
pub use policy::{validate_pin, Policy};
pub use teller::{Statement, Teller};
