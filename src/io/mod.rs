//! Output rendering helpers

pub mod report;

pub use report::{write_accounts_csv, write_transaction_log_csv};
