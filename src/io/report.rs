//! CSV rendering of account listings and transaction logs
//!
//! Pure writer-based functions (no I/O of their own) used by the official
//! menu's export action and by tests. Accounts are expected in id order, as
//! produced by [`crate::core::Ledger::all_accounts`].

use crate::types::Account;
use std::io::Write;

/// Write an account listing as CSV
///
/// Columns: `account,holder,balance,status`. Balances are rendered with two
/// decimal places.
///
/// # Errors
///
/// Returns a message describing the first write failure.
pub fn write_accounts_csv(accounts: &[&Account], output: &mut dyn Write) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(["account", "holder", "balance", "status"])
        .map_err(|e| format!("Failed to write CSV header: {e}"))?;

    for account in accounts {
        writer
            .write_record(&[
                account.id().to_string(),
                account.holder().to_string(),
                format!("{:.2}", account.balance()),
                if account.is_active() { "Active" } else { "Blocked" }.to_string(),
            ])
            .map_err(|e| format!("Failed to write account record: {e}"))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {e}"))?;
    Ok(())
}

/// Write the full transaction log as CSV, one row per entry
///
/// Columns: `account,seq,timestamp,kind,amount,balance`. Timestamps are
/// RFC 3339.
///
/// # Errors
///
/// Returns a message describing the first write failure.
pub fn write_transaction_log_csv(
    accounts: &[&Account],
    output: &mut dyn Write,
) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(["account", "seq", "timestamp", "kind", "amount", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {e}"))?;

    for account in accounts {
        for entry in account.transactions() {
            writer
                .write_record(&[
                    account.id().to_string(),
                    entry.seq.to_string(),
                    entry.timestamp.to_rfc3339(),
                    entry.kind.to_string(),
                    format!("{:.2}", entry.amount),
                    format!("{:.2}", entry.balance),
                ])
                .map_err(|e| format!("Failed to write log record: {e}"))?;
        }
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accounts_csv_has_header_and_one_row_per_account() {
        let a = Account::new("111", "1234", "Alice Johnson", dec!(1000));
        let mut b = Account::new("222", "5678", "Bob Wilson", dec!(2500.50));
        b.set_active(false);

        let mut output = Vec::new();
        write_accounts_csv(&[&a, &b], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "account,holder,balance,status\n\
             111,Alice Johnson,1000.00,Active\n\
             222,Bob Wilson,2500.50,Blocked\n"
        );
    }

    #[test]
    fn accounts_csv_with_no_accounts_is_header_only() {
        let mut output = Vec::new();
        write_accounts_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "account,holder,balance,status\n"
        );
    }

    #[test]
    fn transaction_log_csv_lists_every_entry() {
        let mut account = Account::new("111", "1234", "Alice Johnson", dec!(1000));
        account.deposit(dec!(500)).unwrap();
        account.withdraw(dec!(200)).unwrap();

        let mut output = Vec::new();
        write_transaction_log_csv(&[&account], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 entries
        assert_eq!(lines[0], "account,seq,timestamp,kind,amount,balance");
        assert!(lines[1].starts_with("111,1,"));
        assert!(lines[1].ends_with("Account Created,1000.00,1000.00"));
        assert!(lines[2].ends_with("Deposit,500.00,1500.00"));
        assert!(lines[3].ends_with("Withdrawal,-200.00,1300.00"));
    }
}
