//! Interactive console menus
//!
//! Presentation glue only: the menus drive the [`Teller`] and render its
//! results as text. All state lives in the core; the "current session" is
//! just the account or official id held in a local variable here. Errors
//! coming back from the core are printed and the user is re-prompted; nothing
//! in this module panics on malformed input.

use crate::core::{Ledger, Teller};
use crate::io::{write_accounts_csv, write_transaction_log_csv};
use crate::types::{Account, LedgerError, Official, Role};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::warn;

/// Seed the sample accounts and officials the simulation starts with
pub fn seed_sample_data(ledger: &mut Ledger) {
    let accounts = [
        ("123456789", "1234", "Prabhu Bhalke", "5000"),
        ("987654321", "5678", "John Doe", "2500"),
        ("456789123", "9012", "Jane Smith", "7500"),
        ("111222333", "1111", "Alice Johnson", "10000"),
        ("444555666", "2222", "Bob Wilson", "3500"),
    ];
    for (id, pin, holder, balance) in accounts {
        let balance = Decimal::from_str(balance).unwrap_or(Decimal::ZERO);
        if let Err(error) = ledger.add_account(Account::new(id, pin, holder, balance)) {
            warn!(%error, "skipping seed account");
        }
    }

    let officials = [
        ("OFF001", "admin123", Role::Manager, "John Manager"),
        ("OFF002", "staff456", Role::Staff, "Sarah Staff"),
        ("OFF003", "super789", Role::Supervisor, "Mike Supervisor"),
    ];
    for (id, password, role, name) in officials {
        if let Err(error) = ledger.add_official(Official::new(id, password, role, name)) {
            warn!(%error, "skipping seed official");
        }
    }
}

/// Run the interactive menu loop until the user exits or input ends
pub fn run(teller: &mut Teller) -> io::Result<()> {
    println!("Welcome to {}", teller.ledger().name());
    loop {
        println!();
        println!("MAIN LOGIN MENU");
        println!("  1. Customer Login");
        println!("  2. Bank Official Login");
        println!("  3. Exit");
        let Some(choice) = prompt("Enter your choice (1-3): ")? else {
            return Ok(());
        };
        let exit = match choice.as_str() {
            "1" => customer_login(teller)?,
            "2" => official_login(teller)?,
            "3" => true,
            _ => {
                println!("Invalid choice. Please enter 1, 2, or 3.");
                false
            }
        };
        if exit {
            println!("Thank you for using {}. Goodbye!", teller.ledger().name());
            return Ok(());
        }
    }
}

fn customer_login(teller: &mut Teller) -> io::Result<bool> {
    let Some(account_id) = prompt("Enter Account Number: ")? else {
        return Ok(true);
    };
    let Some(pin) = prompt("Enter PIN: ")? else {
        return Ok(true);
    };
    if !teller.authenticate_customer(&account_id, &pin) {
        println!("Invalid account number or PIN. Please try again.");
        return Ok(false);
    }
    let holder = teller
        .find_account(&account_id)
        .map(|account| account.holder().to_string())
        .unwrap_or_default();
    println!("Login successful! Welcome, {holder}!");
    customer_menu(teller, &account_id)
}

fn customer_menu(teller: &mut Teller, account_id: &str) -> io::Result<bool> {
    loop {
        println!();
        println!("CUSTOMER MENU");
        println!("  1. Check Balance");
        println!("  2. Withdraw Money");
        println!("  3. Deposit Money");
        println!("  4. Transfer Money");
        println!("  5. View Transaction History");
        println!("  6. Change PIN");
        println!("  7. Request Account Statement");
        println!("  8. Logout");
        println!("  9. Exit");
        let Some(choice) = prompt("Enter your choice (1-9): ")? else {
            return Ok(true);
        };
        match choice.as_str() {
            "1" => match teller.balance(account_id) {
                Ok(balance) => println!("Current Balance: {balance:.2}"),
                Err(error) => report(&error),
            },
            "2" => withdraw_money(teller, account_id)?,
            "3" => deposit_money(teller, account_id)?,
            "4" => transfer_money(teller, account_id)?,
            "5" => match teller.history(account_id) {
                Ok(entries) => {
                    for entry in entries {
                        println!("{}", entry.summary());
                    }
                }
                Err(error) => report(&error),
            },
            "6" => change_pin(teller, account_id)?,
            "7" => match teller.statement(account_id) {
                Ok(statement) => {
                    println!(
                        "Statement for {} ({}) generated {}",
                        statement.holder,
                        statement.account_id,
                        statement.generated_at.format("%d/%m/%Y %H:%M")
                    );
                    println!("Current Balance: {:.2}", statement.balance);
                    for entry in &statement.entries {
                        println!("{}", entry.summary());
                    }
                }
                Err(error) => report(&error),
            },
            "8" => {
                println!("Logged out successfully.");
                return Ok(false);
            }
            "9" => return Ok(true),
            _ => println!("Invalid choice. Please enter a number between 1-9."),
        }
    }
}

fn withdraw_money(teller: &mut Teller, account_id: &str) -> io::Result<()> {
    let Some(input) = prompt("Enter amount to withdraw: ")? else {
        return Ok(());
    };
    let amount = match parse_amount(&input) {
        Ok(amount) => amount,
        Err(error) => return Ok(report(&error)),
    };
    // PIN re-entry above the policy threshold.
    let pin = if amount > teller.policy().withdrawal_pin_threshold {
        prompt("Enter PIN for verification: ")?
    } else {
        None
    };
    match teller.withdraw(account_id, amount, pin.as_deref()) {
        Ok(balance) => {
            println!("Withdrawal successful!");
            println!("New balance: {balance:.2}");
        }
        Err(error) => report(&error),
    }
    Ok(())
}

fn deposit_money(teller: &mut Teller, account_id: &str) -> io::Result<()> {
    let Some(input) = prompt("Enter amount to deposit: ")? else {
        return Ok(());
    };
    match parse_amount(&input).and_then(|amount| teller.deposit(account_id, amount)) {
        Ok(balance) => {
            println!("Deposit successful!");
            println!("New balance: {balance:.2}");
        }
        Err(error) => report(&error),
    }
    Ok(())
}

fn transfer_money(teller: &mut Teller, account_id: &str) -> io::Result<()> {
    let Some(recipient) = prompt("Enter recipient account number: ")? else {
        return Ok(());
    };
    let Some(input) = prompt("Enter amount to transfer: ")? else {
        return Ok(());
    };
    let amount = match parse_amount(&input) {
        Ok(amount) => amount,
        Err(error) => return Ok(report(&error)),
    };
    let Some(pin) = prompt("Enter PIN for verification: ")? else {
        return Ok(());
    };
    match teller.transfer(account_id, &recipient, amount, &pin) {
        Ok(balance) => {
            println!("Transfer successful!");
            println!("Your new balance: {balance:.2}");
        }
        Err(error) => report(&error),
    }
    Ok(())
}

fn change_pin(teller: &mut Teller, account_id: &str) -> io::Result<()> {
    let Some(current) = prompt("Enter current PIN: ")? else {
        return Ok(());
    };
    let Some(new_pin) = prompt("Enter new PIN (4 digits): ")? else {
        return Ok(());
    };
    let Some(confirm) = prompt("Confirm new PIN: ")? else {
        return Ok(());
    };
    if new_pin != confirm {
        println!("PINs do not match.");
        return Ok(());
    }
    match teller.change_pin(account_id, &current, &new_pin) {
        Ok(()) => println!("PIN changed successfully!"),
        Err(error) => report(&error),
    }
    Ok(())
}

fn official_login(teller: &mut Teller) -> io::Result<bool> {
    let Some(official_id) = prompt("Enter Official ID: ")? else {
        return Ok(true);
    };
    let Some(password) = prompt("Enter Password: ")? else {
        return Ok(true);
    };
    if !teller.authenticate_official(&official_id, &password) {
        println!("Invalid official ID or password. Please try again.");
        return Ok(false);
    }
    if let Some(official) = teller.ledger().official(&official_id) {
        println!(
            "Login successful! Welcome, {} ({})!",
            official.name(),
            official.role()
        );
    }
    official_menu(teller)
}

fn official_menu(teller: &mut Teller) -> io::Result<bool> {
    loop {
        println!();
        println!("BANK OFFICIAL MENU");
        println!("  1. Create New Account");
        println!("  2. View All Accounts");
        println!("  3. Search Account");
        println!("  4. Block/Unblock Account");
        println!("  5. View Bank Statistics");
        println!("  6. View Transaction Logs");
        println!("  7. Export Reports (CSV)");
        println!("  8. Manage Bank Officials");
        println!("  9. Logout");
        println!("  10. Exit");
        let Some(choice) = prompt("Enter your choice (1-10): ")? else {
            return Ok(true);
        };
        match choice.as_str() {
            "1" => create_account(teller)?,
            "2" => list_accounts(teller),
            "3" => search_account(teller)?,
            "4" => manage_account_status(teller)?,
            "5" => show_statistics(teller),
            "6" => show_transaction_logs(teller),
            "7" => export_reports(teller)?,
            "8" => manage_officials(teller)?,
            "9" => {
                println!("Logged out successfully.");
                return Ok(false);
            }
            "10" => return Ok(true),
            _ => println!("Invalid choice. Please enter a number between 1-10."),
        }
    }
}

fn create_account(teller: &mut Teller) -> io::Result<()> {
    let Some(account_id) = prompt("Enter Account Number: ")? else {
        return Ok(());
    };
    let Some(holder) = prompt("Enter Account Holder Name: ")? else {
        return Ok(());
    };
    let Some(pin) = prompt("Enter Initial PIN (4 digits): ")? else {
        return Ok(());
    };
    let Some(input) = prompt("Enter Initial Balance: ")? else {
        return Ok(());
    };
    let initial = match Decimal::from_str(input.trim()) {
        Ok(amount) => amount.round_dp(2),
        Err(_) => return Ok(report(&LedgerError::invalid_amount(input))),
    };
    match teller.create_account(&account_id, &holder, &pin, initial) {
        Ok(()) => println!("Account {account_id} created successfully!"),
        Err(error) => report(&error),
    }
    Ok(())
}

fn list_accounts(teller: &Teller) {
    println!(
        "{:<15} {:<20} {:>12}  {:<8}",
        "Account No.", "Account Holder", "Balance", "Status"
    );
    for account in teller.list_accounts() {
        println!(
            "{:<15} {:<20} {:>12.2}  {:<8}",
            account.id(),
            account.holder(),
            account.balance(),
            if account.is_active() { "Active" } else { "Blocked" }
        );
    }
}

fn search_account(teller: &Teller) -> io::Result<()> {
    println!("Search by: 1. Account Number  2. Account Holder Name");
    let Some(choice) = prompt("Enter choice (1-2): ")? else {
        return Ok(());
    };
    match choice.as_str() {
        "1" => {
            let Some(account_id) = prompt("Enter Account Number: ")? else {
                return Ok(());
            };
            match teller.find_account(&account_id) {
                Ok(account) => print_account_details(account),
                Err(error) => report(&error),
            }
        }
        "2" => {
            let Some(name) = prompt("Enter Account Holder Name: ")? else {
                return Ok(());
            };
            let matches = teller.search_accounts(&name);
            if matches.is_empty() {
                println!("No accounts found with that name.");
            } else {
                println!("Found {} account(s):", matches.len());
                for account in matches {
                    print_account_details(account);
                }
            }
        }
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn print_account_details(account: &Account) {
    println!("Account Number: {}", account.id());
    println!("Account Holder: {}", account.holder());
    println!("Current Balance: {:.2}", account.balance());
    println!(
        "Status: {}",
        if account.is_active() { "Active" } else { "Blocked" }
    );
    println!("Total Transactions: {}", account.transactions().len());
}

fn manage_account_status(teller: &mut Teller) -> io::Result<()> {
    let Some(account_id) = prompt("Enter Account Number: ")? else {
        return Ok(());
    };
    let current = match teller.find_account(&account_id) {
        Ok(account) => account.is_active(),
        Err(error) => return Ok(report(&error)),
    };
    println!(
        "Current Status: {}",
        if current { "Active" } else { "Blocked" }
    );
    println!("1. Block Account  2. Unblock Account");
    let Some(choice) = prompt("Enter choice (1-2): ")? else {
        return Ok(());
    };
    let active = match choice.as_str() {
        "1" => false,
        "2" => true,
        _ => {
            println!("Invalid choice.");
            return Ok(());
        }
    };
    match teller.set_account_active(&account_id, active) {
        Ok(()) => println!(
            "Account {} successfully.",
            if active { "unblocked" } else { "blocked" }
        ),
        Err(error) => report(&error),
    }
    Ok(())
}

fn show_statistics(teller: &Teller) {
    let stats = teller.statistics();
    println!("Bank Statistics:");
    println!("Total Accounts: {}", stats.total_accounts);
    println!("Total Officials: {}", stats.total_officials);
    println!("Total Balance: {:.2}", stats.total_balance);
    match stats.average_balance {
        Some(average) => println!("Average Balance: {average:.2}"),
        None => println!("Average Balance: n/a (no accounts)"),
    }
    println!(
        "High Balance Accounts (>= 10,000): {}",
        teller.ledger().accounts_above(Decimal::from(10_000)).len()
    );
    println!(
        "Low Balance Accounts (<= 1,000): {}",
        teller.ledger().accounts_below(Decimal::from(1_000)).len()
    );
}

fn show_transaction_logs(teller: &Teller) {
    for (account, entry) in teller.transaction_log() {
        println!("{} ({}): {}", account.id(), account.holder(), entry.summary());
    }
}

fn export_reports(teller: &Teller) -> io::Result<()> {
    println!("Export: 1. Account Listing  2. Transaction Log");
    let Some(choice) = prompt("Enter choice (1-2): ")? else {
        return Ok(());
    };
    let Some(path) = prompt("Enter output file path: ")? else {
        return Ok(());
    };
    let mut file = match File::create(&path) {
        Ok(file) => file,
        Err(error) => {
            println!("Error: could not create {path}: {error}");
            return Ok(());
        }
    };
    let accounts = teller.list_accounts();
    let result = match choice.as_str() {
        "1" => write_accounts_csv(&accounts, &mut file),
        "2" => write_transaction_log_csv(&accounts, &mut file),
        _ => {
            println!("Invalid choice.");
            return Ok(());
        }
    };
    match result {
        Ok(()) => println!("Report written to {path}"),
        Err(message) => println!("Error: {message}"),
    }
    Ok(())
}

fn manage_officials(teller: &mut Teller) -> io::Result<()> {
    println!("Current Officials:");
    for official in teller.officials() {
        println!("{}", official.summary());
    }
    println!("1. Add New Official  2. Remove Official  3. Back");
    let Some(choice) = prompt("Enter choice (1-3): ")? else {
        return Ok(());
    };
    match choice.as_str() {
        "1" => {
            let Some(official_id) = prompt("Enter Official ID: ")? else {
                return Ok(());
            };
            let Some(password) = prompt("Enter Password: ")? else {
                return Ok(());
            };
            let Some(role_input) = prompt("Enter Role (Manager/Staff/Supervisor): ")? else {
                return Ok(());
            };
            let role = match role_input.parse::<Role>() {
                Ok(role) => role,
                Err(error) => return Ok(report(&error)),
            };
            let Some(name) = prompt("Enter Name: ")? else {
                return Ok(());
            };
            match teller.add_official(&official_id, &password, role, &name) {
                Ok(()) => println!("Official added successfully!"),
                Err(error) => report(&error),
            }
        }
        "2" => {
            let Some(official_id) = prompt("Enter Official ID to remove: ")? else {
                return Ok(());
            };
            match teller.remove_official(&official_id) {
                Ok(()) => println!("Official removed successfully!"),
                Err(error) => report(&error),
            }
        }
        "3" => {}
        _ => println!("Invalid choice."),
    }
    Ok(())
}

/// Print a prompt, flush, and read one trimmed line; `None` on end of input
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a user-entered amount, normalized to two decimal places
fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(input.trim())
        .map(|amount| amount.round_dp(2))
        .map_err(|_| LedgerError::invalid_amount(input.trim()))
}

fn report(error: &LedgerError) {
    println!("Error: {error}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn seed_populates_accounts_and_officials() {
        let mut ledger = Ledger::new("Test Bank");
        seed_sample_data(&mut ledger);

        assert_eq!(ledger.total_accounts(), 5);
        assert_eq!(ledger.all_officials().len(), 3);
        assert!(ledger.authenticate_customer("123456789", "1234"));
        assert!(ledger.authenticate_official("OFF001", "admin123"));
        assert_eq!(ledger.total_balance(), dec!(28_500));
    }

    #[test]
    fn seeding_twice_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new("Test Bank");
        seed_sample_data(&mut ledger);
        seed_sample_data(&mut ledger);
        assert_eq!(ledger.total_accounts(), 5);
        assert_eq!(ledger.all_officials().len(), 3);
    }

    #[test]
    fn amount_parsing_normalizes_to_two_decimals() {
        assert_eq!(parse_amount(" 100.129 ").unwrap(), dec!(100.13));
        assert_eq!(parse_amount("2500").unwrap(), dec!(2500));
        assert!(matches!(
            parse_amount("abc").unwrap_err(),
            LedgerError::InvalidAmount { .. }
        ));
    }
}
