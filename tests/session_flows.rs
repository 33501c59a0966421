//! End-to-end session flow tests
//!
//! These tests drive complete customer and official sessions through the
//! public [`Teller`] API, the same surface the console menus use. Each test
//! builds a seeded ledger, performs a sequence of operations a real session
//! would, and checks balances, histories and reports afterwards.

#[cfg(test)]
mod tests {
    use bank_ledger::ui::seed_sample_data;
    use bank_ledger::{
        write_accounts_csv, Ledger, LedgerError, Policy, Role, Teller, TransactionKind,
    };
    use rust_decimal_macros::dec;
    use std::fs;
    use std::fs::File;
    use tempfile::tempdir;

    /// Teller over the standard sample data, the state the binary starts in
    fn seeded_teller() -> Teller {
        let mut ledger = Ledger::new("ATM Simulation Bank");
        seed_sample_data(&mut ledger);
        Teller::new(ledger, Policy::default())
    }

    #[test]
    fn customer_session_deposit_withdraw_and_history() {
        let mut teller = seeded_teller();

        assert!(teller.authenticate_customer("123456789", "1234"));
        assert_eq!(teller.balance("123456789").unwrap(), dec!(5000));

        let after_deposit = teller.deposit("123456789", dec!(1500)).unwrap();
        assert_eq!(after_deposit, dec!(6500));

        let after_withdrawal = teller.withdraw("123456789", dec!(200), None).unwrap();
        assert_eq!(after_withdrawal, dec!(6300));

        let kinds: Vec<TransactionKind> = teller
            .history("123456789")
            .unwrap()
            .iter()
            .map(|entry| entry.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::AccountCreated,
                TransactionKind::BalanceInquiry,
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
            ]
        );

        let last = teller.history("123456789").unwrap().last().cloned().unwrap();
        assert_eq!(last.amount, dec!(-200));
        assert_eq!(last.balance, dec!(6300));
    }

    #[test]
    fn transfer_session_moves_funds_and_conserves_total() {
        let mut teller = seeded_teller();
        let before = teller.statistics().total_balance;

        assert!(teller.authenticate_customer("123456789", "1234"));
        let sender_balance = teller
            .transfer("123456789", "987654321", dec!(750), "1234")
            .unwrap();
        assert_eq!(sender_balance, dec!(4250));
        assert_eq!(
            teller.find_account("987654321").unwrap().balance(),
            dec!(3250)
        );
        assert_eq!(teller.statistics().total_balance, before);

        // Both sides carry the raw movement plus the transfer marker.
        let sender_last = teller.history("123456789").unwrap().last().cloned().unwrap();
        assert_eq!(sender_last.kind, TransactionKind::TransferOut);
        assert_eq!(sender_last.amount, dec!(-750));
        let recipient_last = teller.history("987654321").unwrap().last().cloned().unwrap();
        assert_eq!(recipient_last.kind, TransactionKind::TransferIn);
        assert_eq!(recipient_last.amount, dec!(750));
    }

    #[test]
    fn failed_transfer_leaves_both_accounts_untouched() {
        let mut teller = seeded_teller();

        let result = teller.transfer("444555666", "123456789", dec!(99_999), "2222");
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InsufficientFunds { .. }
        ));

        assert_eq!(teller.find_account("444555666").unwrap().balance(), dec!(3500));
        assert_eq!(teller.find_account("123456789").unwrap().balance(), dec!(5000));
        assert_eq!(teller.history("444555666").unwrap().len(), 1);
        assert_eq!(teller.history("123456789").unwrap().len(), 1);
    }

    #[test]
    fn official_session_creates_blocks_and_unblocks_an_account() {
        let mut teller = seeded_teller();

        assert!(teller.authenticate_official("OFF001", "admin123"));
        teller
            .create_account("777888999", "Carol Danvers", "4321", dec!(1200))
            .unwrap();
        assert_eq!(teller.statistics().total_accounts, 6);

        // Customer can use the fresh account right away.
        assert!(teller.authenticate_customer("777888999", "4321"));
        teller.deposit("777888999", dec!(300)).unwrap();

        // Blocking stops transactions but not logins or history access.
        teller.set_account_active("777888999", false).unwrap();
        assert!(teller.authenticate_customer("777888999", "4321"));
        assert!(matches!(
            teller.withdraw("777888999", dec!(50), None).unwrap_err(),
            LedgerError::AccountInactive { .. }
        ));
        assert_eq!(teller.history("777888999").unwrap().len(), 2);

        teller.set_account_active("777888999", true).unwrap();
        assert_eq!(teller.withdraw("777888999", dec!(50), None).unwrap(), dec!(1450));
    }

    #[test]
    fn pin_change_takes_effect_on_next_login() {
        let mut teller = seeded_teller();

        assert!(teller.authenticate_customer("987654321", "5678"));
        teller.change_pin("987654321", "5678", "8765").unwrap();

        assert!(!teller.authenticate_customer("987654321", "5678"));
        assert!(teller.authenticate_customer("987654321", "8765"));

        // Withdrawals above the confirmation threshold use the new PIN too.
        teller.deposit("987654321", dec!(20_000)).unwrap();
        assert_eq!(
            teller
                .withdraw("987654321", dec!(12_000), Some("5678"))
                .unwrap_err(),
            LedgerError::AuthenticationFailed
        );
        assert!(teller
            .withdraw("987654321", dec!(12_000), Some("8765"))
            .is_ok());
    }

    #[test]
    fn empty_ledger_reports_statistics_without_average() {
        let teller = Teller::new(Ledger::new("Empty Bank"), Policy::default());
        let stats = teller.statistics();

        assert_eq!(stats.total_accounts, 0);
        assert_eq!(stats.total_officials, 0);
        assert_eq!(stats.total_balance, dec!(0));
        assert_eq!(stats.average_balance, None);
        assert!(teller.list_accounts().is_empty());
        assert!(teller.transaction_log().is_empty());
    }

    #[test]
    fn official_manages_other_officials() {
        let mut teller = seeded_teller();
        assert!(teller.authenticate_official("OFF003", "super789"));

        teller
            .add_official("OFF004", "new-pass", Role::Staff, "Dana Teller")
            .unwrap();
        assert_eq!(teller.officials().len(), 4);
        assert!(teller.authenticate_official("OFF004", "new-pass"));

        teller.remove_official("OFF002").unwrap();
        assert!(!teller.authenticate_official("OFF002", "staff456"));
        assert_eq!(teller.statistics().total_officials, 3);
    }

    #[test]
    fn exported_account_listing_reflects_session_activity() {
        let mut teller = seeded_teller();
        teller.deposit("444555666", dec!(500)).unwrap();
        teller.set_account_active("987654321", false).unwrap();

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("accounts.csv");
        let mut file = File::create(&path).expect("Failed to create report file");
        write_accounts_csv(&teller.list_accounts(), &mut file).unwrap();

        let text = fs::read_to_string(&path).expect("Failed to read report file");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "account,holder,balance,status");
        assert_eq!(lines.len(), 6); // header + five seeded accounts
        assert!(lines.contains(&"444555666,Bob Wilson,4000.00,Active"));
        assert!(lines.contains(&"987654321,John Doe,2500.00,Blocked"));
    }
}
