//! Bank Ledger CLI
//!
//! Interactive console front end for the bank ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bank-name "First National"
//! cargo run -- --no-seed
//! ```
//!
//! The program seeds a set of sample accounts and officials (unless
//! `--no-seed` is given) and then runs the login menu until the user exits.
//! Log verbosity is controlled through the `RUST_LOG` environment variable.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (terminal I/O failure)

use bank_ledger::core::{Ledger, Policy, Teller};
use bank_ledger::{cli, ui};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let mut ledger = Ledger::new(args.bank_name);
    if !args.no_seed {
        ui::seed_sample_data(&mut ledger);
    }

    let mut teller = Teller::new(ledger, Policy::default());
    if let Err(e) = ui::run(&mut teller) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
