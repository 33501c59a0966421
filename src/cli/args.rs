use clap::Parser;

/// Interactive bank ledger simulation with customer and official sessions
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "In-memory bank ledger driven by a text menu", long_about = None)]
pub struct CliArgs {
    /// Display name of the bank
    #[arg(
        long = "bank-name",
        value_name = "NAME",
        default_value = "ATM Simulation Bank",
        help = "Display name shown in menus and reports"
    )]
    pub bank_name: String,

    /// Start with an empty ledger instead of the sample accounts and officials
    #[arg(long = "no-seed", help = "Skip seeding the sample accounts and officials")]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["program"], "ATM Simulation Bank", false)]
    #[case::custom_name(&["program", "--bank-name", "First National"], "First National", false)]
    #[case::no_seed(&["program", "--no-seed"], "ATM Simulation Bank", true)]
    #[case::both(&["program", "--bank-name", "Acme", "--no-seed"], "Acme", true)]
    fn argument_parsing(#[case] args: &[&str], #[case] name: &str, #[case] no_seed: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.bank_name, name);
        assert_eq!(parsed.no_seed, no_seed);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(CliArgs::try_parse_from(["program", "--bogus"]).is_err());
    }
}
