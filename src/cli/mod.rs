//! Command-line interface.
//!
//! The surface is deliberately tiny: `envsure` takes no subcommands and no
//! behavioral flags. Running it executes the reconciliation pipeline once
//! against `.env` in the current directory; clap still provides
//! `--help`/`--version`.

use clap::Parser;

/// envsure - Interactive .env reconciliation for project setup.
///
/// Ensures the .env file in the current directory contains every required
/// key, prompting for any missing values and writing the merged result back.
#[derive(Debug, Parser)]
#[command(name = "envsure")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_arguments() {
        Cli::parse_from(["envsure"]);
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["envsure", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["envsure", "extra"]).is_err());
    }
}
