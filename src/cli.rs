//! Command-line interface

use clap::{Parser, Subcommand};

/// Create assets in the portfolio service
#[derive(Debug, Parser)]
#[command(name = "asset-tui")]
#[command(about = "Terminal form for creating portfolio assets", long_about = None)]
pub struct Cli {
    /// Base address of the asset service (overrides ASSET_SERVICE_URL and the config file)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Run a single command instead of the interactive form
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create one asset without opening the form
    Create {
        /// Asset name
        #[arg(long)]
        name: String,

        /// Price, parsed as a decimal number
        #[arg(long, allow_hyphen_values = true)]
        price: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_args_starts_tui() {
        let cli = Cli::try_parse_from(["asset-tui"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.service_url.is_none());
    }

    #[test]
    fn test_create_subcommand() {
        let cli = Cli::try_parse_from([
            "asset-tui",
            "create",
            "--name",
            "Gold Bar",
            "--price",
            "-12.5",
            "--service-url",
            "http://localhost:9000",
        ])
        .unwrap();

        assert_eq!(cli.service_url.as_deref(), Some("http://localhost:9000"));
        match cli.command {
            Some(Commands::Create { name, price }) => {
                assert_eq!(name, "Gold Bar");
                assert_eq!(price, "-12.5");
            }
            None => panic!("expected create command"),
        }
    }

    #[test]
    fn test_create_requires_name() {
        assert!(Cli::try_parse_from(["asset-tui", "create", "--price", "1"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
