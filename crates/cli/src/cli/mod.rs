use std::io;

use clap::{Parser, Subcommand};
use storefront::api::{ApiConfig, HttpStorefrontApi};

use crate::config::{ApiArgs, LoggingConfig};

mod orders;
mod products;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    api: ApiArgs,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and manage the product catalog
    Products(products::ProductsCommand),

    /// Place orders and browse order history
    Orders(orders::OrdersCommand),
}

impl Cli {
    /// Load configuration from `.env`, the environment, and arguments.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let config = ApiConfig::new(self.api.api_url).map_err(|error| error.to_string())?;
        let api = HttpStorefrontApi::new(config);
        let mut out = io::stdout().lock();

        match self.command {
            Commands::Products(command) => products::run(command, &api, &mut out).await,
            Commands::Orders(command) => orders::run(command, &api, &mut out).await,
        }
    }
}

fn write_failed(error: &io::Error) -> String {
    format!("failed to write output: {error}")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use crate::config::LogFormat;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_api_url_and_logging_flags() -> TestResult {
        let cli = Cli::try_parse_from([
            "storefront",
            "--api-url",
            "http://localhost:5000",
            "--log-format",
            "json",
            "products",
            "list",
        ])?;

        assert_eq!(cli.api.api_url, "http://localhost:5000");
        assert_eq!(cli.logging.log_format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn rejects_zero_quantity() {
        let result = Cli::try_parse_from([
            "storefront",
            "--api-url",
            "http://localhost:5000",
            "orders",
            "place",
            "--product",
            "1",
            "--quantity",
            "0",
        ]);

        assert!(result.is_err(), "zero quantity should not parse");
    }

    #[test]
    fn accepts_negative_stock_on_create_and_update() -> TestResult {
        Cli::try_parse_from([
            "storefront",
            "--api-url",
            "http://localhost:5000",
            "products",
            "create",
            "--name",
            "Pen",
            "--price",
            "2",
            "--stock",
            "-3",
        ])?;

        Cli::try_parse_from([
            "storefront",
            "--api-url",
            "http://localhost:5000",
            "products",
            "update",
            "1",
            "--stock",
            "-3",
        ])?;

        Ok(())
    }
}
