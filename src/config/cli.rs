use crate::config::toml_config::StorefrontConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "Comic storefront checkout API and buy-now tooling")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = "storefront.toml")]
    pub config: PathBuf,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the checkout API server
    Serve {
        /// Override `server.bind` from the config file
        #[arg(long)]
        bind: Option<String>,
    },
    /// Resolve where the buy-now button sends a customer for a comic
    BuyNow {
        #[arg(long)]
        comic_id: u64,

        /// Override `comics.api_base_url` from the config file
        #[arg(long)]
        comics_api: Option<String>,
    },
}

impl CliConfig {
    /// Config file values with command line overrides applied, validated.
    pub fn resolve(&self) -> Result<StorefrontConfig> {
        let mut config = StorefrontConfig::load_or_default(&self.config)?;

        match &self.command {
            Command::Serve { bind: Some(bind) } => {
                tracing::info!("🔧 Bind address overridden to: {}", bind);
                config.server.bind = bind.clone();
            }
            Command::BuyNow {
                comics_api: Some(url),
                ..
            } => {
                tracing::info!("🔧 Comics API overridden to: {}", url);
                config.comics.api_base_url = url.clone();
            }
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_override() {
        let cli = CliConfig::parse_from([
            "storefront",
            "--config",
            "missing.toml",
            "serve",
            "--bind",
            "0.0.0.0:9000",
        ]);

        let config = cli.resolve().unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_parse_buy_now() {
        let cli = CliConfig::parse_from([
            "storefront",
            "buy-now",
            "--comic-id",
            "82967",
            "--comics-api",
            "http://localhost:4000/api",
            "--verbose",
        ]);

        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::BuyNow { comic_id: 82967, .. }));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = CliConfig::parse_from([
            "storefront",
            "--config",
            "missing.toml",
            "buy-now",
            "--comic-id",
            "1",
            "--comics-api",
            "not a url",
        ]);

        assert!(cli.resolve().is_err());
    }
}
