use clap::Parser;
use comic_storefront::adapters::router::LoggingRouter;
use comic_storefront::config::Command;
use comic_storefront::utils::error::{ErrorSeverity, StorefrontError};
use comic_storefront::utils::logger;
use comic_storefront::{api, BuyNowNavigator, CliConfig, HttpComicService, StorefrontConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting comic-storefront");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let outcome = match &cli.command {
        Command::Serve { .. } => api::serve(&config).await,
        Command::BuyNow { comic_id, .. } => buy_now(&config, *comic_id).await,
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn buy_now(config: &StorefrontConfig, comic_id: u64) -> Result<(), StorefrontError> {
    let lookup = HttpComicService::from_config(config)?;
    let navigator = BuyNowNavigator::new(lookup, LoggingRouter);

    let route = navigator.activate(comic_id).await?;
    println!("{}", route);
    Ok(())
}
