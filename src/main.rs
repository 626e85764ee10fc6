use anyhow::Context;
use clap::Parser;
use petstore_console::utils::logger;
use petstore_console::{CliConfig, Console, PetCatalog, ReqwestSource};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證並合併設定
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    match (&settings.log_level, config.verbose) {
        (Some(level), false) => logger::init_cli_logger_with_level(level),
        _ => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting petstore-console");
    tracing::debug!("Resolved settings: {:?}", settings);

    let source = ReqwestSource::from_settings(&settings).context("failed to build HTTP client")?;
    let catalog = PetCatalog::new(source, &settings).context("failed to resolve catalog endpoint")?;
    tracing::info!("Using catalog endpoint {}", catalog.endpoint());

    let mut console = Console::new(
        catalog,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    console.run().await.context("console stopped unexpectedly")?;

    Ok(())
}
