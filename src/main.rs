use aws_howto::app::commands;
use aws_howto::utils::{logger, validation::Validate};
use aws_howto::{CliConfig, Settings, SnippetError};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, exit code {})",
            e,
            e.category(),
            e.exit_code()
        );
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<(), SnippetError> {
    // File settings first, then command-line overrides
    let settings = Settings::load(config.config_file.as_deref())?.with_overrides(
        config.region,
        config.profile,
        config.endpoint_url,
    );
    settings.validate()?;

    let sdk_config = aws_howto::aws::load_sdk_config(&settings.aws).await;
    tracing::debug!(region = ?sdk_config.region(), "loaded AWS config");

    commands::run(config.command, &sdk_config, &settings).await
}
