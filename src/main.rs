use anyhow::Context;
use clap::Parser;
use trip_itinerary::utils::error::ErrorSeverity;
use trip_itinerary::utils::{
    logger,
    validation::{validate_location, validate_radius, Validate},
};
use trip_itinerary::{build_itinerary, CliConfig, ItineraryError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.config.as_ref() {
        Some(path) => TomlConfig::from_file(path),
        None => TomlConfig::from_env(),
    };

    // 日誌格式可能來自設定檔，所以在載入配置之後才初始化
    let json_logs = cli.json_logs
        || config
            .as_ref()
            .map(|config| config.log_format_is_json())
            .unwrap_or(false);
    if json_logs {
        let level = config
            .as_ref()
            .ok()
            .and_then(|config| config.logging.as_ref())
            .and_then(|logging| logging.level.clone());
        logger::init_json_logger(level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting trip-itinerary CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = config.unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let location = validate_location(&cli.location).unwrap_or_else(|e| exit_with(&e));
    let radius = validate_radius(cli.radius).unwrap_or_else(|e| exit_with(&e));

    let itinerary = match build_itinerary(&config, location, radius).await {
        Ok(itinerary) => itinerary,
        Err(e) => exit_with(&e),
    };

    let rendered = serde_json::to_string_pretty(&itinerary)?;
    match cli.output.as_ref() {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write itinerary to {}", path.display()))?;
            tracing::info!("📁 Itinerary saved to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn exit_with(e: &ItineraryError) -> ! {
    tracing::error!(
        "❌ Itinerary build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 3,
        ErrorSeverity::Critical => 4,
    };
    std::process::exit(exit_code);
}
