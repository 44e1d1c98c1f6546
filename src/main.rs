use clap::Parser;
use nourish_flow::core::ConfigProvider;
use nourish_flow::utils::error::ErrorSeverity;
use nourish_flow::utils::{logger, validation::Validate};
use nourish_flow::{
    render_text, CliConfig, GeminiDietPlanner, LocalStorage, OutputFormat, ReportEngine,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting nourish-flow");

    // 驗證輸入
    if let Err(e) = config.validate() {
        tracing::error!("❌ Input validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let profile = config.profile();
    let planner = GeminiDietPlanner::from_config(&config);
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = ReportEngine::new(planner, storage).with_export(config.export_enabled());

    match engine.run(&profile).await {
        Ok(outcome) => {
            match config.format {
                OutputFormat::Text => print!("{}", render_text(&outcome.report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome.report)?),
            }
            if let Some(path) = outcome.export_path {
                tracing::info!("📁 Diet plan saved to: {}", path);
                eprintln!("📁 Diet plan saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

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
    }

    Ok(())
}
