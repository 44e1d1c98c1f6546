use clap::Parser;
use nourish_flow::core::ConfigProvider;
use nourish_flow::utils::error::ErrorSeverity;
use nourish_flow::utils::{logger, validation::Validate};
use nourish_flow::{render_text, GeminiDietPlanner, LocalStorage, ReportEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Health report driven by a TOML profile file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "report.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override export setting from config
    #[arg(long)]
    export: Option<bool>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger_with_level(config.log_level(), args.verbose);
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(export) = args.export {
        config.export.enabled = export;
        tracing::info!("🔧 Export overridden to: {}", export);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let planner = GeminiDietPlanner::from_config(&config);
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = ReportEngine::new(planner, storage).with_export(config.export_enabled());

    match engine.run(&config.profile).await {
        Ok(outcome) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome.report)?);
            } else {
                print!("{}", render_text(&outcome.report));
            }
            if let Some(path) = outcome.export_path {
                tracing::info!("📁 Diet plan saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
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
