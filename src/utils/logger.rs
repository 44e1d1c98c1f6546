use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter_for(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match (verbose, level) {
            (true, _) => "nourish_flow=debug,info".to_string(),
            (false, Some(level)) => format!("nourish_flow={}", level),
            (false, None) => "nourish_flow=info".to_string(),
        };
        EnvFilter::new(directive)
    })
}

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with_level(None, verbose);
}

/// `level` 來自 TOML `[logging]`，`verbose` 優先
pub fn init_cli_logger_with_level(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter_for(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter_for(None, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr) // stdout 留給 JSON 報告
                .json(),
        )
        .init();
}
