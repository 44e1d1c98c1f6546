pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, OutputFormat};

pub use crate::core::diet_plan::GeminiDietPlanner;
pub use crate::core::report::{render_text, ReportEngine, ReportOutcome};
pub use domain::model::{HealthReport, UserProfile};
pub use utils::error::{HealthError, Result};
