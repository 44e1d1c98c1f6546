pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::diet_plan::DEFAULT_ENDPOINT;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{DietPreference, Severity, Symptom, UserProfile};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Clone, Parser)]
#[command(name = "nourish-flow")]
#[command(about = "Cycle tracker, PCOD/PCOS symptom check and personalized diet chart")]
pub struct CliConfig {
    /// Start date of the last period (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub last_period: Option<NaiveDate>,

    /// Average cycle length in days (21-35)
    #[arg(long, default_value = "28")]
    pub cycle_length: u32,

    /// Height in cm (50-250)
    #[arg(long, default_value = "160")]
    pub height: f64,

    /// Current weight in kg (20-200)
    #[arg(long, default_value = "60")]
    pub weight: f64,

    #[arg(long, value_enum, default_value_t = DietPreference::Vegetarian)]
    pub diet: DietPreference,

    /// Food allergies or aversions, e.g. "dairy, nuts, gluten"
    #[arg(long, default_value = "")]
    pub allergies: String,

    #[arg(long, value_enum, default_value_t = Severity::Mild)]
    pub severity: Severity,

    /// Comma separated symptom keys
    #[arg(long, value_enum, value_delimiter = ',')]
    pub symptoms: Vec<Symptom>,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip writing PCOD_Diet_Plan.txt
    #[arg(long)]
    pub no_export: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            last_period_date: self
                .last_period
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            cycle_length_days: self.cycle_length,
            height_cm: self.height,
            weight_kg: self.weight,
            diet_preference: self.diet,
            allergies: self.allergies.clone(),
            severity: self.severity,
            selected_symptoms: self.symptoms.iter().copied().collect(),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn export_enabled(&self) -> bool {
        !self.no_export
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        self.profile().validate()
    }
}
