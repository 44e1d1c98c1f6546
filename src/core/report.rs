use crate::core::diet_plan::request_diet_plan;
use crate::core::{metrics, symptoms};
use crate::domain::model::{HealthReport, UserProfile};
use crate::domain::ports::{DietPlanner, Storage};
use crate::utils::error::Result;

pub const EXPORT_FILENAME: &str = "PCOD_Diet_Plan.txt";
pub const EXPORT_MIME_TYPE: &str = "text/plain";

pub const OPENING_DISCLAIMER: &str = "⚠️ Disclaimer: This report is for informational purposes only and is not a substitute for professional medical advice. Always consult with a healthcare professional.";
pub const FINAL_DISCLAIMER: &str = "This report is for general guidance only. It is not a substitute for professional medical advice, diagnosis, or treatment. If you have underlying health conditions such as diabetes, thyroid issues, or other concerns, please consult a qualified healthcare professional before following any of these suggestions.";

const BMI_INFO: &str = "BMI or Body Mass Index is a quick way to check if your weight is healthy for your height. It's a screening tool that helps doctors see if you are in a healthy, underweight, or overweight range.";
const BROCA_INFO: &str = "Broca's Index is a very simple formula to estimate your ideal body weight in kilograms, based only on your height in centimeters.";
const DIET_PLAN_INFO: &str = "This diet plan is AI-generated and for informational purposes only. Consult with a professional before making any significant changes to your diet.";

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub report: HealthReport,
    pub export_path: Option<String>,
}

pub struct ReportEngine<P: DietPlanner, S: Storage> {
    planner: P,
    storage: S,
    export_enabled: bool,
}

impl<P: DietPlanner, S: Storage> ReportEngine<P, S> {
    pub fn new(planner: P, storage: S) -> Self {
        Self {
            planner,
            storage,
            export_enabled: true,
        }
    }

    pub fn with_export(mut self, enabled: bool) -> Self {
        self.export_enabled = enabled;
        self
    }

    /// Metrics, likelihood and diet plan, in that order. Never fails: a diet
    /// plan error is folded into `diet_plan_text`.
    pub async fn build_report(&self, profile: &UserProfile) -> HealthReport {
        let next_period_date = metrics::next_period_date(profile.last_period_date, profile.cycle_length_days);
        let likelihood = symptoms::likelihood(&profile.selected_symptoms);
        let bmi = metrics::bmi(profile.height_cm, profile.weight_kg);
        let bmi_category = metrics::bmi_category(bmi);
        let ideal_weight_kg = metrics::ideal_weight_kg(profile.height_cm);

        tracing::debug!(
            "Metrics: next period {}, BMI {:.2} ({:?}), ideal weight {} kg, likelihood {:?}",
            next_period_date,
            bmi,
            bmi_category,
            ideal_weight_kg,
            likelihood
        );

        tracing::info!("🍏 Generating personalized diet plan...");
        let diet_plan_text = request_diet_plan(&self.planner, profile, ideal_weight_kg).await;

        HealthReport {
            next_period_date,
            likelihood,
            bmi: metrics::round_to_2dp(bmi),
            bmi_category,
            ideal_weight_kg,
            diet_plan_text,
        }
    }

    /// Writes the diet plan as plain text. Skipped when the text is empty.
    pub async fn export_diet_plan(&self, report: &HealthReport) -> Result<Option<String>> {
        if report.diet_plan_text.is_empty() {
            tracing::debug!("Diet plan text is empty, nothing to export");
            return Ok(None);
        }

        let path = self
            .storage
            .write_file(EXPORT_FILENAME, report.diet_plan_text.as_bytes())
            .await?;
        tracing::debug!("Exported diet plan ({}) to {}", EXPORT_MIME_TYPE, path);
        Ok(Some(path))
    }

    pub async fn run(&self, profile: &UserProfile) -> Result<ReportOutcome> {
        tracing::info!("📝 Building health report");
        let report = self.build_report(profile).await;

        let export_path = if self.export_enabled {
            self.export_diet_plan(&report).await?
        } else {
            None
        };

        Ok(ReportOutcome { report, export_path })
    }
}

pub fn render_text(report: &HealthReport) -> String {
    format!(
        "{opening}

📝 Your Personalized Health Report
{rule}

Next Period Prediction
Based on your last period and cycle length, your next period is expected on: **{next_period}**

PCOD/PCOS Likelihood
{likelihood}

Body Metrics
Your BMI is: **{bmi:.2}**
{bmi_info}
BMI Status: {bmi_status}
Your ideal weight is approximately **{ideal} kg**.
{broca_info}

Personalized Diet Plan
{plan_info}

{plan}

Important Final Disclaimer
{final_disclaimer}
",
        opening = OPENING_DISCLAIMER,
        rule = "=".repeat(34),
        next_period = report.next_period_date.format("%B %d, %Y"),
        likelihood = symptoms::likelihood_sentence(report.likelihood),
        bmi = report.bmi,
        bmi_info = BMI_INFO,
        bmi_status = report.bmi_category.label(),
        ideal = report.ideal_weight_kg,
        broca_info = BROCA_INFO,
        plan_info = DIET_PLAN_INFO,
        plan = report.diet_plan_text,
        final_disclaimer = FINAL_DISCLAIMER,
    )
}
