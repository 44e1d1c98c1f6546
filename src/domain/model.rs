use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// PCOD/PCOS symptom checklist, fixed at seven entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Symptom {
    IrregularPeriods,
    Hirsutism,
    Acne,
    WeightGain,
    HairThinning,
    AcanthosisNigricans,
    Infertility,
}

impl Symptom {
    pub const ALL: [Symptom; 7] = [
        Symptom::IrregularPeriods,
        Symptom::Hirsutism,
        Symptom::Acne,
        Symptom::WeightGain,
        Symptom::HairThinning,
        Symptom::AcanthosisNigricans,
        Symptom::Infertility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::IrregularPeriods => "Irregular or infrequent periods",
            Symptom::Hirsutism => "Excess facial or body hair (hirsutism)",
            Symptom::Acne => "Acne on the face, chest, or upper back",
            Symptom::WeightGain => "Weight gain, especially around the abdomen",
            Symptom::HairThinning => "Thinning hair on the scalp",
            Symptom::AcanthosisNigricans => {
                "Darkening of skin around the neck, groin, or under breasts (acanthosis nigricans)"
            }
            Symptom::Infertility => "Difficulty getting pregnant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    #[default]
    Vegetarian,
    NonVegetarian,
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietPreference::Vegetarian => write!(f, "Vegetarian"),
            DietPreference::NonVegetarian => write!(f, "Non-Vegetarian"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    #[default]
    Mild,
    Moderate,
    Severe,
    Unsure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Unsure => "Unsure",
        };
        f.write_str(label)
    }
}

/// One form submission. Numeric bounds are checked by the input layer
/// (`Validate`), the calculators assume them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub last_period_date: NaiveDate,
    pub cycle_length_days: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub diet_preference: DietPreference,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub selected_symptoms: BTreeSet<Symptom>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Likelihood {
    pub fn label(&self) -> &'static str {
        match self {
            Likelihood::Low => "low",
            Likelihood::Moderate => "moderate",
            Likelihood::High => "high",
            Likelihood::VeryHigh => "very high",
        }
    }

    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Likelihood::VeryHigh => Some("Please consult a doctor."),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub next_period_date: NaiveDate,
    pub likelihood: Likelihood,
    /// Rounded to two decimals; `bmi_category` was decided on the unrounded value.
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub ideal_weight_kg: f64,
    pub diet_plan_text: String,
}
