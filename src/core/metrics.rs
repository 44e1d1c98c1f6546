use crate::domain::model::BmiCategory;
use chrono::{Days, NaiveDate};

pub fn next_period_date(last_period_date: NaiveDate, cycle_length_days: u32) -> NaiveDate {
    last_period_date + Days::new(u64::from(cycle_length_days))
}

/// Full-precision BMI. Round with [`round_to_2dp`] for display only.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `[24.9, 25.0)` is not covered by the Normal or Overweight bands and lands
/// in Obesity. Kept as-is, see DESIGN.md.
#[allow(clippy::manual_range_contains)]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi >= 18.5 && bmi < 24.9 {
        BmiCategory::Normal
    } else if bmi >= 25.0 && bmi < 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

/// Broca's index.
pub fn ideal_weight_kg(height_cm: f64) -> f64 {
    height_cm - 100.0
}
