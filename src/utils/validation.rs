use crate::domain::model::UserProfile;
use crate::utils::error::{HealthError, Result};
use url::Url;

pub const CYCLE_LENGTH_DAYS: (u32, u32) = (21, 35);
pub const HEIGHT_CM: (f64, f64) = (50.0, 250.0);
pub const WEIGHT_KG: (f64, f64) = (20.0, 200.0);

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HealthError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HealthError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HealthError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HealthError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HealthError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HealthError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Inclusive range check used for the profile form bounds.
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HealthError::ValidationError {
            message: format!("{} must be between {} and {} (got {})", field_name, min, max, value),
        });
    }
    Ok(())
}

impl Validate for UserProfile {
    fn validate(&self) -> Result<()> {
        validate_range(
            "cycle_length_days",
            self.cycle_length_days,
            CYCLE_LENGTH_DAYS.0,
            CYCLE_LENGTH_DAYS.1,
        )?;
        validate_range("height_cm", self.height_cm, HEIGHT_CM.0, HEIGHT_CM.1)?;
        validate_range("weight_kg", self.weight_kg, WEIGHT_KG.0, WEIGHT_KG.1)?;
        // NaN 會通過上面的比較
        if !self.height_cm.is_finite() || !self.weight_kg.is_finite() {
            return Err(HealthError::ValidationError {
                message: "height and weight must be finite numbers".to_string(),
            });
        }
        Ok(())
    }
}
