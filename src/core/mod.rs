pub mod diet_plan;
pub mod metrics;
pub mod report;
pub mod symptoms;

pub use crate::domain::model::{HealthReport, UserProfile};
pub use crate::domain::ports::{ConfigProvider, DietPlanner, Storage};
pub use crate::utils::error::Result;
