use crate::domain::model::UserProfile;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn export_enabled(&self) -> bool;
}

/// Source of the free-text diet plan. `Err` means no plan could be produced;
/// the caller decides what to show instead.
#[async_trait]
pub trait DietPlanner: Send + Sync {
    async fn request(&self, profile: &UserProfile, ideal_weight_kg: f64) -> Result<String>;
}
