use crate::domain::model::UserProfile;
use crate::domain::ports::{ConfigProvider, DietPlanner};
use crate::utils::error::{HealthError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Value shipped in sample configs; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY";

pub const MISSING_API_KEY_MESSAGE: &str =
    "⚠️ **API Key Missing:** Please set your API key to generate a diet chart.";
pub const NO_PLAN_MESSAGE: &str = "Could not generate a diet plan. Please try again.";

// generateContent 請求/回應格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

// `"candidates": null` 與缺欄位同樣視為空
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
        }
    }
}

/// `candidates[0].content.parts[0].text`
pub fn extract_plan_text(response: &GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| HealthError::MalformedResponse {
            reason: "response contained no candidates".to_string(),
        })?;

    candidate
        .content
        .as_ref()
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.clone())
        .ok_or_else(|| HealthError::MalformedResponse {
            reason: "first candidate has no text part".to_string(),
        })
}

pub fn build_prompt(profile: &UserProfile, ideal_weight_kg: f64) -> String {
    let allergies = if profile.allergies.trim().is_empty() {
        "None"
    } else {
        profile.allergies.trim()
    };

    format!(
        "You are a highly knowledgeable nutritionist specializing in PCOD/PCOS.
A user needs a personalized diet chart based on their information.

Here are the user's details:
- Current Weight: {weight} kg
- Ideal Weight (Broca's Index): {ideal} kg
- Dietary Preference: {preference}
- PCOD/PCOS Severity: {severity}
- Food Allergies/Aversions: {allergies}

Based on these details, please provide a comprehensive and detailed one-week diet chart.
The chart should include meal suggestions for breakfast, lunch, dinner, and snacks.
The diet should be tailored for a person with {severity} PCOD/PCOS.
Mention key dietary principles like low-GI foods, adequate protein, and healthy fats.
The plan should be easy to follow, use ingredients that are easily available in the Indian market and should not require complex ingredients.
Provide a friendly, encouraging opening and closing statement.
",
        weight = profile.weight_kg,
        ideal = ideal_weight_kg,
        preference = profile.diet_preference,
        severity = profile.severity,
        allergies = allergies,
    )
}

pub struct GeminiDietPlanner {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiDietPlanner {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint(), config.api_key().map(str::to_string))
    }

    fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

/// reqwest 錯誤訊息會帶完整 URL，其中含 `?key=`
fn redact(error: reqwest::Error) -> HealthError {
    HealthError::ApiError(error.without_url())
}

#[async_trait::async_trait]
impl DietPlanner for GeminiDietPlanner {
    async fn request(&self, profile: &UserProfile, ideal_weight_kg: f64) -> Result<String> {
        let api_key = self.usable_api_key().ok_or(HealthError::MissingApiKey)?;

        let payload = GenerateContentRequest::from_prompt(build_prompt(profile, ideal_weight_kg));

        tracing::debug!("Requesting diet plan from: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        tracing::debug!("Diet plan API response status: {}", status);

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Could not read error response body: {}", redact(e));
                    String::new()
                }
            };
            return Err(HealthError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(redact)?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&body)?;
        extract_plan_text(&parsed)
    }
}

/// Display string for a diet plan attempt. Failures never abort the report.
pub fn diet_plan_text(result: Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(HealthError::MissingApiKey) => {
            tracing::warn!("⚠️ API key not configured, skipping diet plan request");
            MISSING_API_KEY_MESSAGE.to_string()
        }
        Err(HealthError::MalformedResponse { reason }) => {
            tracing::warn!("Diet plan response unusable: {}", reason);
            NO_PLAN_MESSAGE.to_string()
        }
        Err(e) => {
            tracing::error!("❌ Diet plan request failed: {}", e);
            format!("An error occurred while calling the API: {}", e)
        }
    }
}

pub async fn request_diet_plan<P: DietPlanner + ?Sized>(
    planner: &P,
    profile: &UserProfile,
    ideal_weight_kg: f64,
) -> String {
    diet_plan_text(planner.request(profile, ideal_weight_kg).await)
}
