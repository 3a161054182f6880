/// Gemini text-generation provider
///
/// Single synchronous-per-request call to the `generateContent` endpoint.
/// Failures surface as typed errors; no error text is ever returned as if it
/// were a model response.
use crate::{
    error::{AppError, AppResult},
    services::providers::RecommendationModel,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidate {
    #[serde(default)]
    content: ApiContent,
}

#[derive(Debug, Default, Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Debug, Deserialize)]
struct ApiPart {
    #[serde(default)]
    text: String,
}

#[derive(Clone)]
pub struct GeminiModel {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiModel {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
            model,
        }
    }
}

#[async_trait::async_trait]
impl RecommendationModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        let response = self
            .http_client
            .post(&url)
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }]
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Gemini returned status {}: {}",
                status, body
            )));
        }

        let generated: GenerateContentResponse = response.json().await?;
        let text = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                AppError::ExternalApi("Gemini response contained no text".to_string())
            })?;

        tracing::info!(
            model = %self.model,
            response_chars = text.len(),
            provider = "gemini",
            "Recommendation text generated"
        );

        Ok(text)
    }
}
