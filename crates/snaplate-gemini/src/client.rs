use serde::Serialize;
use snaplate_config::gemini::GeminiConfig;
use snaplate_types::EncodedImage;

use crate::error::{GeminiError, OcrError, TranslateError};
use crate::prompts;
use crate::Engine;

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    async fn generate(&self, parts: Vec<Part>) -> Result<String, GeminiError> {
        if self.api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeminiError::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(GeminiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(GeminiError::Api(status));
        }

        let json: serde_json::Value = response.json().await?;
        completion_text(&json).ok_or(GeminiError::EmptyResponse)
    }
}

#[async_trait::async_trait]
impl Engine for GeminiClient {
    async fn extract_text(&self, image: &EncodedImage) -> Result<String, OcrError> {
        let parts = vec![Part::inline_data(image), Part::text(prompts::ocr_instruction())];
        self.generate(parts).await.map_err(OcrError::from)
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let prompt = prompts::translation_prompt(text, target_language);
        self.generate(vec![Part::text(prompt)])
            .await
            .map_err(TranslateError::from)
    }
}

/// Trimmed concatenation of the first candidate's text parts, None when
/// the reply carries no usable text.
fn completion_text(json: &serde_json::Value) -> Option<String> {
    let parts = json["candidates"].get(0)?["content"]["parts"].as_array()?;
    let mut text = String::new();
    for part in parts {
        if let Some(chunk) = part["text"].as_str() {
            text.push_str(chunk);
        }
    }
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: String) -> Self {
        Part {
            text: Some(text),
            inline_data: None,
        }
    }

    fn inline_data(image: &EncodedImage) -> Self {
        Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            }),
        }
    }
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}
