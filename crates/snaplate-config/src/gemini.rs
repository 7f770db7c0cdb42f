use std::env;

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiConfig {
    /// API credential. May be empty; calls fail with an auth error then,
    /// the app itself still starts.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl GeminiConfig {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .unwrap_or_default();

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model());

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| default_api_url());

        GeminiConfig {
            api_key,
            model,
            api_url,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_url: default_api_url(),
        }
    }
}
