use std::env;

use serde::{Deserialize, Serialize};

fn default_target_lang() -> String {
    "es".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslateConfig {
    /// ISO 639-1 code the language selector starts on.
    #[serde(default = "default_target_lang")]
    pub default_target_lang: String,
}

impl TranslateConfig {
    pub fn new() -> Self {
        let default_target_lang =
            env::var("TARGET_LANG").unwrap_or_else(|_| default_target_lang());

        TranslateConfig {
            default_target_lang,
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            default_target_lang: default_target_lang(),
        }
    }
}
