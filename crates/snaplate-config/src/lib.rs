use serde::{Deserialize, Serialize};

use self::gemini::GeminiConfig;
use self::translate::TranslateConfig;
use self::ui::UiConfig;

pub mod gemini;
pub mod translate;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub ui: UiConfig,
    pub translate: TranslateConfig,
}

impl Config {
    /// Build a config from the process environment, falling back to
    /// defaults for anything unset.
    pub fn new() -> Self {
        Config {
            gemini: GeminiConfig::new(),
            ui: UiConfig::new(),
            translate: TranslateConfig::new(),
        }
    }
}
