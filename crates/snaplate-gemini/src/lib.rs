use snaplate_types::EncodedImage;

mod client;
mod error;
pub mod prompts;

pub use client::GeminiClient;
pub use error::{GeminiError, OcrError, TranslateError};

/// Remote inference seam. One implementation talks to Gemini; tests plug
/// in their own.
#[async_trait::async_trait]
pub trait Engine: Send + Sync {
    /// All visible text in the image, trimmed, or the exact
    /// `NO_TEXT_FOUND` sentinel.
    async fn extract_text(&self, image: &EncodedImage) -> Result<String, OcrError>;

    /// `text` rendered in the target language (human-readable name, not a
    /// code), trimmed, with no commentary.
    async fn translate(&self, text: &str, target_language: &str)
    -> Result<String, TranslateError>;
}
