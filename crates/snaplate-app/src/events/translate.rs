use snaplate_core::SessionEvent;
use snaplate_gemini::Engine;

pub const TRANSLATE_FAILED_MESSAGE: &str = "Translation failed. Please try again.";

/// Run one translation call and fold the outcome into a session event.
pub async fn run_translate(
    engine: &dyn Engine,
    text: &str,
    language_name: &str,
) -> SessionEvent {
    match engine.translate(text, language_name).await {
        Ok(translated) => {
            tracing::debug!(chars = translated.len(), "translation finished");
            SessionEvent::TranslationSucceeded(translated)
        }
        Err(e) => {
            tracing::warn!("translation call failed: {e}");
            SessionEvent::TranslationFailed(TRANSLATE_FAILED_MESSAGE.to_string())
        }
    }
}
