use snaplate_core::SessionEvent;
use snaplate_gemini::Engine;
use snaplate_types::EncodedImage;

pub const EXTRACT_FAILED_MESSAGE: &str = "Failed to extract text. Please try another image.";

/// Run one OCR call and fold the outcome into a session event. Raw error
/// detail stays in the log; the session only sees the short message.
pub async fn run_extract(engine: &dyn Engine, image: &EncodedImage) -> SessionEvent {
    match engine.extract_text(image).await {
        Ok(text) => {
            tracing::debug!(chars = text.len(), "OCR finished");
            SessionEvent::OcrSucceeded(text)
        }
        Err(e) => {
            tracing::warn!("OCR call failed: {e}");
            SessionEvent::OcrFailed(EXTRACT_FAILED_MESSAGE.to_string())
        }
    }
}
