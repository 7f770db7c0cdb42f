use serde::{Deserialize, Serialize};

/// Exact string the OCR engine returns when the image contains no text.
/// The workflow matches on it verbatim, so the OCR instruction must spell
/// it out letter for letter.
pub const NO_TEXT_SENTINEL: &str = "NO_TEXT_FOUND";

#[derive(Debug, Clone)]
pub enum AppEvent {
    // UI / watcher / CLI intents
    ImagePathSubmitted(String),
    ImageSelected(EncodedImage),
    ImageCleared,
    ExtractRequested,
    TranslateRequested,
    ExtractAndTranslateRequested,
    TargetLanguageChanged(String),
    ResetRequested,
    CopyRequested(TextPane),
    SaveRequested(TextPane),
    // internal timer
    AlertExpired(u64),
    // backend -> UI
    SessionChanged(SessionView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPane {
    Extracted,
    Translated,
}

impl TextPane {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextPane::Extracted => "extracted",
            TextPane::Translated => "translated",
        }
    }
}

/// Self-describing inline image: media type plus base64 payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    pub mime_type: String,
    pub data: String,
}

impl EncodedImage {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decoded payload size, estimated from the base64 length.
    pub fn approx_bytes(&self) -> usize {
        self.data.len() / 4 * 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Extracting,
    Extracted,
    Translating,
    Completed,
    Error,
}

impl SessionStatus {
    /// A remote call is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionStatus::Extracting | SessionStatus::Translating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    pub mime_type: String,
    pub approx_bytes: usize,
}

/// Read-only render snapshot of the session. The UI consumes nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub status: SessionStatus,
    pub image: Option<ImageSummary>,
    pub extracted_text: String,
    pub translated_text: String,
    pub target_language: String,
    pub alert: Option<AlertMessage>,
}
