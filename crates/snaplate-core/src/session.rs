use snaplate_types::{
    AlertKind, AlertMessage, EncodedImage, ImageSummary, NO_TEXT_SENTINEL, SessionStatus,
    SessionView,
};

use crate::language;

pub const NO_TEXT_MESSAGE: &str = "No text could be found in the image.";

/// Everything that can happen to a session: user intents, remote-call
/// results, local notices and alert-timer expiry.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    ImageSelected(EncodedImage),
    ImageCleared,
    ExtractRequested,
    TranslateRequested,
    ExtractAndTranslateRequested,
    TargetLanguageChanged(String),
    ResetRequested,
    OcrSucceeded(String),
    OcrFailed(String),
    TranslationSucceeded(String),
    TranslationFailed(String),
    Notice { kind: AlertKind, message: String },
    AlertExpired(u64),
}

/// Work the caller has to perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Extract { image: EncodedImage },
    Translate { text: String, language_name: String },
    ScheduleAlertExpiry { id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveAlert {
    id: u64,
    kind: AlertKind,
    message: String,
}

/// The single source of truth for one interaction cycle. Transitions run
/// through `apply`; everything else is read-only.
#[derive(Debug, Clone)]
pub struct Session {
    status: SessionStatus,
    image: Option<EncodedImage>,
    extracted_text: String,
    translated_text: String,
    target_language: String,
    alert: Option<ActiveAlert>,
    alert_seq: u64,
    auto_translate: bool,
}

impl Session {
    pub fn new(target_language: &str) -> Self {
        Session {
            status: SessionStatus::Idle,
            image: None,
            extracted_text: String::new(),
            translated_text: String::new(),
            target_language: target_language.to_string(),
            alert: None,
            alert_seq: 0,
            auto_translate: false,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        self.image.as_ref()
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn alert(&self) -> Option<AlertMessage> {
        self.alert.as_ref().map(|a| AlertMessage {
            kind: a.kind,
            message: a.message.clone(),
        })
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            status: self.status,
            image: self.image.as_ref().map(|img| ImageSummary {
                mime_type: img.mime_type.clone(),
                approx_bytes: img.approx_bytes(),
            }),
            extracted_text: self.extracted_text.clone(),
            translated_text: self.translated_text.clone(),
            target_language: self.target_language.clone(),
            alert: self.alert(),
        }
    }

    /// Apply one event and return the follow-up work. Events that do not
    /// fit the current status are dropped; with intents serialized through
    /// a single queue that also rules out stale-result writes.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<Command> {
        match event {
            SessionEvent::ImageSelected(image) => {
                self.image = Some(image);
                self.clear_results();
                self.alert = None;
                self.status = SessionStatus::Idle;
                Vec::new()
            }
            SessionEvent::ImageCleared => {
                self.image = None;
                self.clear_results();
                self.alert = None;
                self.status = SessionStatus::Idle;
                Vec::new()
            }
            SessionEvent::ResetRequested => {
                self.clear_results();
                self.alert = None;
                self.status = SessionStatus::Idle;
                Vec::new()
            }
            SessionEvent::TargetLanguageChanged(code) => {
                // Takes effect on the next translation only.
                self.target_language = code;
                Vec::new()
            }
            SessionEvent::ExtractRequested => self.start_extract(false),
            SessionEvent::ExtractAndTranslateRequested => self.start_extract(true),
            SessionEvent::OcrSucceeded(text) => {
                if self.status != SessionStatus::Extracting {
                    tracing::debug!(status = ?self.status, "dropping out-of-phase OCR result");
                    return Vec::new();
                }
                if text == NO_TEXT_SENTINEL {
                    // The sentinel is an outcome, not text. It never reaches
                    // the extracted pane.
                    self.auto_translate = false;
                    self.status = SessionStatus::Idle;
                    return vec![self.set_alert(AlertKind::Info, NO_TEXT_MESSAGE.to_string())];
                }
                self.extracted_text = text;
                if self.auto_translate {
                    self.auto_translate = false;
                    self.status = SessionStatus::Translating;
                    vec![Command::Translate {
                        text: self.extracted_text.clone(),
                        language_name: language::prompt_name(&self.target_language),
                    }]
                } else {
                    self.status = SessionStatus::Extracted;
                    Vec::new()
                }
            }
            SessionEvent::OcrFailed(message) => {
                if self.status != SessionStatus::Extracting {
                    tracing::debug!(status = ?self.status, "dropping out-of-phase OCR failure");
                    return Vec::new();
                }
                self.auto_translate = false;
                self.status = SessionStatus::Error;
                vec![self.set_alert(AlertKind::Error, message)]
            }
            SessionEvent::TranslateRequested => {
                let ready = matches!(
                    self.status,
                    SessionStatus::Extracted | SessionStatus::Completed
                );
                if !ready || self.extracted_text.is_empty() {
                    tracing::debug!(status = ?self.status, "ignoring translate request");
                    return Vec::new();
                }
                self.status = SessionStatus::Translating;
                vec![Command::Translate {
                    text: self.extracted_text.clone(),
                    language_name: language::prompt_name(&self.target_language),
                }]
            }
            SessionEvent::TranslationSucceeded(text) => {
                if self.status != SessionStatus::Translating {
                    tracing::debug!(status = ?self.status, "dropping out-of-phase translation");
                    return Vec::new();
                }
                self.translated_text = text;
                self.status = SessionStatus::Completed;
                Vec::new()
            }
            SessionEvent::TranslationFailed(message) => {
                if self.status != SessionStatus::Translating {
                    tracing::debug!(status = ?self.status, "dropping out-of-phase translation failure");
                    return Vec::new();
                }
                // A failed translation must never throw away a successful
                // extraction.
                self.status = if self.extracted_text.is_empty() {
                    SessionStatus::Error
                } else {
                    SessionStatus::Extracted
                };
                vec![self.set_alert(AlertKind::Error, message)]
            }
            SessionEvent::Notice { kind, message } => {
                // Local notice: alert only, no workflow transition.
                vec![self.set_alert(kind, message)]
            }
            SessionEvent::AlertExpired(id) => {
                if self.alert.as_ref().map(|a| a.id) == Some(id) {
                    self.alert = None;
                }
                Vec::new()
            }
        }
    }

    fn start_extract(&mut self, auto_translate: bool) -> Vec<Command> {
        if self.status != SessionStatus::Idle {
            tracing::debug!(status = ?self.status, "ignoring extract request");
            return Vec::new();
        }
        let Some(image) = self.image.clone() else {
            tracing::debug!("ignoring extract request without an image");
            return Vec::new();
        };
        self.auto_translate = auto_translate;
        self.status = SessionStatus::Extracting;
        vec![Command::Extract { image }]
    }

    fn clear_results(&mut self) {
        self.extracted_text.clear();
        self.translated_text.clear();
        self.auto_translate = false;
    }

    fn set_alert(&mut self, kind: AlertKind, message: String) -> Command {
        self.alert_seq += 1;
        self.alert = Some(ActiveAlert {
            id: self.alert_seq,
            kind,
            message,
        });
        Command::ScheduleAlertExpiry { id: self.alert_seq }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> EncodedImage {
        EncodedImage {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        }
    }

    fn session_with_image() -> Session {
        let mut session = Session::new("es");
        session.apply(SessionEvent::ImageSelected(png()));
        session
    }

    fn extract_command(commands: &[Command]) -> &Command {
        assert_eq!(commands.len(), 1);
        &commands[0]
    }

    #[test]
    fn starts_idle_and_empty() {
        let session = Session::new("es");
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.image().is_none());
        assert!(session.extracted_text().is_empty());
        assert!(session.translated_text().is_empty());
        assert!(session.alert().is_none());
        assert_eq!(session.target_language(), "es");
    }

    #[test]
    fn selecting_image_clears_previous_results_and_alert() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractRequested);
        session.apply(SessionEvent::OcrSucceeded("Hello".to_string()));
        session.apply(SessionEvent::TranslateRequested);
        session.apply(SessionEvent::TranslationFailed("boom".to_string()));
        assert!(session.alert().is_some());

        session.apply(SessionEvent::ImageSelected(png()));
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.extracted_text().is_empty());
        assert!(session.translated_text().is_empty());
        assert!(session.alert().is_none());
        assert!(session.image().is_some());
    }

    #[test]
    fn extract_needs_an_image() {
        let mut session = Session::new("es");
        assert!(session.apply(SessionEvent::ExtractRequested).is_empty());
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn extract_emits_command_and_goes_busy() {
        let mut session = session_with_image();
        let commands = session.apply(SessionEvent::ExtractRequested);
        assert_eq!(session.status(), SessionStatus::Extracting);
        match extract_command(&commands) {
            Command::Extract { image } => assert_eq!(image.mime_type, "image/png"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn sentinel_result_returns_to_idle_with_info_alert() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractRequested);
        let commands = session.apply(SessionEvent::OcrSucceeded(NO_TEXT_SENTINEL.to_string()));

        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.extracted_text().is_empty());
        let alert = session.alert().expect("info alert");
        assert_eq!(alert.kind, AlertKind::Info);
        assert_eq!(alert.message, NO_TEXT_MESSAGE);
        assert!(matches!(
            commands.as_slice(),
            [Command::ScheduleAlertExpiry { .. }]
        ));
    }

    #[test]
    fn sentinel_in_combined_flow_never_translates() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractAndTranslateRequested);
        let commands = session.apply(SessionEvent::OcrSucceeded(NO_TEXT_SENTINEL.to_string()));

        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, Command::Translate { .. }))
        );
    }

    #[test]
    fn ocr_text_is_stored_verbatim() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractRequested);
        session.apply(SessionEvent::OcrSucceeded("Hello  world".to_string()));
        assert_eq!(session.status(), SessionStatus::Extracted);
        assert_eq!(session.extracted_text(), "Hello  world");
    }

    #[test]
    fn ocr_failure_lands_in_error_with_alert() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractRequested);
        session.apply(SessionEvent::OcrFailed("extraction failed".to_string()));
        assert_eq!(session.status(), SessionStatus::Error);
        assert_eq!(session.alert().unwrap().kind, AlertKind::Error);
    }

    #[test]
    fn combined_flow_happy_path() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractAndTranslateRequested);
        assert_eq!(session.status(), SessionStatus::Extracting);

        let commands = session.apply(SessionEvent::OcrSucceeded("Hello".to_string()));
        assert_eq!(session.status(), SessionStatus::Translating);
        match extract_command(&commands) {
            Command::Translate {
                text,
                language_name,
            } => {
                assert_eq!(text, "Hello");
                assert_eq!(language_name, "Spanish (Español)");
            }
            other => panic!("unexpected command {other:?}"),
        }

        session.apply(SessionEvent::TranslationSucceeded("Hola".to_string()));
        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(session.extracted_text(), "Hello");
        assert_eq!(session.translated_text(), "Hola");
    }

    #[test]
    fn translation_failure_keeps_extracted_text() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractAndTranslateRequested);
        session.apply(SessionEvent::OcrSucceeded("Hello".to_string()));
        session.apply(SessionEvent::TranslationFailed("translation failed".to_string()));

        assert_eq!(session.status(), SessionStatus::Extracted);
        assert_eq!(session.extracted_text(), "Hello");
        assert!(session.translated_text().is_empty());
        assert_eq!(session.alert().unwrap().kind, AlertKind::Error);
    }

    #[test]
    fn translation_failure_without_extraction_is_an_error() {
        let mut session = session_with_image();
        // Not reachable through intents; the rule still holds if a result
        // ever arrives in that shape.
        session.status = SessionStatus::Translating;
        session.apply(SessionEvent::TranslationFailed("translation failed".to_string()));
        assert_eq!(session.status(), SessionStatus::Error);
    }

    #[test]
    fn translate_again_from_completed() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractAndTranslateRequested);
        session.apply(SessionEvent::OcrSucceeded("Hello".to_string()));
        session.apply(SessionEvent::TranslationSucceeded("Hola".to_string()));

        let commands = session.apply(SessionEvent::TranslateRequested);
        assert_eq!(session.status(), SessionStatus::Translating);
        assert!(matches!(
            extract_command(&commands),
            Command::Translate { .. }
        ));
    }

    #[test]
    fn language_change_is_not_retroactive() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractAndTranslateRequested);
        session.apply(SessionEvent::OcrSucceeded("Hello".to_string()));
        session.apply(SessionEvent::TranslationSucceeded("Hola".to_string()));

        session.apply(SessionEvent::TargetLanguageChanged("fr".to_string()));
        assert_eq!(session.translated_text(), "Hola");
        assert_eq!(session.status(), SessionStatus::Completed);

        let commands = session.apply(SessionEvent::TranslateRequested);
        match extract_command(&commands) {
            Command::Translate { language_name, .. } => {
                assert_eq!(language_name, "French (Français)");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn reset_keeps_image_clears_everything_else() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractAndTranslateRequested);
        session.apply(SessionEvent::OcrSucceeded("Hello".to_string()));
        session.apply(SessionEvent::TranslationFailed("boom".to_string()));

        session.apply(SessionEvent::ResetRequested);
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.image().is_some());
        assert!(session.extracted_text().is_empty());
        assert!(session.translated_text().is_empty());
        assert!(session.alert().is_none());
    }

    #[test]
    fn clear_image_drops_the_image_too() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractRequested);
        session.apply(SessionEvent::OcrSucceeded("Hello".to_string()));

        session.apply(SessionEvent::ImageCleared);
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.image().is_none());
        assert!(session.extracted_text().is_empty());
    }

    #[test]
    fn busy_session_ignores_new_work_requests() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractRequested);
        assert!(session.apply(SessionEvent::ExtractRequested).is_empty());
        assert!(session.apply(SessionEvent::TranslateRequested).is_empty());
        assert_eq!(session.status(), SessionStatus::Extracting);
    }

    #[test]
    fn out_of_phase_results_are_dropped() {
        let mut session = session_with_image();
        assert!(
            session
                .apply(SessionEvent::OcrSucceeded("ghost".to_string()))
                .is_empty()
        );
        assert!(session.extracted_text().is_empty());
        assert_eq!(session.status(), SessionStatus::Idle);

        assert!(
            session
                .apply(SessionEvent::TranslationSucceeded("ghost".to_string()))
                .is_empty()
        );
        assert!(session.translated_text().is_empty());
    }

    #[test]
    fn notice_changes_alert_only() {
        let mut session = session_with_image();
        session.apply(SessionEvent::Notice {
            kind: AlertKind::Error,
            message: "not an image".to_string(),
        });
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.image().is_some());
        assert_eq!(session.alert().unwrap().message, "not an image");
    }

    #[test]
    fn stale_alert_expiry_does_not_clear_newer_alert() {
        let mut session = Session::new("es");
        let first = session.apply(SessionEvent::Notice {
            kind: AlertKind::Info,
            message: "first".to_string(),
        });
        let Command::ScheduleAlertExpiry { id: first_id } = first[0] else {
            panic!("expected expiry command");
        };
        session.apply(SessionEvent::Notice {
            kind: AlertKind::Info,
            message: "second".to_string(),
        });

        session.apply(SessionEvent::AlertExpired(first_id));
        assert_eq!(session.alert().unwrap().message, "second");

        session.apply(SessionEvent::AlertExpired(first_id + 1));
        assert!(session.alert().is_none());
    }

    #[test]
    fn view_reflects_session() {
        let mut session = session_with_image();
        session.apply(SessionEvent::ExtractRequested);
        session.apply(SessionEvent::OcrSucceeded("Hello".to_string()));

        let view = session.view();
        assert_eq!(view.status, SessionStatus::Extracted);
        assert_eq!(view.extracted_text, "Hello");
        assert_eq!(view.target_language, "es");
        let image = view.image.expect("image summary");
        assert_eq!(image.mime_type, "image/png");
        assert!(image.approx_bytes > 0);
    }
}
