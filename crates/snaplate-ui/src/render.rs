use slint::SharedString;
use snaplate_types::{SessionStatus, SessionView};

use crate::MainWindow;

/// Project a session snapshot onto the window. Everything the user sees or
/// can click is derived here; the window never decides on its own.
pub(crate) fn apply_view(window: &MainWindow, view: &SessionView) {
    let busy = view.status.is_busy();

    window.set_busy(busy);
    window.set_has_image(view.image.is_some());
    window.set_image_info(match &view.image {
        Some(image) => SharedString::from(format!(
            "{} ({} KB)",
            image.mime_type,
            image.approx_bytes.div_ceil(1024)
        )),
        None => SharedString::default(),
    });

    window.set_extracted_text(SharedString::from(view.extracted_text.as_str()));
    window.set_translated_text(SharedString::from(view.translated_text.as_str()));
    window.set_status_line(SharedString::from(status_line(view)));

    match &view.alert {
        Some(alert) => {
            window.set_alert_line(SharedString::from(alert.message.as_str()));
            window.set_alert_kind(SharedString::from(alert.kind.as_str()));
        }
        None => {
            window.set_alert_line(SharedString::default());
            window.set_alert_kind(SharedString::default());
        }
    }

    window.set_can_extract(view.status == SessionStatus::Idle && view.image.is_some());
    window.set_can_translate(
        matches!(
            view.status,
            SessionStatus::Extracted | SessionStatus::Completed
        ) && !view.extracted_text.is_empty(),
    );
    window.set_can_reset(!busy);
    window.set_can_clear(view.image.is_some() && !busy);
}

fn status_line(view: &SessionView) -> &'static str {
    match view.status {
        SessionStatus::Idle => {
            if view.image.is_some() {
                "Image ready. Choose an action."
            } else {
                "Load a file or copy an image to the clipboard to begin."
            }
        }
        SessionStatus::Extracting => "Extracting text...",
        SessionStatus::Extracted => "Text extracted. Translate when ready.",
        SessionStatus::Translating => "Translating...",
        SessionStatus::Completed => "Translation complete.",
        SessionStatus::Error => "Something went wrong. Load another image to retry.",
    }
}
