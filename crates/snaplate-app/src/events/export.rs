use kanal::AsyncSender;
use snaplate_core::{Session, SessionEvent};
use snaplate_gemini::Engine;
use snaplate_types::{AlertKind, AppEvent, TextPane};

use crate::events::apply_and_run;
use crate::state::AppState;

pub const COPIED_MESSAGE: &str = "Copied to clipboard.";
pub const COPY_FAILED_MESSAGE: &str = "Could not copy to clipboard.";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save the file.";

fn pane_text(session: &Session, pane: TextPane) -> &str {
    match pane {
        TextPane::Extracted => session.extracted_text(),
        TextPane::Translated => session.translated_text(),
    }
}

/// Copy the displayed text of a pane. A no-op while the pane is empty.
pub async fn handle_copy(
    state: &AppState,
    session: &mut Session,
    pane: TextPane,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    self_tx: &AsyncSender<AppEvent>,
    engine: &dyn Engine,
) -> anyhow::Result<()> {
    let text = pane_text(session, pane);
    if text.is_empty() {
        return Ok(());
    }

    let text = text.to_string();
    let result =
        tokio::task::spawn_blocking(move || snaplate_io::clipboard::copy_text(&text)).await?;

    let event = match result {
        Ok(()) => SessionEvent::Notice {
            kind: AlertKind::Success,
            message: COPIED_MESSAGE.to_string(),
        },
        Err(e) => {
            tracing::warn!("clipboard copy failed: {e}");
            SessionEvent::Notice {
                kind: AlertKind::Error,
                message: COPY_FAILED_MESSAGE.to_string(),
            }
        }
    };

    apply_and_run(state, session, event, app_to_ui_tx, self_tx, engine).await
}

/// Save the displayed text of a pane as a timestamped .txt file. A no-op
/// while the pane is empty.
pub async fn handle_save(
    state: &AppState,
    session: &mut Session,
    pane: TextPane,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    self_tx: &AsyncSender<AppEvent>,
    engine: &dyn Engine,
) -> anyhow::Result<()> {
    let text = pane_text(session, pane);
    if text.is_empty() {
        return Ok(());
    }

    let dir = {
        let config = state.config.read().await;
        config.ui.download_dir.clone()
    };
    let text = text.to_string();
    let result =
        tokio::task::spawn_blocking(move || snaplate_io::export::save_text(&dir, pane, &text))
            .await?;

    let event = match result {
        Ok(path) => SessionEvent::Notice {
            kind: AlertKind::Success,
            message: format!("Saved {}", path.display()),
        },
        Err(e) => {
            tracing::warn!("saving text failed: {e}");
            SessionEvent::Notice {
                kind: AlertKind::Error,
                message: SAVE_FAILED_MESSAGE.to_string(),
            }
        }
    };

    apply_and_run(state, session, event, app_to_ui_tx, self_tx, engine).await
}
