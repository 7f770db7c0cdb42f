use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use snaplate_core::{Command, Session, SessionEvent};
use snaplate_gemini::Engine;
use snaplate_types::AppEvent;

use crate::state::AppState;

pub mod export;
pub mod extract;
pub mod image;
pub mod translate;

/// App's main loop. Intents are handled one at a time and remote calls are
/// awaited inline, so two calls can never overlap for one session and a
/// result always lands before the next intent is looked at.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    self_tx: AsyncSender<AppEvent>,
    engine: Arc<dyn Engine>,
) -> anyhow::Result<()> {
    let mut session = {
        let config = state.config.read().await;
        Session::new(&config.translate.default_target_lang)
    };
    push_session(&app_to_ui_tx, &session).await;

    tracing::info!("event loop started, waiting for intents");
    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_event(
            &state,
            &mut session,
            event,
            &app_to_ui_tx,
            &self_tx,
            engine.as_ref(),
        )
        .await?;
    }
}

pub(crate) async fn handle_event(
    state: &AppState,
    session: &mut Session,
    event: AppEvent,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    self_tx: &AsyncSender<AppEvent>,
    engine: &dyn Engine,
) -> anyhow::Result<()> {
    let session_event = match event {
        AppEvent::ImagePathSubmitted(path) => {
            return image::handle_image_path(state, session, path, app_to_ui_tx, self_tx, engine)
                .await;
        }
        AppEvent::CopyRequested(pane) => {
            return export::handle_copy(state, session, pane, app_to_ui_tx, self_tx, engine).await;
        }
        AppEvent::SaveRequested(pane) => {
            return export::handle_save(state, session, pane, app_to_ui_tx, self_tx, engine).await;
        }
        // UI-bound event, nothing to do in the backend.
        AppEvent::SessionChanged(_) => return Ok(()),
        AppEvent::ImageSelected(image) => SessionEvent::ImageSelected(image),
        AppEvent::ImageCleared => SessionEvent::ImageCleared,
        AppEvent::ExtractRequested => SessionEvent::ExtractRequested,
        AppEvent::ExtractAndTranslateRequested => SessionEvent::ExtractAndTranslateRequested,
        AppEvent::TranslateRequested => SessionEvent::TranslateRequested,
        AppEvent::TargetLanguageChanged(code) => SessionEvent::TargetLanguageChanged(code),
        AppEvent::ResetRequested => SessionEvent::ResetRequested,
        AppEvent::AlertExpired(id) => SessionEvent::AlertExpired(id),
    };

    apply_and_run(state, session, session_event, app_to_ui_tx, self_tx, engine).await
}

/// Apply an event, then drain the command queue it produced. A command may
/// feed further events back into the session (the combined flow chains the
/// translation off the OCR result this way).
pub(crate) async fn apply_and_run(
    state: &AppState,
    session: &mut Session,
    event: SessionEvent,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    self_tx: &AsyncSender<AppEvent>,
    engine: &dyn Engine,
) -> anyhow::Result<()> {
    let mut queue: VecDeque<Command> = session.apply(event).into();
    push_session(app_to_ui_tx, session).await;

    while let Some(command) = queue.pop_front() {
        match command {
            Command::Extract { image } => {
                let next = extract::run_extract(engine, &image).await;
                queue.extend(session.apply(next));
                push_session(app_to_ui_tx, session).await;
            }
            Command::Translate {
                text,
                language_name,
            } => {
                let next = translate::run_translate(engine, &text, &language_name).await;
                queue.extend(session.apply(next));
                push_session(app_to_ui_tx, session).await;
            }
            Command::ScheduleAlertExpiry { id } => {
                let ttl = {
                    let config = state.config.read().await;
                    Duration::from_millis(config.ui.alert_ttl_ms)
                };
                let tx = self_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(ttl).await;
                    // Superseded ids are ignored by the session.
                    let _ = tx.send(AppEvent::AlertExpired(id)).await;
                });
            }
        }
    }

    Ok(())
}

async fn push_session(tx: &AsyncSender<AppEvent>, session: &Session) {
    if tx
        .send(AppEvent::SessionChanged(session.view()))
        .await
        .is_err()
    {
        tracing::warn!("UI channel closed, dropping session snapshot");
    }
}
