use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snaplate_gemini::Engine;
use snaplate_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // one snapshot per transition
            ui_to_app: kanal::bounded_async(64),  // UI interactions
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender for intents (UI thread, watcher, CLI preload all use this).
    pub fn intent_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.ui_to_app.0.clone()
    }

    /// Receiver the UI drains session snapshots from.
    pub fn view_receiver(&self) -> AsyncReceiver<AppEvent> {
        self.channels.app_to_ui.1.clone()
    }

    /// Spawn the backend tasks. The UI itself runs on the caller's thread.
    pub fn spawn_tasks(&self, engine: Arc<dyn Engine>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.channels.ui_to_app.0.clone(),
            engine,
        ));

        // Clipboard paste watcher
        tasks.spawn(watcher_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
