use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use snaplate_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Clipboard paste watcher. The single global input subscription; it is
/// spawned once by the controller and released exactly once on
/// cancellation.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let poll = {
        let config = state.config.read().await;
        Duration::from_millis(config.ui.clipboard_poll_ms)
    };

    tracing::info!("starting clipboard paste watcher");

    let tx = event_tx.clone();
    tokio::select! {
        result = snaplate_io::clipboard::watch_clipboard_images(poll, move |image| {
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Err(e) = tx.send(AppEvent::ImageSelected(image)).await {
                    tracing::error!("failed to send pasted image to app: {e}");
                }
            });
        }) => {
            if let Err(e) = result {
                tracing::error!("clipboard watcher error: {e}");
            }
        }
        _ = cancel.cancelled() => {
            tracing::info!("clipboard watcher stopping");
        }
    }

    Ok(())
}
