use std::path::PathBuf;

use kanal::AsyncSender;
use snaplate_core::{Session, SessionEvent};
use snaplate_gemini::Engine;
use snaplate_io::AcquireError;
use snaplate_types::{AlertKind, AppEvent};

use crate::events::apply_and_run;
use crate::state::AppState;

pub const INVALID_IMAGE_MESSAGE: &str = "Please choose a valid image file (JPG, PNG).";
pub const UNREADABLE_FILE_MESSAGE: &str = "Could not read the selected file.";

/// Load an image from disk off the async threads. Rejections become a
/// notice; the session image/text stay untouched.
pub async fn handle_image_path(
    state: &AppState,
    session: &mut Session,
    path: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    self_tx: &AsyncSender<AppEvent>,
    engine: &dyn Engine,
) -> anyhow::Result<()> {
    let path = PathBuf::from(path);
    let loaded =
        tokio::task::spawn_blocking(move || snaplate_io::acquire::load_image_file(&path)).await?;

    let event = match loaded {
        Ok(image) => {
            tracing::info!(mime = %image.mime_type, "image loaded");
            SessionEvent::ImageSelected(image)
        }
        Err(AcquireError::UnsupportedMediaType) => {
            tracing::debug!("rejected a non-image file");
            SessionEvent::Notice {
                kind: AlertKind::Error,
                message: INVALID_IMAGE_MESSAGE.to_string(),
            }
        }
        Err(e) => {
            tracing::warn!("image load failed: {e}");
            SessionEvent::Notice {
                kind: AlertKind::Error,
                message: UNREADABLE_FILE_MESSAGE.to_string(),
            }
        }
    };

    apply_and_run(state, session, event, app_to_ui_tx, self_tx, engine).await
}
