use kanal::{AsyncReceiver, AsyncSender};
use slint::{ModelRc, SharedString, VecModel};
use snaplate_core::language::SUPPORTED_LANGUAGES;
use snaplate_types::{AppEvent, TextPane};

mod render;

slint::include_modules!();

/// Run the window on the calling thread until the user closes it. The UI
/// holds no state of its own: it renders `SessionChanged` snapshots and
/// emits intents.
pub fn run_ui(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    default_target_lang: String,
) -> anyhow::Result<()> {
    let window = MainWindow::new()?;

    let names: Vec<SharedString> = SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| SharedString::from(lang.name))
        .collect();
    window.set_languages(ModelRc::new(VecModel::from(names)));
    window.set_language_index(
        SUPPORTED_LANGUAGES
            .iter()
            .position(|lang| lang.code == default_target_lang)
            .unwrap_or(0) as i32,
    );

    // Wire every callback to an intent on the backend channel.
    {
        let tx = ui_to_app_tx.clone();
        window.on_image_path_submitted(move |path| {
            let path = path.trim().to_string();
            if !path.is_empty() {
                send_intent(&tx, AppEvent::ImagePathSubmitted(path));
            }
        });
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_clear_image(move || send_intent(&tx, AppEvent::ImageCleared));
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_extract_and_translate(move || {
            send_intent(&tx, AppEvent::ExtractAndTranslateRequested)
        });
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_extract_only(move || send_intent(&tx, AppEvent::ExtractRequested));
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_translate(move || send_intent(&tx, AppEvent::TranslateRequested));
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_reset(move || send_intent(&tx, AppEvent::ResetRequested));
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_language_selected(move |name| {
            match SUPPORTED_LANGUAGES
                .iter()
                .find(|lang| lang.name == name.as_str())
            {
                Some(lang) => {
                    send_intent(&tx, AppEvent::TargetLanguageChanged(lang.code.to_string()))
                }
                None => tracing::warn!("unknown language selected: {name}"),
            }
        });
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_copy_extracted(move || {
            send_intent(&tx, AppEvent::CopyRequested(TextPane::Extracted))
        });
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_copy_translated(move || {
            send_intent(&tx, AppEvent::CopyRequested(TextPane::Translated))
        });
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_save_extracted(move || {
            send_intent(&tx, AppEvent::SaveRequested(TextPane::Extracted))
        });
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_save_translated(move || {
            send_intent(&tx, AppEvent::SaveRequested(TextPane::Translated))
        });
    }

    // Pump session snapshots from the backend into the window.
    {
        let window_weak = window.as_weak();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                if let AppEvent::SessionChanged(view) = event {
                    match window_weak.upgrade() {
                        Some(window) => render::apply_view(&window, &view),
                        None => break,
                    }
                }
            }
        })
        .unwrap();
    }

    window.show()?;
    window.run()?;

    Ok(())
}

fn send_intent(tx: &AsyncSender<AppEvent>, event: AppEvent) {
    let tx = tx.clone();
    slint::spawn_local(async move {
        if tx.send(event).await.is_err() {
            tracing::warn!("backend channel closed, dropping UI intent");
        }
    })
    .unwrap();
}
