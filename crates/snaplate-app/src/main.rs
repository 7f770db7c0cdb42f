use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use snaplate_gemini::{Engine, GeminiClient};
use snaplate_types::AppEvent;

use crate::controller::AppController;
use crate::state::AppState;

mod controller;
mod events;
mod io;
mod state;


/// Extract text from an image and translate it, powered by Gemini.
#[derive(Parser)]
#[command(name = "snaplate")]
struct Cli {
    /// Image file to load on startup
    #[arg(long)]
    image: Option<PathBuf>,

    /// Target language code, e.g. "es" or "ja"
    #[arg(long)]
    lang: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = snaplate_config::Config::new();
    if let Some(lang) = cli.lang {
        if snaplate_core::language::is_supported(&lang) {
            config.translate.default_target_lang = lang;
        } else {
            tracing::warn!(
                "unsupported language code {:?}, keeping {:?}",
                lang,
                config.translate.default_target_lang
            );
        }
    }
    if config.gemini.api_key.is_empty() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; extraction and translation will fail until it is provided"
        );
    }

    let default_lang = config.translate.default_target_lang.clone();
    let engine: Arc<dyn Engine> = Arc::new(GeminiClient::new(&config.gemini));
    let state = Arc::new(AppState::new(config));

    let runtime = tokio::runtime::Runtime::new()?;
    let controller = AppController::new(Arc::clone(&state));

    if let Some(path) = cli.image {
        let sender = controller.intent_sender();
        runtime.block_on(
            sender.send(AppEvent::ImagePathSubmitted(path.display().to_string())),
        )?;
    }

    let mut tasks = {
        let _guard = runtime.enter();
        controller.spawn_tasks(engine)
    };

    // The window owns the main thread until the user closes it; the
    // backend keeps running on the tokio runtime meanwhile.
    let ui_result = snaplate_ui::run_ui(
        controller.view_receiver(),
        controller.intent_sender(),
        default_lang,
    );

    tracing::info!("window closed, shutting down");
    controller.shutdown();
    runtime.block_on(tasks.shutdown());

    ui_result
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}
