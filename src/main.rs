use std::fs::{self, File};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;

use crate::app::App;
use crate::config::Config;
use crate::geo::{ConfiguredLocation, LocationProvider};
use crate::language::Language;
use crate::speech::{SimulatedRecognizer, SpeechRecognizer};
use crate::tui::EventHandler;

mod app;
mod config;
mod conversation;
mod geo;
mod handler;
mod i18n;
mod intent;
mod language;
mod speech;
mod tui;
mod ui;

/// Logs go to a file beside the config: the terminal belongs to the UI.
fn init_tracing() {
    let Some(dir) = dirs::config_dir() else {
        return;
    };
    let dir = dir.join("bhujal");
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let path = dir.join("bhujal.log");
    let Ok(file) = File::create(&path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    tracing::info!("logging to {}", path.display());
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::load().unwrap_or_else(|_| Config::new());
    let language = config.language.unwrap_or(Language::En);
    let reply_delay = Duration::from_millis(config.reply_delay_ms.unwrap_or(1000));

    let recognizer: Option<Box<dyn SpeechRecognizer>> = match config.voice.as_deref() {
        Some("off") => None,
        _ => Some(Box::new(SimulatedRecognizer::new())),
    };
    let locator = config
        .location()
        .map(|fix| Box::new(ConfiguredLocation::new(fix)) as Box<dyn LocationProvider>);

    tui::install_panic_hook();
    let mut events = EventHandler::new();
    let mut app = App::new(language, reply_delay, recognizer, locator, events.sender());
    app.request_location();

    let mut terminal = tui::init()?;
    loop {
        terminal.draw(|frame| ui::render(&mut app, frame))?;
        match events.next().await {
            Some(event) => handler::handle_event(&mut app, event),
            None => break,
        }
        if app.should_quit {
            break;
        }
    }
    tui::restore()?;

    Ok(())
}
