pub mod app;
pub mod covers;
pub mod settings;
mod view;

// Re-export core library
pub use booklist_core::*;

use app::BooklistApp;
use tracing_subscriber::EnvFilter;

/// Installs the log subscriber. `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("booklist: logging unavailable: {e}");
    }
}

pub fn run() -> iced::Result {
    init_logging();
    let settings = settings::load_settings();
    log::info!("starting booklist with {:?}", settings);

    iced::application(BooklistApp::title, BooklistApp::update, BooklistApp::view)
        .theme(BooklistApp::theme)
        .window_size((760.0, 900.0))
        .run_with(move || BooklistApp::new(settings))
}
