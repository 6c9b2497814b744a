//! Column slider demo
//!
//! Shows a single column slider bound to an app-owned value, with toggles for
//! the disabled state and two-way binding.
//!
//! ## Command line flags
//!
//! - `--init-config`: Write the default config file (if missing) and continue
//! - `--config <path>`: Use a config file other than the default

mod app;
mod config;

use iced::{Size, Task};

use app::{DemoApp, Message};

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();
    let init_config = args.iter().any(|arg| arg == "--init-config");
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::default_config_path);

    // Initialize logger - set RUST_LOG=debug for gesture tracing
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("column-slider-demo starting up");

    if init_config && !config_path.exists() {
        if let Err(e) = column_slider_core::save_yaml(&config::DemoConfig::default(), &config_path) {
            log::warn!("Could not write default config: {:#}", e);
        }
    }

    let demo_config = config::load_config(&config_path);

    iced::application(
        move || (DemoApp::new(&demo_config), Task::none()),
        update,
        view,
    )
    .theme(theme)
    .title("Column Slider")
    .window_size(Size::new(480.0, 520.0))
    .run()
}

/// Update function for iced
fn update(app: &mut DemoApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &DemoApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Theme function for iced
fn theme(app: &DemoApp) -> iced::Theme {
    app.theme()
}
