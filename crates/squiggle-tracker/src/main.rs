//! Squiggle Tracker - water intake demo for the squiggly slider
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads configuration from the user's config directory
//! 2. Launches the iced application with the animation tick subscription

mod app;
mod config;

use iced::{Size, Task};

use app::{Message, TrackerApp};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("squiggle-tracker starting up");

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    iced::application(
        move || (TrackerApp::new(config.clone()), Task::none()),
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Squiggle Tracker")
    .window_size(Size::new(480.0, 340.0))
    .run()
}

/// Update function for iced
fn update(app: &mut TrackerApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &TrackerApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &TrackerApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &TrackerApp) -> iced::Theme {
    app.theme()
}
