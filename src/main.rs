mod app;
mod clock;
mod components;
mod download;
mod logging;
mod pages;
mod session;
mod theme;
mod timers;

use app::App;
use scalehealth_core::config::default_config;

fn main() {
    logging::init(&default_config().log_level);
    leptos::mount::mount_to_body(App);
}
