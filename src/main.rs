use bookfinder::config::Config;
use bookfinder::ui::{make_config, App};
use tracing::info;

fn main() {
    // Use RUST_LOG env var if set, otherwise log this crate at info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "bookfinder=info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    info!("Starting Book Finder against {}", config.catalog_url);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(config)
        .launch(App);
}
