use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::debug;

use crate::ui::components::search::SearchPage;
use crate::ui::search_context::SearchContextProvider;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Book Finder")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SearchContextProvider {
            SearchPage {}
        }
    }
}
