use crate::search::SearchState;
use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;

/// Shown before the first search
#[component]
pub fn StartPanel() -> Element {
    let search_ctx = use_context::<SearchContext>();

    if !matches!(search_ctx.controller.read().state(), SearchState::Idle) {
        return rsx! {};
    }

    rsx! {
        div { class: "start-section",
            div { class: "start-icon", "📖" }
            h3 { "Start Your Search" }
            p { "Search by title, author, or use general search to find your next favorite book!" }
        }
    }
}
