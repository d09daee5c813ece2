use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;

#[component]
pub fn SearchStatus() -> Element {
    let search_ctx = use_context::<SearchContext>();
    let controller = search_ctx.controller.read();
    let is_loading = controller.is_loading();
    let message = controller.message().map(str::to_string);
    drop(controller);

    rsx! {
        if let Some(message) = message {
            p { class: "error-message", "{message}" }
        }
        if is_loading {
            p { class: "loading", "Loading..." }
        }
    }
}
