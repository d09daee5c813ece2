use crate::catalog::SearchMode;
use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;

/// Query input with the mode selector and search button
#[component]
pub fn SearchForm() -> Element {
    let search_ctx = use_context::<SearchContext>();

    let controller = search_ctx.controller.read();
    let query_text = controller.query_text().to_string();
    let mode = controller.mode();
    let is_loading = controller.is_loading();
    drop(controller);

    rsx! {
        div { class: "search-box",
            input {
                r#type: "text",
                placeholder: "Search by {mode}...",
                value: "{query_text}",
                oninput: {
                    let search_ctx = search_ctx.clone();
                    move |event: FormEvent| {
                        search_ctx.set_query_text(event.value());
                    }
                },
                onkeydown: {
                    let search_ctx = search_ctx.clone();
                    move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            search_ctx.submit();
                        }
                    }
                },
            }
            select {
                value: "{mode.key()}",
                onchange: {
                    let search_ctx = search_ctx.clone();
                    move |event: FormEvent| {
                        if let Some(mode) = SearchMode::from_key(&event.value()) {
                            search_ctx.set_mode(mode);
                        }
                    }
                },
                for option_mode in SearchMode::ALL {
                    option {
                        key: "{option_mode.key()}",
                        value: "{option_mode.key()}",
                        selected: option_mode == mode,
                        "{option_mode.label()}"
                    }
                }
            }
            button {
                class: "btn-search",
                onclick: {
                    let search_ctx = search_ctx.clone();
                    move |_| {
                        search_ctx.submit();
                    }
                },
                if is_loading {
                    "Searching..."
                } else {
                    "Search"
                }
            }
        }
    }
}
