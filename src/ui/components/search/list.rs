use super::item::BookItem;
use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;

#[component]
pub fn BookList() -> Element {
    let search_ctx = use_context::<SearchContext>();
    let cards = search_ctx
        .renderer
        .cards(search_ctx.controller.read().results());

    if cards.is_empty() {
        return rsx! {
            div {}
        };
    }

    rsx! {
        div { class: "results",
            for (index, card) in cards.iter().enumerate() {
                BookItem { key: "{index}", card: card.clone() }
            }
        }
    }
}
