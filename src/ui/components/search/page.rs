use super::{form::SearchForm, list::BookList, start::StartPanel, status::SearchStatus};
use dioxus::prelude::*;

/// Main search page that orchestrates the search UI components
#[component]
pub fn SearchPage() -> Element {
    rsx! {
        div { class: "container",
            h1 { class: "title", "📖 Book Finder" }
            p { class: "subtitle", "Discover your next great read!" }

            SearchForm {}
            SearchStatus {}
            StartPanel {}
            BookList {}
        }
    }
}
