use crate::render::BookCard;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct BookItemProps {
    pub card: BookCard,
}

/// One result card: cover, title, first author
#[component]
pub fn BookItem(props: BookItemProps) -> Element {
    rsx! {
        div { class: "book-card",
            img { src: "{props.card.cover_url}", alt: "{props.card.title}" }
            div { class: "book-info",
                div { class: "book-title", "{props.card.title}" }
                div { class: "book-author", "{props.card.author}" }
            }
        }
    }
}
