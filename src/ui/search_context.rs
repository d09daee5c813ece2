use crate::catalog::{CatalogSearch, OpenLibraryClient, SearchMode};
use crate::config::use_config;
use crate::render::ResultRenderer;
use crate::search::SearchController;
use dioxus::prelude::*;
use std::sync::Arc;

/// Search page state shared by the page components
#[derive(Clone)]
pub struct SearchContext {
    pub controller: Signal<SearchController>,
    pub renderer: ResultRenderer,
    client: Arc<dyn CatalogSearch>,
}

impl SearchContext {
    pub fn new(client: Arc<dyn CatalogSearch>, renderer: ResultRenderer) -> Self {
        Self {
            controller: Signal::new(SearchController::new()),
            renderer,
            client,
        }
    }

    pub fn set_query_text(&self, text: String) {
        let mut controller = self.controller;
        controller.write().set_query_text(text);
    }

    pub fn set_mode(&self, mode: SearchMode) {
        let mut controller = self.controller;
        controller.write().set_mode(mode);
    }

    /// Dispatch a search for the current query; blank queries do nothing
    pub fn submit(&self) {
        // Copy the signal to avoid borrowing conflicts (Signal implements Copy)
        let mut controller = self.controller;

        let Some(ticket) = controller.write().submit() else {
            return;
        };

        let client = self.client.clone();
        spawn(async move {
            let outcome = client.search(ticket.query()).await;
            controller.write().complete(ticket.token(), outcome);
        });
    }
}

/// Provider component to make search context available throughout the app
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let config = use_config();

    use_context_provider(move || {
        SearchContext::new(
            Arc::new(OpenLibraryClient::new(&config)),
            ResultRenderer::new(&config),
        )
    });

    rsx! {
        {children}
    }
}
