use crate::catalog::{BookRecord, CatalogError, CatalogSearch, Query, SearchMode};
use tracing::{debug, info, warn};

pub const NO_RESULTS_MESSAGE: &str = "No books found. Try a different search term.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch books. Please try again.";

/// Visible state of the search page. Exactly one is active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<BookRecord>),
    Empty,
    Failed(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn results(&self) -> &[BookRecord] {
        match self {
            SearchState::Success(records) => records.as_slice(),
            _ => &[],
        }
    }

    /// User-facing message for the empty and failed states
    pub fn message(&self) -> Option<&str> {
        match self {
            SearchState::Empty => Some(NO_RESULTS_MESSAGE),
            SearchState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Handle for one dispatched search. Only the latest ticket may settle the state.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    token: u64,
    query: Query,
}

impl SearchTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

#[derive(Debug, Default)]
pub struct SearchController {
    text: String,
    mode: SearchMode,
    state: SearchState,
    latest_token: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn query_text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn results(&self) -> &[BookRecord] {
        self.state.results()
    }

    pub fn message(&self) -> Option<&str> {
        self.state.message()
    }

    /// Start a search for the current text and mode.
    ///
    /// Blank text is ignored: the state is left untouched and no ticket is
    /// issued. Otherwise the state moves to `Loading` and the caller must run
    /// exactly one catalog search for the returned ticket, then hand the
    /// outcome to [`SearchController::complete`].
    pub fn submit(&mut self) -> Option<SearchTicket> {
        let Some(query) = Query::new(&self.text, self.mode) else {
            debug!("Ignoring submit with blank query");
            return None;
        };

        self.latest_token += 1;
        self.state = SearchState::Loading;

        info!(
            "🔍 Search #{}: {}='{}'",
            self.latest_token,
            query.mode().param_name(),
            query.text()
        );

        Some(SearchTicket {
            token: self.latest_token,
            query,
        })
    }

    /// Settle the search identified by `token`.
    ///
    /// Returns `false` and leaves the state alone when a newer search has been
    /// submitted since.
    pub fn complete(
        &mut self,
        token: u64,
        outcome: Result<Vec<BookRecord>, CatalogError>,
    ) -> bool {
        if token != self.latest_token {
            debug!(
                "Discarding stale result for search #{} (latest is #{})",
                token, self.latest_token
            );
            return false;
        }

        self.state = match outcome {
            Ok(records) if records.is_empty() => {
                info!("✗ Search #{} returned no results", token);
                SearchState::Empty
            }
            Ok(records) => {
                info!("✓ Search #{} returned {} result(s)", token, records.len());
                SearchState::Success(records)
            }
            Err(e) => {
                warn!("✗ Search #{} failed: {}", token, e);
                SearchState::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        };

        true
    }

    /// Submit and wait for the catalog in one step.
    ///
    /// Returns `false` when the query was blank and nothing was sent.
    pub async fn run(&mut self, client: &dyn CatalogSearch) -> bool {
        let Some(ticket) = self.submit() else {
            return false;
        };
        let outcome = client.search(ticket.query()).await;
        self.complete(ticket.token(), outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::render::ResultRenderer;
    use crate::test_support::{MockCatalog, MockResponse};

    fn dune() -> BookRecord {
        BookRecord {
            title: "Dune".to_string(),
            author_names: vec!["Frank Herbert".to_string()],
            cover_id: Some(258),
        }
    }

    #[tokio::test]
    async fn test_blank_query_is_ignored() {
        let catalog = MockCatalog::new();
        let mut controller = SearchController::new();

        for text in ["", "   ", "\t\n"] {
            controller.set_query_text(text);
            assert!(controller.submit().is_none());
            assert!(!controller.run(&catalog).await);
            assert_eq!(controller.state(), &SearchState::Idle);
        }
        assert!(catalog.queries().is_empty());
    }

    #[test]
    fn test_setters_do_not_touch_state() {
        let mut controller = SearchController::new();
        controller.set_query_text("dune");
        controller.set_mode(SearchMode::Author);
        assert_eq!(controller.query_text(), "dune");
        assert_eq!(controller.mode(), SearchMode::Author);
        assert_eq!(controller.state(), &SearchState::Idle);
    }

    #[test]
    fn test_submit_enters_loading() {
        let mut controller = SearchController::new();
        controller.set_query_text("  dune  ");
        let ticket = controller.submit().unwrap();

        assert!(controller.is_loading());
        assert_eq!(ticket.query().text(), "dune");
        assert_eq!(ticket.query().mode(), SearchMode::Title);
        assert!(controller.results().is_empty());
        assert_eq!(controller.message(), None);
    }

    #[tokio::test]
    async fn test_success_scenario() {
        let catalog = MockCatalog::new();
        catalog.push(MockResponse::Records(vec![dune()]));

        let mut controller = SearchController::new();
        controller.set_query_text("dune");
        controller.set_mode(SearchMode::Title);
        assert!(controller.run(&catalog).await);

        assert_eq!(controller.state(), &SearchState::Success(vec![dune()]));
        assert!(!controller.is_loading());

        let cards = ResultRenderer::new(&Config::default()).cards(controller.results());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Dune");
        assert_eq!(cards[0].author, "Frank Herbert");
        assert!(cards[0].cover_url.contains("/b/id/258-M.jpg"));

        let queries = catalog.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].text(), "dune");
        assert_eq!(queries[0].mode(), SearchMode::Title);
    }

    #[tokio::test]
    async fn test_empty_scenario() {
        let catalog = MockCatalog::new();
        catalog.push(MockResponse::Records(vec![]));

        let mut controller = SearchController::new();
        controller.set_query_text("zzzzqqqq");
        controller.set_mode(SearchMode::General);
        controller.run(&catalog).await;

        assert_eq!(controller.state(), &SearchState::Empty);
        assert_eq!(
            controller.message(),
            Some("No books found. Try a different search term.")
        );
    }

    #[tokio::test]
    async fn test_failures_collapse_to_one_message() {
        let catalog = MockCatalog::new();
        catalog.push(MockResponse::Status(503));
        catalog.push(MockResponse::Malformed);

        let mut controller = SearchController::new();
        controller.set_query_text("dune");

        for _ in 0..2 {
            controller.run(&catalog).await;
            assert_eq!(
                controller.state(),
                &SearchState::Failed("Failed to fetch books. Please try again.".to_string())
            );
            assert!(!controller.is_loading());
        }
        assert_eq!(catalog.queries().len(), 2);
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_outcome() {
        let catalog = MockCatalog::new();
        catalog.push(MockResponse::Status(500));
        catalog.push(MockResponse::Records(vec![dune()]));

        let mut controller = SearchController::new();
        controller.set_query_text("dune");
        controller.run(&catalog).await;
        assert!(controller.message().is_some());

        let ticket = controller.submit().unwrap();
        assert_eq!(controller.state(), &SearchState::Loading);
        assert_eq!(controller.message(), None);

        let outcome = catalog.search(ticket.query()).await;
        assert!(controller.complete(ticket.token(), outcome));
        assert_eq!(controller.results().len(), 1);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut controller = SearchController::new();
        controller.set_query_text("dune");
        let first = controller.submit().unwrap();
        controller.set_query_text("emma");
        let second = controller.submit().unwrap();
        assert!(second.token() > first.token());

        // Older request finishing while the newer one is in flight
        assert!(!controller.complete(first.token(), Ok(vec![dune()])));
        assert!(controller.is_loading());

        assert!(controller.complete(second.token(), Ok(vec![])));
        assert_eq!(controller.state(), &SearchState::Empty);

        // Older request finishing after the newer one settled
        assert!(!controller.complete(first.token(), Ok(vec![dune()])));
        assert_eq!(controller.state(), &SearchState::Empty);
    }
}
