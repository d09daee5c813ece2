// Test support utilities for both unit and integration tests

use crate::catalog::{BookRecord, CatalogError, CatalogSearch, Query};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted reply for one call to [`MockCatalog::search`]
#[derive(Debug, Clone)]
pub enum MockResponse {
    Records(Vec<BookRecord>),
    /// Non-success HTTP status
    Status(u16),
    /// Body that is not valid JSON
    Malformed,
}

/// Mock catalog for testing
///
/// Replays scripted responses in order and records every query it receives.
/// Once the script runs out, every further call returns an empty result list.
#[derive(Default)]
pub struct MockCatalog {
    responses: Mutex<VecDeque<MockResponse>>,
    queries: Mutex<Vec<Query>>,
}

impl MockCatalog {
    /// Create a new mock catalog with an empty script
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queries received so far, oldest first
    pub fn queries(&self) -> Vec<Query> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CatalogSearch for MockCatalog {
    async fn search(&self, query: &Query) -> Result<Vec<BookRecord>, CatalogError> {
        self.queries.lock().unwrap().push(query.clone());

        let response = self.responses.lock().unwrap().pop_front();
        match response {
            Some(MockResponse::Records(records)) => Ok(records),
            Some(MockResponse::Status(code)) => Err(CatalogError::Status(code)),
            Some(MockResponse::Malformed) => {
                Err(serde_json::from_str::<serde_json::Value>("{\"docs\": [").unwrap_err().into())
            }
            None => Ok(Vec::new()),
        }
    }
}
