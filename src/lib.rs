// Library exports for integration tests and reusable components

pub mod catalog;
pub mod config;
pub mod render;
pub mod search;
pub mod ui;

// Re-export the search surface at crate root for easier access
pub use catalog::{BookRecord, CatalogError, CatalogSearch, OpenLibraryClient, Query, SearchMode};
pub use search::{SearchController, SearchState};

// Test support (unit tests, or downstream tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
