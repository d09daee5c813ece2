pub mod client;
pub mod models;

pub use client::{parse_search_response, CatalogError, CatalogSearch, OpenLibraryClient};
pub use models::{BookRecord, Query, SearchMode};
