pub mod app;
pub mod components;
pub mod search_context;

pub use app::*;
pub use search_context::{SearchContext, SearchContextProvider};
