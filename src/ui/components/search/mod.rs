mod form;
mod item;
mod list;
mod page;
mod start;
mod status;

pub use page::SearchPage;
