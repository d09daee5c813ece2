use crate::catalog::BookRecord;
use crate::config::Config;

pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150x220?text=No+Cover";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Display-ready view of a record
#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub title: String,
    pub author: String,
    pub cover_url: String,
}

/// Turns catalog records into cards
#[derive(Debug, Clone)]
pub struct ResultRenderer {
    covers_url: String,
}

impl ResultRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            covers_url: config.covers_url.clone(),
        }
    }

    /// Medium-size cover for the record, or the placeholder when it has none
    pub fn cover_url(&self, record: &BookRecord) -> String {
        match record.cover_id {
            Some(id) => format!("{}/b/id/{}-M.jpg", self.covers_url, id),
            None => PLACEHOLDER_COVER_URL.to_string(),
        }
    }

    pub fn card(&self, record: &BookRecord) -> BookCard {
        BookCard {
            title: record.title.clone(),
            author: author_label(record).to_string(),
            cover_url: self.cover_url(record),
        }
    }

    pub fn cards(&self, records: &[BookRecord]) -> Vec<BookCard> {
        records.iter().map(|record| self.card(record)).collect()
    }
}

pub fn author_label(record: &BookRecord) -> &str {
    record
        .author_names
        .first()
        .map(String::as_str)
        .unwrap_or(UNKNOWN_AUTHOR)
}
