use std::fmt;

/// Field a search query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Title,
    Author,
    General,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Title, SearchMode::Author, SearchMode::General];

    /// Name of the request parameter the query text is sent under
    pub fn param_name(&self) -> &'static str {
        match self {
            SearchMode::Title => "title",
            SearchMode::Author => "author",
            SearchMode::General => "q",
        }
    }

    /// Stable lower-case key, used as the selector option value
    pub fn key(&self) -> &'static str {
        match self {
            SearchMode::Title => "title",
            SearchMode::Author => "author",
            SearchMode::General => "general",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Title => "Title",
            SearchMode::Author => "Author",
            SearchMode::General => "General",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A validated search request: trimmed, non-empty text plus a mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    mode: SearchMode,
}

impl Query {
    /// Returns `None` when the text is empty after trimming
    pub fn new(text: &str, mode: SearchMode) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            mode,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }
}

/// A single book entry returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub author_names: Vec<String>,
    pub cover_id: Option<i64>,
}
