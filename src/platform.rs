use std::fmt;

/// The closed set of sites we know how to read.
///
/// Declaration order is the schema priority used when a batch has to pick a
/// single column set: books first, then quotes, then imdb, with global_news as
/// the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Books,
    Quotes,
    Imdb,
    GlobalNews,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Books,
        Platform::Quotes,
        Platform::Imdb,
        Platform::GlobalNews,
    ];

    /// Look up a platform by its command-line identifier. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Platform> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Platform::Books => "books",
            Platform::Quotes => "quotes",
            Platform::Imdb => "imdb",
            Platform::GlobalNews => "global_news",
        }
    }

    /// Output columns, in file order.
    pub fn columns(self) -> [&'static str; 3] {
        match self {
            Platform::Books => ["Name", "Price", "Availability"],
            Platform::Quotes => ["Text", "Author", "Tags"],
            Platform::Imdb => ["Rank", "Title", "Rating"],
            Platform::GlobalNews => ["Title", "Theme", "Summary"],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
