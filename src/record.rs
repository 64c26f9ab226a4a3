use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    pub price: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    /// Tag labels joined with ", "; empty when the quote has no tags.
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub rank: String,
    pub title: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub theme: String,
    pub summary: String,
}

/// One extracted entity, tagged by the platform that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Book(Book),
    Quote(Quote),
    Movie(Movie),
    Project(Project),
}

impl Record {
    pub fn platform(&self) -> Platform {
        match self {
            Record::Book(_) => Platform::Books,
            Record::Quote(_) => Platform::Quotes,
            Record::Movie(_) => Platform::Imdb,
            Record::Project(_) => Platform::GlobalNews,
        }
    }

    /// Values in the order of `self.platform().columns()`.
    pub fn values(&self) -> [&str; 3] {
        match self {
            Record::Book(b) => [b.name.as_str(), b.price.as_str(), b.availability.as_str()],
            Record::Quote(q) => [q.text.as_str(), q.author.as_str(), q.tags.as_str()],
            Record::Movie(m) => [m.rank.as_str(), m.title.as_str(), m.rating.as_str()],
            Record::Project(p) => [p.title.as_str(), p.theme.as_str(), p.summary.as_str()],
        }
    }

    /// (column, value) pairs for this record.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.platform().columns().into_iter().zip(self.values())
    }
}

/// Schema for a batch of records: the highest-priority platform present.
/// An empty batch falls back to global_news.
pub fn schema_for(records: &[Record]) -> Platform {
    Platform::ALL
        .into_iter()
        .find(|p| records.iter().any(|r| r.platform() == *p))
        .unwrap_or(Platform::GlobalNews)
}
