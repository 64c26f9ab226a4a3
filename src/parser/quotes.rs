use std::sync::LazyLock;

use scraper::Html;

use super::text::{Scope, Sel};
use super::Extractor;
use crate::error::ExtractError;
use crate::platform::Platform;
use crate::record::{Quote, Record};

static QUOTE: LazyLock<Sel> = LazyLock::new(|| Sel::new(".quote"));
static TEXT: LazyLock<Sel> = LazyLock::new(|| Sel::new(".text"));
static AUTHOR: LazyLock<Sel> = LazyLock::new(|| Sel::new(".author"));
static TAG: LazyLock<Sel> = LazyLock::new(|| Sel::new(".tags .tag"));

/// quotes.toscrape.com pages.
pub struct Quotes;

impl Extractor for Quotes {
    fn platform(&self) -> Platform {
        Platform::Quotes
    }

    fn extract(&self, doc: &Html) -> Result<Vec<Record>, ExtractError> {
        doc.select(&QUOTE.selector)
            .map(|el| -> Result<Record, ExtractError> {
                let quote = Scope::new(Platform::Quotes, &QUOTE, el);
                Ok(Record::Quote(Quote {
                    text: quote.text_of(&TEXT)?,
                    author: quote.text_of(&AUTHOR)?,
                    tags: quote.all_text(&TAG).join(", "),
                }))
            })
            .collect()
    }
}
