use std::sync::LazyLock;

use scraper::Html;

use super::text::{Scope, Sel};
use super::Extractor;
use crate::error::ExtractError;
use crate::platform::Platform;
use crate::record::{Project, Record};

static CARD: LazyLock<Sel> = LazyLock::new(|| Sel::new(".project-card"));
static TITLE: LazyLock<Sel> = LazyLock::new(|| Sel::new(".project-title"));
static THEME: LazyLock<Sel> = LazyLock::new(|| Sel::new(".project-theme"));
static SUMMARY: LazyLock<Sel> = LazyLock::new(|| Sel::new(".project-description"));

/// GlobalGiving project listings.
pub struct GlobalNews;

impl Extractor for GlobalNews {
    fn platform(&self) -> Platform {
        Platform::GlobalNews
    }

    fn extract(&self, doc: &Html) -> Result<Vec<Record>, ExtractError> {
        doc.select(&CARD.selector)
            .map(|el| -> Result<Record, ExtractError> {
                let card = Scope::new(Platform::GlobalNews, &CARD, el);
                Ok(Record::Project(Project {
                    title: card.text_of(&TITLE)?,
                    theme: card.text_of(&THEME)?,
                    summary: card.text_of(&SUMMARY)?,
                }))
            })
            .collect()
    }
}
