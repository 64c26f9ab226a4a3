pub mod books;
pub mod global_news;
pub mod imdb;
pub mod quotes;
pub mod text;

use scraper::Html;
use tracing::debug;

use crate::error::ExtractError;
use crate::platform::Platform;
use crate::record::Record;

/// Per-platform field extraction over a parsed document.
pub trait Extractor {
    fn platform(&self) -> Platform;

    /// One record per matching container, in document order.
    fn extract(&self, doc: &Html) -> Result<Vec<Record>, ExtractError>;
}

pub fn extractor_for(platform: Platform) -> &'static dyn Extractor {
    match platform {
        Platform::Books => &books::Books,
        Platform::Quotes => &quotes::Quotes,
        Platform::Imdb => &imdb::Imdb,
        Platform::GlobalNews => &global_news::GlobalNews,
    }
}

/// Parse markup and extract records for the platform named `platform_id`.
/// An unknown id extracts nothing.
pub fn extract(markup: &str, platform_id: &str) -> Result<Vec<Record>, ExtractError> {
    let Some(platform) = Platform::from_id(platform_id) else {
        debug!(platform = platform_id, "no extractor registered");
        return Ok(Vec::new());
    };
    let doc = Html::parse_document(markup);
    let extractor = extractor_for(platform);
    let records = extractor.extract(&doc)?;
    debug!(platform = %extractor.platform(), records = records.len(), "page parsed");
    Ok(records)
}
