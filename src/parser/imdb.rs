use std::sync::LazyLock;

use scraper::Html;

use super::text::{Scope, Sel};
use super::Extractor;
use crate::error::ExtractError;
use crate::platform::Platform;
use crate::record::{Movie, Record};

static ROW: LazyLock<Sel> = LazyLock::new(|| Sel::new(".lister-list tr"));
static TITLE_CELL: LazyLock<Sel> = LazyLock::new(|| Sel::new(".titleColumn"));
static TITLE_LINK: LazyLock<Sel> = LazyLock::new(|| Sel::new(".titleColumn a"));
static RATING: LazyLock<Sel> = LazyLock::new(|| Sel::new(".imdbRating strong"));

/// IMDb Top 250 chart (legacy table layout).
pub struct Imdb;

impl Extractor for Imdb {
    fn platform(&self) -> Platform {
        Platform::Imdb
    }

    fn extract(&self, doc: &Html) -> Result<Vec<Record>, ExtractError> {
        doc.select(&ROW.selector)
            .map(|el| -> Result<Record, ExtractError> {
                let row = Scope::new(Platform::Imdb, &ROW, el);
                Ok(Record::Movie(Movie {
                    rank: rank(&row.text_of(&TITLE_CELL)?),
                    title: row.text_of(&TITLE_LINK)?,
                    rating: row.text_of(&RATING)?,
                }))
            })
            .collect()
    }
}

/// Everything before the first `.` of the title cell. A cell without a `.`
/// yields the whole text.
fn rank(cell: &str) -> String {
    cell.split('.').next().unwrap_or_default().to_string()
}
