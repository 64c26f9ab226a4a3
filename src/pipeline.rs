use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use reqwest::header::HeaderMap;
use tracing::{debug, info};

use crate::error::OutputError;
use crate::fetch::PageSource;
use crate::output;
use crate::parser;
use crate::record::{self, Record};
use crate::table::Table;

/// Per-run fetch counts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScrapeStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
}

/// One run: fetch each URL in order, extract records, then clean and write once.
pub struct Scraper<S> {
    source: S,
    headers: HeaderMap,
    delay: Duration,
}

impl<S: PageSource> Scraper<S> {
    pub fn new(source: S, headers: HeaderMap, delay: Duration) -> Self {
        Scraper {
            source,
            headers,
            delay,
        }
    }

    /// Fetch and extract every URL, pausing `delay` between fetches.
    /// Fetch failures skip the URL; an extraction fault aborts the run.
    pub fn collect(&self, urls: &[String], platform_id: &str) -> Result<(Vec<Record>, ScrapeStats)> {
        let mut records = Vec::new();
        let mut stats = ScrapeStats {
            total: urls.len(),
            ..Default::default()
        };

        for (i, url) in urls.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            println!("Fetching data from {}...", url);
            let Some(html) = self.source.fetch(url, &self.headers) else {
                stats.errors += 1;
                continue;
            };
            stats.ok += 1;

            let page = parser::extract(&html, platform_id)?;
            debug!(url = url.as_str(), records = page.len(), "extracted");
            records.extend(page);
        }

        info!(
            "Fetched {} pages ({} ok, {} errors), {} records",
            stats.total,
            stats.ok,
            stats.errors,
            records.len()
        );
        Ok((records, stats))
    }

    /// Collect, then normalize and write to `destination`. Returns the number
    /// of rows written, or `None` when nothing was extracted.
    pub fn run(&self, urls: &[String], platform_id: &str, destination: &Path) -> Result<Option<usize>> {
        let (records, _) = self.collect(urls, platform_id)?;
        Ok(normalize_and_write(&records, destination)?)
    }
}

/// Clean `records` into a table and write it as CSV. An empty batch writes
/// nothing.
pub fn normalize_and_write(records: &[Record], destination: &Path) -> Result<Option<usize>, OutputError> {
    if records.is_empty() {
        println!("No data extracted. Skipping cleaning and saving.");
        return Ok(None);
    }

    println!("Cleaning data...");
    let table = Table::from_records(records).normalize(record::schema_for(records));
    output::write_csv(&table, destination)?;
    println!("Data saved to {}", destination.display());
    Ok(Some(table.rows.len()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Instant;

    use super::*;
    use crate::error::ExtractError;

    /// Pages served from memory; URLs without a page fail like a dead host.
    struct Pages(HashMap<String, String>);

    impl Pages {
        fn new(pages: &[(&str, &str)]) -> Self {
            Pages(
                pages
                    .iter()
                    .map(|(url, fixture)| {
                        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
                        (url.to_string(), html)
                    })
                    .collect(),
            )
        }
    }

    impl PageSource for Pages {
        fn fetch(&self, url: &str, _headers: &HeaderMap) -> Option<String> {
            self.0.get(url).cloned()
        }
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn scraper(pages: Pages) -> Scraper<Pages> {
        Scraper::new(pages, HeaderMap::new(), Duration::ZERO)
    }

    #[test]
    fn two_books_pages_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scraped_data.csv");
        let s = scraper(Pages::new(&[("p1", "books_page1"), ("p2", "books_page2")]));

        let rows = s.run(&urls(&["p1", "p2"]), "books", &out).unwrap();

        assert_eq!(rows, Some(4));
        let written = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name,Price,Availability",
                "A Light in the Attic,£51.77,In stock",
                "Tipping the Velvet,£53.74,In stock",
                "In Her Wake,£12.84,In stock",
                "How Music Works,£37.32,In stock",
            ]
        );
    }

    #[test]
    fn same_page_twice_is_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scraped_data.csv");
        let s = scraper(Pages::new(&[("p1", "books_page1")]));

        let rows = s.run(&urls(&["p1", "p1"]), "books", &out).unwrap();

        assert_eq!(rows, Some(2));
    }

    #[test]
    fn failed_fetch_is_skipped() {
        let s = scraper(Pages::new(&[("q", "quotes")]));
        let (records, stats) = s.collect(&urls(&["dead", "q"]), "quotes").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            stats,
            ScrapeStats {
                total: 2,
                ok: 1,
                errors: 1
            }
        );
    }

    #[test]
    fn nothing_fetched_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scraped_data.csv");
        let s = scraper(Pages::new(&[]));

        let rows = s.run(&urls(&["a", "b"]), "books", &out).unwrap();

        assert_eq!(rows, None);
        assert!(!out.exists());
    }

    #[test]
    fn unknown_platform_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scraped_data.csv");
        let s = scraper(Pages::new(&[("p1", "books_page1")]));

        assert_eq!(s.run(&urls(&["p1"]), "bookz", &out).unwrap(), None);
        assert!(!out.exists());
    }

    #[test]
    fn extraction_fault_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scraped_data.csv");
        let mut pages = Pages::new(&[("good", "books_page1")]);
        pages.0.insert(
            "broken".into(),
            r#"<article class="product_pod"><h3><a href="x">x</a></h3></article>"#.into(),
        );
        let s = scraper(pages);

        let err = s.run(&urls(&["good", "broken"]), "books", &out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::MissingAttribute { .. })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn quotes_end_to_end_fills_empty_tags() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("quotes.csv");
        let mut pages = Pages::new(&[("q", "quotes")]);
        pages.0.insert(
            "untagged".into(),
            r#"<div class="quote"><span class="text">Hi</span><small class="author">Anon</small></div>"#.into(),
        );
        let s = scraper(pages);

        s.run(&urls(&["q", "untagged"]), "quotes", &out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Text,Author,Tags");
        assert_eq!(lines[2], "“It is our choices that show what we truly are.”,J.K. Rowling,\"wisdom, life\"");
        assert_eq!(lines[3], "Hi,Anon,Unknown");
    }

    /// Records when each fetch happened; every page is empty.
    #[derive(Default)]
    struct Clock(RefCell<Vec<Instant>>);

    impl PageSource for Clock {
        fn fetch(&self, _url: &str, _headers: &HeaderMap) -> Option<String> {
            self.0.borrow_mut().push(Instant::now());
            Some(String::new())
        }
    }

    #[test]
    fn pause_only_between_fetches() {
        let delay = Duration::from_millis(100);
        let s = Scraper::new(Clock::default(), HeaderMap::new(), delay);

        s.collect(&urls(&["a", "b", "c"]), "books").unwrap();
        let done = Instant::now();

        let times = s.source.0.borrow();
        assert_eq!(times.len(), 3);
        for pair in times.windows(2) {
            assert!(pair[1] - pair[0] >= delay, "gap {:?} shorter than {:?}", pair[1] - pair[0], delay);
        }
        // No trailing sleep after the last URL.
        assert!(done - times[2] < delay, "trailing wait {:?}", done - times[2]);
    }

    #[test]
    fn single_url_does_not_sleep() {
        let delay = Duration::from_millis(500);
        let s = Scraper::new(Clock::default(), HeaderMap::new(), delay);

        let start = Instant::now();
        s.collect(&urls(&["a"]), "books").unwrap();

        assert!(start.elapsed() < delay);
        assert_eq!(s.source.0.borrow().len(), 1);
    }
}
