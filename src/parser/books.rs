use std::sync::LazyLock;

use scraper::Html;

use super::text::{Scope, Sel};
use super::Extractor;
use crate::error::ExtractError;
use crate::platform::Platform;
use crate::record::{Book, Record};

static PRODUCT: LazyLock<Sel> = LazyLock::new(|| Sel::new(".product_pod"));
static HEADING: LazyLock<Sel> = LazyLock::new(|| Sel::new("h3"));
static LINK: LazyLock<Sel> = LazyLock::new(|| Sel::new("a"));
static PRICE: LazyLock<Sel> = LazyLock::new(|| Sel::new(".price_color"));
static AVAILABILITY: LazyLock<Sel> = LazyLock::new(|| Sel::new(".availability"));

/// books.toscrape.com catalogue pages.
pub struct Books;

impl Extractor for Books {
    fn platform(&self) -> Platform {
        Platform::Books
    }

    fn extract(&self, doc: &Html) -> Result<Vec<Record>, ExtractError> {
        doc.select(&PRODUCT.selector)
            .map(|el| -> Result<Record, ExtractError> {
                let pod = Scope::new(Platform::Books, &PRODUCT, el);
                // Full title lives in the attribute; the link text is truncated.
                let name = pod.within(pod.one(&HEADING)?).attr_of(&LINK, "title")?;
                Ok(Record::Book(Book {
                    name,
                    price: pod.text_of(&PRICE)?,
                    availability: pod.text_of(&AVAILABILITY)?,
                }))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(fixture: &str) -> Result<Vec<Record>, ExtractError> {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
        Books.extract(&Html::parse_document(&html))
    }

    #[test]
    fn catalogue_page() {
        let records = parse("books_page1").unwrap();
        assert_eq!(
            records,
            vec![
                Record::Book(Book {
                    name: "A Light in the Attic".into(),
                    price: "£51.77".into(),
                    availability: "In stock".into(),
                }),
                Record::Book(Book {
                    name: "Tipping the Velvet".into(),
                    price: "£53.74".into(),
                    availability: "In stock".into(),
                }),
            ]
        );
    }

    #[test]
    fn missing_title_attribute_is_fatal() {
        let doc = Html::parse_document(
            r#"<article class="product_pod"><h3><a href="x.html">Untitled</a></h3>
            <p class="price_color">£1.00</p><p class="availability">In stock</p></article>"#,
        );
        let err = Books.extract(&doc).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingAttribute { attribute: "title", .. }
        ));
    }

    #[test]
    fn missing_price_is_fatal() {
        let doc = Html::parse_document(
            r#"<article class="product_pod"><h3><a title="T">T</a></h3>
            <p class="availability">In stock</p></article>"#,
        );
        let err = Books.extract(&doc).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingElement { selector: ".price_color", .. }
        ));
    }

    #[test]
    fn page_without_products_is_empty() {
        let doc = Html::parse_document("<html><body><p>No results</p></body></html>");
        assert!(Books.extract(&doc).unwrap().is_empty());
    }
}
