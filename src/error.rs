use thiserror::Error;

use crate::platform::Platform;

/// A page did not have the structure its platform's extractor expects.
/// Fatal for the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{platform}: no `{selector}` element inside `{container}`")]
    MissingElement {
        platform: Platform,
        container: &'static str,
        selector: &'static str,
    },
    #[error("{platform}: `{selector}` element has no `{attribute}` attribute")]
    MissingAttribute {
        platform: Platform,
        selector: &'static str,
        attribute: &'static str,
    },
}

/// A `-H "Name: Value"` argument that cannot become a request header.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("header `{0}` is not in `Name: Value` form")]
    Malformed(String),
    #[error("invalid header name `{0}`")]
    InvalidName(String),
    #[error("invalid value for header `{0}`")]
    InvalidValue(String),
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
