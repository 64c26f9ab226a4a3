use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::error::HeaderError;

/// Where page markup comes from. `None` means "skip this URL".
pub trait PageSource {
    fn fetch(&self, url: &str, headers: &HeaderMap) -> Option<String>;
}

/// Single blocking GET per URL, library-default timeouts, no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: Client::new(),
        }
    }

    fn try_fetch(&self, url: &str, headers: &HeaderMap) -> reqwest::Result<String> {
        let response = self.client.get(url).headers(headers.clone()).send()?;
        debug!(url, status = %response.status(), "response");
        response.error_for_status()?.text()
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str, headers: &HeaderMap) -> Option<String> {
        match self.try_fetch(url, headers) {
            Ok(body) => Some(body),
            Err(e) => {
                eprintln!("Error fetching {}: {}", url, e);
                None
            }
        }
    }
}

/// Build request headers from `Name: Value` arguments. `user_agent` fills in
/// `User-Agent` unless an explicit header already sets it.
pub fn parse_headers(args: &[String], user_agent: Option<&str>) -> Result<HeaderMap, HeaderError> {
    let mut headers = HeaderMap::new();
    for arg in args {
        let (name, value) = arg
            .split_once(':')
            .ok_or_else(|| HeaderError::Malformed(arg.clone()))?;
        let name = name.trim();
        let header = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HeaderError::InvalidName(name.to_string()))?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|_| HeaderError::InvalidValue(name.to_string()))?;
        headers.append(header, value);
    }

    if let Some(ua) = user_agent {
        if !headers.contains_key(USER_AGENT) {
            let value = HeaderValue::from_str(ua)
                .map_err(|_| HeaderError::InvalidValue(USER_AGENT.as_str().to_string()))?;
            headers.insert(USER_AGENT, value);
        }
    }
    Ok(headers)
}
