// src/core/net.rs

// Blocking HTTP GET (reqwest) behind a small trait so parsers can be fed canned pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Status + body of one GET.
#[derive(Clone, Debug)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    /// Only a plain 200 counts.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

pub trait Fetch {
    /// `Err` only for connection-level failures; HTTP errors come back as a `Page`.
    fn get(&self, url: &str) -> Result<Page>;
}

/// GET `url` and return the body, turning anything but 200 into `ScrapeError::Status`.
pub fn http_get(fetch: &dyn Fetch, url: &str) -> Result<String> {
    let page = fetch.get(url)?;
    if !page.is_success() {
        return Err(ScrapeError::Status { url: s!(url), status: page.status });
    }
    Ok(page.body)
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// `timeout: None` waits as long as the server takes.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<Page> {
        let t = std::time::Instant::now();
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        logd!("GET {url} -> {status} ({} bytes) in {:?}", body.len(), t.elapsed());
        Ok(Page { status, body })
    }
}

/// Join a site-relative path (or pass through an absolute URL).
pub fn resolve(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return s!(path);
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
