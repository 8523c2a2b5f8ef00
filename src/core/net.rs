// src/core/net.rs

use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};
use tracing::debug;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

/// Blocking GET. Anything but HTTP 200 is an error.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::HttpStatus { status, url: url.to_string() });
        }
        Ok(resp.text()?)
    }
}
