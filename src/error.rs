// src/error.rs
use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} for {url}")]
    HttpStatus { status: StatusCode, url: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: expected `key = value`", path.display())]
    Resource { path: PathBuf, line: usize },
    #[error("{} is empty", path.display())]
    EmptyResource { path: PathBuf },
    #[error("operator page is missing {0}")]
    MissingElement(&'static str),
}
