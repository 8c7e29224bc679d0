//! Downloading file content
//!
//! The [`Downloader`] trait is the seam the fetch pipeline downloads through;
//! [`HttpDownloader`] is the real implementation.

pub mod http;

use reqwest::blocking::Client;

use crate::config::Settings;
use crate::error::{Result, fetch};

/// Fetches the bytes behind a URL
pub trait Downloader {
    /// Download `url`; any non-2xx response is an error carrying the status
    fn download(&self, url: &str) -> Result<Vec<u8>>;
}

/// Downloader backed by a blocking HTTP client
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: http::build_client(settings)?,
        })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url, "downloading");

        let response = http::send(self.client.get(url), url)?;
        let bytes = response
            .bytes()
            .map_err(|e| fetch::request_failed(url, http::interpret_error(&e)))?;

        tracing::debug!(url, bytes = bytes.len(), "downloaded");
        Ok(bytes.to_vec())
    }
}
