//! Shared HTTP client setup and error interpretation
//!
//! This module handles:
//! - Building the blocking client with the configured timeout and user agent
//! - Turning transport failures into user-friendly messages
//! - Treating every non-2xx response as an error carrying its status

use reqwest::blocking::{Client, RequestBuilder, Response};

use crate::config::settings::{Settings, USER_AGENT};
use crate::error::{Result, fetch};

type ErrorCheck = fn(&reqwest::Error) -> bool;

const ERROR_CLASSIFICATIONS: &[(ErrorCheck, &str)] = &[
    (reqwest::Error::is_timeout, "request timed out"),
    (reqwest::Error::is_connect, "could not connect to host"),
    (reqwest::Error::is_redirect, "too many redirects"),
    (reqwest::Error::is_decode, "could not decode response body"),
    (reqwest::Error::is_body, "failed reading response body"),
    (reqwest::Error::is_builder, "invalid request"),
];

/// Build a blocking HTTP client from settings
pub fn build_client(settings: &Settings) -> Result<Client> {
    Client::builder()
        .timeout(settings.timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| fetch::request_failed("<client>", interpret_error(&e)))
}

/// Describe a transport error for the user
pub fn interpret_error(err: &reqwest::Error) -> String {
    let kind = ERROR_CLASSIFICATIONS
        .iter()
        .find(|(check, _)| check(err))
        .map(|(_, message)| *message);

    match kind {
        Some(kind) => format!("{kind}: {err}"),
        None => err.to_string(),
    }
}

/// Send a request, mapping failures and non-2xx statuses to errors
pub fn send(request: RequestBuilder, url: &str) -> Result<Response> {
    let response = request
        .send()
        .map_err(|e| fetch::request_failed(url, interpret_error(&e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch::http_status(url, status.as_u16()));
    }

    Ok(response)
}
