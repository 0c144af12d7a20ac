// src/core/net.rs
// Uncached HTTP(S) GET. One attempt, no retry, no overall timeout.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};

use crate::config::consts::USER_AGENT;
use crate::error::LoadError;

/// GET `url` and return the body as text.
///
/// Any non-2xx status is an error; the body is not read in that case.
pub fn http_get(url: &str) -> Result<String, LoadError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()?;

    let resp = client
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    Ok(resp.text()?)
}
