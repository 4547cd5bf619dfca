mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::LookupError;

/// GETs `url` and decodes the JSON body.
///
/// A 404 yields `Ok(None)` so callers can map it to their own not-found
/// case. Any other non-success status is a [`LookupError::Fetch`].
pub async fn fetch_json<C, T>(client: &C, url: Url) -> Result<Option<T>, LookupError>
where
    C: HttpClient + ?Sized,
    T: DeserializeOwned,
{
    debug!(url = %url, "GET");
    let req = reqwest::Request::new(reqwest::Method::GET, url);
    let resp = client.execute(req).await?;

    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(LookupError::Fetch {
            message: format!("API returned status {}: {}", status, body),
        });
    }

    let bytes = resp.bytes().await?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}
