use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::Result;

pub(crate) fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("comic-mirror/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Requests a page and returns the HTML body. A non-2xx status is an error.
/// Returns the transport error type directly so the caller can decide
/// whether the failure is recoverable for its iteration.
pub(crate) async fn fetch_page(client: &Client, url: &str) -> reqwest::Result<String> {
    debug!(url, "requesting page");
    let res = client.get(url).send().await?;
    res.error_for_status()?.text().await
}

/// Requests an image. Only a transport failure is an error: a response with
/// an error status is logged and its body returned anyway, so the caller
/// persists whatever the archive served.
pub(crate) async fn fetch_image(client: &Client, url: &str) -> reqwest::Result<Vec<u8>> {
    debug!(url, "downloading image");
    let res = client.get(url).send().await?;
    if let Err(err) = res.error_for_status_ref() {
        warn!(url, %err, "image request returned an error status");
    }
    Ok(res.bytes().await?.to_vec())
}
