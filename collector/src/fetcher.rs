use std::time::Duration;

use crate::error::PullError;

/// Published download endpoint for the consolidated SDN list.
pub const SDN_XML_URL: &str = "https://sanctionslistservice.ofac.treas.gov/api/download/sdn.xml";

/// Returns the SDN publication URL, honouring the `SDN_XML_URL` env var.
pub fn sdn_url() -> String {
    std::env::var("SDN_XML_URL").unwrap_or_else(|_| SDN_XML_URL.to_string())
}

/// Download the SDN XML publication.
///
/// A single GET, no retries. Anything other than `200 OK` is a failure so
/// the caller never parses an error page as XML.
pub async fn fetch_sdn(url: &str, timeout: Duration) -> Result<Vec<u8>, PullError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| PullError::Fetch {
            url: url.to_string(),
            source,
        })?;

    tracing::info!(target: "fetch", "requesting SDN publication from {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| PullError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    tracing::debug!(target: "fetch", "response status {status}");
    if status != reqwest::StatusCode::OK {
        return Err(PullError::FetchStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| PullError::Fetch {
            url: url.to_string(),
            source,
        })?;
    tracing::info!(target: "fetch", "fetched {} bytes", body.len());
    Ok(body.to_vec())
}
