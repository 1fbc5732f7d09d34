use std::io::Read;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Issues one GET and returns the body, whatever the status code.
///
/// The client has no timeout. A body cut short by the server is returned
/// as far as it arrived.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(FetchError::Client)?;

    let mut response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("Feed responded with status {}, keeping body anyway", status);
    }

    let mut body = Vec::new();
    if let Err(e) = response.read_to_end(&mut body) {
        log::warn!(
            "Reading response body stopped after {} bytes: {}",
            body.len(),
            e
        );
    }

    log::info!("Fetched {} bytes (status {})", body.len(), status);
    Ok(body)
}
