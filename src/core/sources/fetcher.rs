use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

/// Fetch a remote page as text. The shared client carries the outbound
/// timeout, so a stalled source fails the request instead of hanging the
/// calling handler.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await?;
    debug!(url, bytes = body.len(), "fetched source page");
    Ok(body)
}
