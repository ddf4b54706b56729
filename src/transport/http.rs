use async_trait::async_trait;
use log::{debug, trace, error};
use std::time::Duration;

use super::{RawResponse, Transport};

/// reqwest-backed transport
pub struct HttpTransport
{   http_client: reqwest::Client
}

impl HttpTransport
{   /// Build the underlying client with the configured timeout and
    /// certificate policy
    pub fn new(config: &crate::AskConfig)
      -> Result<Self, crate::error::Error>
    {   debug!(
          "Creating HttpTransport (timeout {}s, skip verify: {})"
        , config.timeout_secs
        , config.insecure_skip_verify
        );

        let http_client = reqwest::Client::builder()
          .timeout(Duration::from_secs(config.timeout_secs))
          .danger_accept_invalid_certs(config.insecure_skip_verify)
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::from(error_detail(&e))
          })?;

        Ok(HttpTransport { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport
{   async fn post_json(
      &self
    , url: &str
    , payload: &crate::AskRequest
    ) -> Result<RawResponse, crate::error::Error>
    {   let response = self.http_client
          .post(url)
          .header("Content-Type", "application/json")
          .json(payload)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(error_detail(&e))
          })?;

        let status = response.status().as_u16();
        trace!("Ask response status: {}", status);

        // Body read failures happen before a full response is in hand
        let body = response.text().await
          .map_err(|e| {
            error!("Failed to read response body: {}", e);
            crate::error::Error::from(error_detail(&e))
          })?;

        Ok(RawResponse { status, body })
    }
}

/// reqwest's message followed by its source chain
fn error_detail(err: &reqwest::Error) -> String
{   let mut detail = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source
    {   detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    detail
}
