//! Transports that carry an ask request to the remote service

pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

/// Status and undecoded body of a received response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse
{   pub status: u16
  , pub body: String
}

/// One POST of a JSON payload, one response back.
///
/// Implementations must not retry: a failure before a response is
/// received is reported as `Error::RequestError`.
#[async_trait]
pub trait Transport: Send + Sync
{   async fn post_json(
      &self
    , url: &str
    , payload: &crate::AskRequest
    ) -> Result<RawResponse, crate::error::Error>;
}
