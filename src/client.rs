use log::{debug, trace, error, info};
use serde_json::Value;

use crate::error::Error;
use crate::transport::{HttpTransport, RawResponse, Transport};
use crate::{AskConfig, AskReply, AskRequest, AskResult};

/// Client for the `/api/ask` endpoint.
///
/// Holds no per-call state; one instance can serve any number of calls.
/// Every call makes at most one transport request and never retries.
pub struct AskClient<T = HttpTransport>
{   config: AskConfig
  , transport: T
}

impl AskClient<HttpTransport>
{   /// Create a client backed by reqwest
    pub fn new(config: AskConfig) -> Result<Self, Error>
    {   debug!("Creating AskClient for: {:?}", config.base_url);
        let transport = HttpTransport::new(&config)?;
        Ok(AskClient { config, transport })
    }
}

impl<T: Transport> AskClient<T>
{   pub fn with_transport(config: AskConfig, transport: T) -> Self
    {   AskClient { config, transport }
    }

    pub fn config(&self) -> &AskConfig
    {   &self.config
    }

    pub fn transport(&self) -> &T
    {   &self.transport
    }

    /// Ask with an explicit model
    pub async fn ask(
      &self
    , prompt: impl Into<String>
    , model: impl Into<String>
    ) -> AskResult
    {   self.send(AskRequest::new(prompt, model)).await
    }

    /// Ask with the configured default model
    pub async fn ask_default(&self, prompt: impl Into<String>) -> AskResult
    {   let model = self.config.default_model.clone();
        self.send(AskRequest::new(prompt, model)).await
    }

    /// Send a prepared payload; every failure becomes an error record
    pub async fn send(&self, request: AskRequest) -> AskResult
    {   match self.try_send(request).await
        {   Ok(reply) => {
              debug!("Ask succeeded");
              AskResult::Ok(reply)
            }
          , Err(e) => {
              error!("Ask failed: {}", e);
              AskResult::from(e)
            }
        }
    }

    async fn try_send(&self, request: AskRequest)
      -> Result<AskReply, Error>
    {   let url = self.config.endpoint()
          .ok_or(Error::MissingBaseUrl)?;

        debug!("Posting to {} with model: {}", url, request.model);
        trace!("Ask payload: {:?}", request);

        let raw = self.transport.post_json(&url, &request).await?;
        decode_reply(raw)
    }
}

/// Map a received response onto the reply fields
pub fn decode_reply(raw: RawResponse) -> Result<AskReply, Error>
{   if raw.status != 200
    {   return Err(Error::HttpError
        {   status: raw.status
          , raw: raw.body
        });
    }

    let value: Value = match serde_json::from_str(&raw.body)
    {   Ok(value) => value
      , Err(e) => {
          trace!("Body is not JSON: {}", e);
          return Err(Error::JsonDecodeError { raw: raw.body });
        }
    };

    if !value.is_object()
    {   trace!("Body is JSON but not an object");
        return Err(Error::JsonDecodeError { raw: raw.body });
    }

    // Unreachable for an object: every reply field is an Option<Value>
    serde_json::from_value(value)
      .map_err(|_| Error::JsonDecodeError { raw: raw.body })
}

/// One-shot ask against `base_url`.
///
/// A blank `base_url` is reported before any client is built.
pub async fn ask_ai(
  prompt: &str
, model: &str
, base_url: &str
) -> AskResult
{   let config = AskConfig::new(base_url);
    if config.endpoint().is_none()
    {   error!("Ask skipped: base URL not set");
        return AskResult::from(Error::MissingBaseUrl);
    }

    match AskClient::new(config)
    {   Ok(client) => client.ask(prompt, model).await
      , Err(e) => AskResult::from(e)
    }
}

/// Blocking form of [`ask_ai`] for synchronous callers.
///
/// Drives the call on a private current-thread runtime. Calling it from
/// inside a tokio runtime yields a `Usage Error` record and sends
/// nothing, rather than blocking the runtime's worker.
pub fn ask_ai_blocking(
  prompt: &str
, model: &str
, base_url: &str
) -> AskResult
{   if tokio::runtime::Handle::try_current().is_ok()
    {   error!("ask_ai_blocking called inside an async runtime");
        return AskResult::from(Error::UsageError(
          "ask_ai_blocking called from within an async runtime".to_string()
        ));
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()
    {   Ok(runtime) => runtime
      , Err(e) => {
          error!("Failed to start runtime: {}", e);
          return AskResult::from(Error::from(e.to_string()));
        }
    };

    info!("Running blocking ask");
    runtime.block_on(ask_ai(prompt, model, base_url))
}
