//! Configuration for the ask endpoint

use serde::{Deserialize, Serialize};
use log::debug;

/// Fixed sub-path appended to every base URL
pub const ASK_PATH: &str = "/api/ask";

pub const DEFAULT_MODEL: &str = "flash";

pub const DEFAULT_TIMEOUT_SECS: u64 = 40;

fn default_model() -> String
{   DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64
{   DEFAULT_TIMEOUT_SECS
}

fn default_insecure_skip_verify() -> bool
{   true
}

/// Ask client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskConfig
{   /// Root address of the remote service
    #[serde(default)]
    pub base_url: String
  , /// Model used when the caller does not name one
    #[serde(default = "default_model")]
    pub default_model: String
  , /// Upper bound on the whole call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64
  , /// Skip TLS certificate verification.
    ///
    /// Defaults to `true` to match the behaviour of the service's
    /// reference client. The peer's identity is NOT verified while this
    /// is set; do not rely on it in production.
    #[serde(default = "default_insecure_skip_verify")]
    pub insecure_skip_verify: bool
}

impl AskConfig
{   pub fn new(base_url: impl Into<String>) -> Self
    {   AskConfig
        {   base_url: base_url.into()
          , ..AskConfig::default()
        }
    }

    /// Load a config from a JSON document; absent keys take defaults
    pub fn from_json_str(json: &str)
      -> Result<Self, serde_json::Error>
    {   let config: AskConfig = serde_json::from_str(json)?;
        debug!("Loaded config for base URL: {:?}", config.base_url);
        Ok(config)
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self
    {   self.default_model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self
    {   self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_insecure_skip_verify(mut self, skip: bool) -> Self
    {   self.insecure_skip_verify = skip;
        self
    }

    /// Full target address, or `None` when the base URL is blank
    pub fn endpoint(&self) -> Option<String>
    {   endpoint_for(&self.base_url)
    }
}

impl Default for AskConfig
{   fn default() -> Self
    {   AskConfig
        {   base_url: String::new()
          , default_model: default_model()
          , timeout_secs: DEFAULT_TIMEOUT_SECS
          , insecure_skip_verify: true
        }
    }
}

/// Trim every trailing slash from `base_url` and append the ask path
pub fn endpoint_for(base_url: &str) -> Option<String>
{   if base_url.trim().is_empty()
    {   return None;
    }
    Some(format!("{}{}", base_url.trim_end_matches('/'), ASK_PATH))
}
