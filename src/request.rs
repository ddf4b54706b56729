//! Request payload and the uniform result record

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound payload posted to the ask endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest
{   pub prompt: String
  , pub model: String
}

impl AskRequest
{   pub fn new(
      prompt: impl Into<String>
    , model: impl Into<String>
    ) -> Self
    {   AskRequest
        {   prompt: prompt.into()
          , model: model.into()
        }
    }
}

impl Default for AskRequest
{   fn default() -> Self
    {   AskRequest::new("", crate::config::DEFAULT_MODEL)
    }
}

/// Fields copied from a successful response body.
///
/// Open record: every field is optional, values are kept as raw JSON
/// and unknown keys are ignored. Absent or `null` fields serialize as
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskReply
{   #[serde(rename = "agentID")]
    pub agent_id: Option<Value>
  , pub agent: Option<Value>
  , pub model: Option<Value>
  , pub response: Option<Value>
  , pub error: Option<Value>
  , pub timestamp: Option<Value>
}

/// Failure record; `raw` is only set when a response body was received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskFailure
{   pub message: String
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>
}

/// Result of one ask call, discriminated by `status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AskResult
{   Ok(AskReply)
  , Error(AskFailure)
}

impl AskResult
{   pub fn is_ok(&self) -> bool
    {   matches!(self, AskResult::Ok(_))
    }

    pub fn is_error(&self) -> bool
    {   !self.is_ok()
    }

    /// `"ok"` or `"error"`
    pub fn status(&self) -> &'static str
    {   match self
        {   AskResult::Ok(_) => "ok"
          , AskResult::Error(_) => "error"
        }
    }

    pub fn reply(&self) -> Option<&AskReply>
    {   match self
        {   AskResult::Ok(reply) => Some(reply)
          , AskResult::Error(_) => None
        }
    }

    pub fn message(&self) -> Option<&str>
    {   match self
        {   AskResult::Error(failure) => Some(failure.message.as_str())
          , AskResult::Ok(_) => None
        }
    }

    pub fn raw(&self) -> Option<&str>
    {   match self
        {   AskResult::Error(failure) => failure.raw.as_deref()
          , AskResult::Ok(_) => None
        }
    }

    /// The record as a JSON object
    pub fn to_value(&self) -> Value
    {   // Derived Serialize on String/Value fields cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<crate::error::Error> for AskResult
{   fn from(err: crate::error::Error) -> Self
    {   AskResult::Error(AskFailure
        {   raw: err.raw().map(str::to_string)
          , message: err.to_string()
        })
    }
}

impl From<AskReply> for AskResult
{   fn from(reply: AskReply) -> Self
    {   AskResult::Ok(reply)
    }
}
