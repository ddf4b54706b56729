use std::fmt;

/// Custom error type for askai operations
/// Display output is the `message` of the matching error record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Base URL is empty or blank
    MissingBaseUrl
  , /// Transport failed before a response arrived
    RequestError(String)
  , /// Response arrived with a non-200 status
    HttpError
    {   status: u16
      , raw: String
    }
  , /// 200 response whose body is not a JSON object
    JsonDecodeError
    {   raw: String
    }
  , /// API misuse caught before any request was attempted
    UsageError(String)
}

impl Error
{   /// Raw response body, for the variants that carry one
    pub fn raw(&self) -> Option<&str>
    {   match self
        {   Error::HttpError { raw, .. }
          | Error::JsonDecodeError { raw } => Some(raw.as_str())
          , _ => None
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingBaseUrl => {
              write!(f, "URL API belum ditentukan")
            }
          , Error::RequestError(detail) => {
              write!(f, "Request Error: {}", detail)
            }
          , Error::HttpError { status, .. } => {
              write!(f, "HTTP Error ({})", status)
            }
          , Error::JsonDecodeError { .. } => {
              write!(f, "JSON Decode Error")
            }
          , Error::UsageError(msg) => {
              write!(f, "Usage Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Bare messages are transport failure details
impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::RequestError(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::RequestError(s.to_string())
    }
}
