//! Degrade-to-mock logic for failed remote replies

use log::{debug, warn};

use crate::providers::MockClient;

/// Where a reply ended up coming from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource
{   /// Remote service answered
    Remote
  , /// No credential configured
    MockMode
  , /// Remote call failed; carries the failure
    Degraded(crate::error::Error)
}

/// A reply together with its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved
{   pub text: String
  , pub source: ReplySource
}

impl Resolved
{   pub fn is_mock(&self) -> bool
    {   self.source != ReplySource::Remote
    }
}

/// Mock reply used when no credential is configured
pub fn mock_only(prompt: &str, mock: &MockClient) -> Resolved
{   debug!("Mock mode, answering locally");
    Resolved
    {   text: mock.respond(prompt)
      , source: ReplySource::MockMode
    }
}

/// Unwrap a remote reply, replacing any failure with a mock reply
///
/// A successful but blank reply is also replaced, so the caller always
/// has at least one word to stream.
pub fn resolve(
  reply: crate::ChatReply
, prompt: &str
, mock: &MockClient
) -> Resolved
{   match reply
    {   Ok(text) if !text.trim().is_empty() => Resolved
        {   text
          , source: ReplySource::Remote
        }
      , Ok(_) => {
          warn!("OpenRouter returned an empty reply, using mock reply");
          Resolved
          {   text: mock.respond(prompt)
            , source: ReplySource::Degraded(
                crate::error::Error::ParseError(
                  "empty completion content".to_string()
                )
              )
          }
        }
      , Err(e) => {
          warn!("OpenRouter API Error: {}, using mock reply", e);
          Resolved
          {   text: mock.respond(prompt)
            , source: ReplySource::Degraded(e)
          }
        }
    }
}
