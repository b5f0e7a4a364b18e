use log::{debug, info, error};

use crate::config::{AiderConfig, API_KEY_VAR};
use crate::failover::{self, Resolved};
use crate::providers::{MockClient, OpenRouterClient};

/// Anything that can turn one line of user text into one reply
#[async_trait::async_trait]
pub trait Responder
{   /// Never fails; a reply is always produced
    async fn respond(&self, prompt: &str) -> String;
}

#[async_trait::async_trait]
impl<T> Responder for &T
where T: Responder + Sync + ?Sized
{   async fn respond(&self, prompt: &str) -> String
    {   (**self).respond(prompt).await
    }
}

/// Turns user text into a reply, hiding remote failures
pub struct ResponseProvider
{   remote: Option<OpenRouterClient>
  , mock: MockClient
}

impl ResponseProvider
{   /// Create a provider from configuration
    ///
    /// Without a credential no HTTP client is built and every request
    /// is answered by the mock strategy.
    pub fn new(config: &AiderConfig) -> Self
    {   debug!("Creating ResponseProvider");
        let mock = MockClient::new(config.mock_style);

        let remote = if config.is_mock_mode()
        {   info!("No {} found, using mock mode", API_KEY_VAR);
            None
        } else
        {   match OpenRouterClient::new(config)
            {   Ok(client) => {
                  info!("Using OpenRouter with model: {}", client.model());
                  Some(client)
                }
              , Err(e) => {
                  error!("{}, using mock mode", e);
                  None
                }
            }
        };

        ResponseProvider { remote, mock }
    }

    /// True when requests go to the remote service first
    pub fn has_remote(&self) -> bool
    {   self.remote.is_some()
    }

    /// Produce a reply for `prompt`, falling back to the mock strategy
    pub async fn process_request(&self, prompt: &str) -> String
    {   self.process_request_traced(prompt).await.text
    }

    /// Same as `process_request`, also reporting where the reply came from
    pub async fn process_request_traced(&self, prompt: &str) -> Resolved
    {   match &self.remote
        {   None => failover::mock_only(prompt, &self.mock)
          , Some(client) => {
              let reply = client.send_prompt(prompt).await;
              failover::resolve(reply, prompt, &self.mock)
            }
        }
    }
}

#[async_trait::async_trait]
impl Responder for ResponseProvider
{   async fn respond(&self, prompt: &str) -> String
    {   self.process_request(prompt).await
    }
}
