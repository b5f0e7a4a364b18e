use log::{debug, trace, error};

use crate::config::{AiderConfig, API_KEY_VAR};
use crate::request::{ChatRequest, ChatResponse};

/// Blocking-style chat-completion client for OpenRouter
///
/// One request at a time; each call is awaited to completion or timeout.
#[derive(Debug, Clone)]
pub struct OpenRouterClient
{   api_key: String
  , model: String
  , api_base: String
  , app_name: String
  , referer: String
  , max_tokens: usize
  , temperature: f32
  , http_client: reqwest::Client
}

impl OpenRouterClient
{   /// Build a client from configuration
    ///
    /// Fails with `MissingApiKey` when no credential is configured.
    pub fn new(config: &AiderConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating OpenRouterClient for: {}", config.model);

        let api_key = config.api_key.clone()
          .ok_or_else(|| {
            crate::error::Error::MissingApiKey(API_KEY_VAR.to_string())
          })?;

        let http_client = reqwest::Client::builder()
          .timeout(config.timeout())
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(OpenRouterClient
        {   api_key
          , model: config.model.clone()
          , api_base: config.api_base.trim_end_matches('/').to_string()
          , app_name: config.app_name.clone()
          , referer: config.referer.clone()
          , max_tokens: config.max_tokens
          , temperature: config.temperature
          , http_client
        })
    }

    pub fn model(&self) -> &str
    {   &self.model
    }

    /// Send one user turn and return the first choice's content
    pub async fn send_prompt(&self, prompt: &str)
      -> crate::ChatReply
    {   debug!("Handling send_prompt for: {}", self.model);

        let request = ChatRequest::new(
          prompt
        , &self.model
        , self.max_tokens
        , self.temperature
        );

        trace!("OpenRouter request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .header("HTTP-Referer", &self.referer)
          .header("X-Title", &self.app_name)
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("OpenRouter response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenRouter API error: {}", error_text);
            return Err(crate::error::Error::ApiError
            {   status: status.as_u16()
              , body: error_text
            });
        }

        let body = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          crate::error::Error::from(e)
        })?;

        let chat_response: ChatResponse
          = serde_json::from_str(&body).map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        if let Some(choice) = chat_response.choices.first()
        {   trace!(
              "OpenRouter finish_reason: {:?}", choice.finish_reason
            );
        }

        chat_response.first_content()
          .map(str::to_string)
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })
    }
}
