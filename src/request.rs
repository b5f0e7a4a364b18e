//! Chat-completion wire types

use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "You are an AI coding assistant. \
Help with code, explain concepts, and suggest improvements.
Keep responses concise and practical. \
When making code changes, show the specific lines to modify.
Focus on being helpful and accurate.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

/// One outbound chat-completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub max_tokens: usize
  , pub temperature: f32
}

impl ChatRequest
{   /// Fixed system prompt followed by `prompt` as the only user turn
    pub fn new(
      prompt: &str
    , model: &str
    , max_tokens: usize
    , temperature: f32
    ) -> Self
    {   ChatRequest
        {   model: model.to_string()
          , messages: vec![
              ChatMessage::system(SYSTEM_PROMPT)
            , ChatMessage::user(prompt)
            ]
          , max_tokens
          , temperature
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

impl ChatResponse
{   /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str>
    {   self.choices.first().map(|c| c.message.content.as_str())
    }
}
