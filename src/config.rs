//! Configuration for the remote chat-completion service and the console

use std::fmt;
use std::time::Duration;
use log::{debug, warn};

use crate::providers::mock::MockStyle;

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const MODEL_VAR: &str = "OPENROUTER_MODEL";
pub const DISPLAY_MODEL_VAR: &str = "AIDER_MODEL";
pub const MOCK_STYLE_VAR: &str = "AIDER_MOCK_STYLE";
pub const WORD_DELAY_VAR: &str = "AIDER_WORD_DELAY_MS";
pub const WORD_JITTER_VAR: &str = "AIDER_WORD_JITTER_MS";

pub const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";
pub const DEFAULT_DISPLAY_MODEL: &str = "auto-detect";
pub const OPENROUTER_API_BASE: &str
  = "https://openrouter.ai/api/v1";
pub const APP_NAME: &str = "DevTail Gateway";
pub const REFERER: &str = "https://github.com/devtail/gateway";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_TOKENS: usize = 1024;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_WORD_DELAY_MS: u64 = 20;

/// Process-wide configuration, read once at startup
#[derive(Clone, PartialEq)]
pub struct AiderConfig
{   /// Bearer credential; `None` selects mock mode
    pub api_key: Option<String>
  , /// Model sent to the API
    pub model: String
  , /// Model label shown in the banner only
    pub display_model: String
  , /// API base URL
    pub api_base: String
  , /// Sent as `X-Title`
    pub app_name: String
  , /// Sent as `HTTP-Referer`
    pub referer: String
  , /// Upper bound on one remote call, in seconds
    pub timeout_secs: u64
  , pub max_tokens: usize
  , pub temperature: f32
  , /// Wording of the mock strategy
    pub mock_style: MockStyle
  , /// Pause after each streamed word, in milliseconds
    pub word_delay_ms: u64
  , /// Random extra pause per word, up to this many milliseconds
    pub word_jitter_ms: u64
}

impl Default for AiderConfig
{   fn default() -> Self
    {   AiderConfig
        {   api_key: None
          , model: DEFAULT_MODEL.to_string()
          , display_model: DEFAULT_DISPLAY_MODEL.to_string()
          , api_base: OPENROUTER_API_BASE.to_string()
          , app_name: APP_NAME.to_string()
          , referer: REFERER.to_string()
          , timeout_secs: DEFAULT_TIMEOUT_SECS
          , max_tokens: DEFAULT_MAX_TOKENS
          , temperature: DEFAULT_TEMPERATURE
          , mock_style: MockStyle::default()
          , word_delay_ms: DEFAULT_WORD_DELAY_MS
          , word_jitter_ms: 0
        }
    }
}

impl fmt::Debug for AiderConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("AiderConfig")
          .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
          .field("model", &self.model)
          .field("display_model", &self.display_model)
          .field("api_base", &self.api_base)
          .field("app_name", &self.app_name)
          .field("referer", &self.referer)
          .field("timeout_secs", &self.timeout_secs)
          .field("max_tokens", &self.max_tokens)
          .field("temperature", &self.temperature)
          .field("mock_style", &self.mock_style)
          .field("word_delay_ms", &self.word_delay_ms)
          .field("word_jitter_ms", &self.word_jitter_ms)
          .finish()
    }
}

impl AiderConfig
{   /// Read configuration from the process environment
    pub fn from_env() -> Self
    {   Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    ///
    /// Empty values count as unset. Values that fail to parse are
    /// reported and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String>
    {   let get = |key: &str| {
          lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        };

        let mut config = AiderConfig::default();
        config.api_key = get(API_KEY_VAR);

        if let Some(model) = get(MODEL_VAR)
        {   config.model = model;
        }
        if let Some(display) = get(DISPLAY_MODEL_VAR)
        {   config.display_model = display;
        }
        if let Some(style) = get(MOCK_STYLE_VAR)
        {   match style.parse::<MockStyle>()
            {   Ok(s) => config.mock_style = s
              , Err(e) => warn!("Ignoring {}: {}", MOCK_STYLE_VAR, e)
            }
        }
        for (var, slot) in [
          (WORD_DELAY_VAR, &mut config.word_delay_ms)
        , (WORD_JITTER_VAR, &mut config.word_jitter_ms)
        ]
        {   if let Some(value) = get(var)
            {   match value.parse::<u64>()
                {   Ok(ms) => *slot = ms
                  , Err(e) => warn!("Ignoring {}={:?}: {}", var, value, e)
                }
            }
        }

        debug!("Loaded configuration: {:?}", config);
        config
    }

    /// True when no credential is configured
    pub fn is_mock_mode(&self) -> bool
    {   self.api_key.is_none()
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_secs(self.timeout_secs)
    }

    pub fn word_delay(&self) -> Duration
    {   Duration::from_millis(self.word_delay_ms)
    }
}
