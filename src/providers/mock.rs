use std::fmt;
use std::str::FromStr;

const MOCK_NOTE: &str = "This is a mock response since no API keys \
are configured.\nTo enable real AI assistance, set ANTHROPIC_API_KEY \
or OPENAI_API_KEY.";

/// Wording used when a reply has to be synthesized locally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MockStyle
{   /// Restates the request with a stub `solution()`
    #[default]
    Fallback
  , /// Prefixes a "Thinking about" line
    Thinking
  , /// Echoes the request back verbatim
    Echo
}

impl FromStr for MockStyle
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   match s.to_ascii_lowercase().as_str()
        {   "fallback" => Ok(MockStyle::Fallback)
          , "thinking" => Ok(MockStyle::Thinking)
          , "echo" => Ok(MockStyle::Echo)
          , other => Err(crate::error::Error::InvalidConfiguration(
              format!("unknown mock style: {}", other)
            ))
        }
    }
}

impl fmt::Display for MockStyle
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   let name = match self
        {   MockStyle::Fallback => "fallback"
          , MockStyle::Thinking => "thinking"
          , MockStyle::Echo => "echo"
        };
        f.write_str(name)
    }
}

/// Local stand-in for the remote service
///
/// Pure: the reply depends only on the style and the input text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockClient
{   style: MockStyle
}

impl MockClient
{   pub fn new(style: MockStyle) -> Self
    {   MockClient { style }
    }

    pub fn respond(&self, prompt: &str) -> String
    {   match self.style
        {   MockStyle::Fallback => fallback_reply(prompt)
          , MockStyle::Thinking => thinking_reply(prompt)
          , MockStyle::Echo => echo_reply(prompt)
        }
    }
}

fn fallback_reply(prompt: &str) -> String
{   format!(
"I understand you're asking about: \"{prompt}\"

Here's a basic approach:

```python
def solution():
    # Implementation for: {prompt}
    # TODO: Add specific logic here
    return \"result\"
```

{MOCK_NOTE}
")
}

fn thinking_reply(prompt: &str) -> String
{   format!(
"Thinking about: {prompt}

I understand you want help with '{prompt}'. Here's a simple implementation:

```python
def solution():
    # Solution for: {prompt}
    return 'Hello from mock Aider!'
```

{MOCK_NOTE}
")
}

fn echo_reply(prompt: &str) -> String
{   format!(
"I received your message: '{prompt}'

Here's a simple response to demonstrate streaming:

```text
You said: {prompt}
```

{MOCK_NOTE}
")
}
