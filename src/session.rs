//! Line-oriented console loop with word-paced output

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use log::{debug, trace, warn, error};

use rand::Rng;

use crate::client::Responder;
use crate::config::AiderConfig;

/// Marker written whenever the session is ready for the next turn
pub const PROMPT: &str = "aider> ";

const EXIT_COMMANDS: [&str; 4] = ["exit", "quit", "/exit", "/quit"];

/// Decides how long to pause after each streamed word
pub trait Pacer: Send + Sync
{   fn delay_after(&self, index: usize, word: &str) -> Duration;
}

/// Fixed pause after every word; `Duration::ZERO` disables pacing
impl Pacer for Duration
{   fn delay_after(&self, _index: usize, _word: &str) -> Duration
    {   *self
    }
}

/// Base pause plus a random extra of up to `spread`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter
{   pub base: Duration
  , pub spread: Duration
}

impl Pacer for Jitter
{   fn delay_after(&self, _index: usize, _word: &str) -> Duration
    {   let spread_ms = self.spread.as_millis() as u64;
        if spread_ms == 0
        {   return self.base;
        }
        let extra = rand::thread_rng().gen_range(0..=spread_ms);
        self.base + Duration::from_millis(extra)
    }
}

/// Pacing configured by `word_delay_ms` and `word_jitter_ms`
pub fn pacer_for(config: &AiderConfig) -> Box<dyn Pacer>
{   if config.word_jitter_ms == 0
    {   Box::new(config.word_delay())
    } else
    {   Box::new(Jitter
        {   base: config.word_delay()
          , spread: Duration::from_millis(config.word_jitter_ms)
        })
    }
}

/// Why the session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd
{   /// Input stream closed
    EndOfInput
  , /// User typed an exit keyword
    ExitCommand
  , /// Interrupt received while reading or streaming
    Interrupted
}

/// What one input line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn<'a>
{   Empty
  , Exit
  , Prompt(&'a str)
}

impl<'a> Turn<'a>
{   pub fn parse(line: &'a str) -> Self
    {   let line = line.trim();
        if line.is_empty()
        {   Turn::Empty
        } else if is_exit_command(line)
        {   Turn::Exit
        } else
        {   Turn::Prompt(line)
        }
    }
}

/// `exit`, `quit`, `/exit` or `/quit` in any letter case
pub fn is_exit_command(line: &str) -> bool
{   let line = line.trim();
    EXIT_COMMANDS.iter().any(|c| line.eq_ignore_ascii_case(c))
}

enum Streamed
{   Done
  , Interrupted
}

/// Reads turns, dispatches them and streams replies word by word
pub struct InteractiveSession<P, W>
{   responder: P
  , out: W
  , pacer: Box<dyn Pacer>
  , display_model: String
  , turns: usize
}

impl<P, W> InteractiveSession<P, W>
where P: Responder
    , W: AsyncWrite + Unpin + Send
{   pub fn new(
      responder: P
    , out: W
    , pacer: Box<dyn Pacer>
    , display_model: impl Into<String>
    ) -> Self
    {   InteractiveSession
        {   responder
          , out
          , pacer
          , display_model: display_model.into()
          , turns: 0
        }
    }

    /// Number of lines handed to the responder so far
    pub fn turns(&self) -> usize
    {   self.turns
    }

    pub fn output(&self) -> &W
    {   &self.out
    }

    pub fn into_output(self) -> W
    {   self.out
    }

    /// Run until end of input, an exit keyword or `interrupt` resolves
    ///
    /// Only a failure to read `input` is returned as an error. A turn
    /// whose output fails is logged and the prompt is offered again.
    pub async fn run<R, I>(
      &mut self
    , mut input: R
    , interrupt: I
    ) -> Result<SessionEnd, crate::error::Error>
    where R: AsyncBufRead + Unpin
        , I: Future<Output = ()>
    {   tokio::pin!(interrupt);
        self.write_banner().await?;

        let mut raw = Vec::new();
        let end = loop
        { raw.clear();
          let next = tokio::select!
          { biased;
            _ = &mut interrupt => break SessionEnd::Interrupted
          , read = input.read_until(b'\n', &mut raw) => read
          };

          match next
          {   Ok(0) => {
                debug!("Input closed");
                break SessionEnd::EndOfInput;
              }
            , Ok(_) => {}
            , Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e.into());
              }
          }

          let line = match std::str::from_utf8(&raw)
          {   Ok(line) => line
            , Err(e) => {
                warn!("Skipping line that is not valid UTF-8: {}", e);
                self.write_prompt().await?;
                continue;
              }
          };

          match Turn::parse(line)
          {   Turn::Empty => {
                self.write_prompt().await?;
              }
            , Turn::Exit => {
                debug!("Exit command: {:?}", line.trim());
                break SessionEnd::ExitCommand;
              }
            , Turn::Prompt(text) => {
                self.turns += 1;
                debug!("Dispatching turn {}", self.turns);
                let reply = self.responder.respond(text).await;

                match self.stream_reply(&reply, &mut interrupt).await
                {   Ok(Streamed::Done) => {}
                  , Ok(Streamed::Interrupted) => {
                      break SessionEnd::Interrupted;
                    }
                  , Err(e) => {
                      warn!("Turn {} failed: {}", self.turns, e);
                      self.write_prompt().await?;
                    }
                }
              }
          }
        };

        if end == SessionEnd::Interrupted
        {   self.out.write_all(b"\nExiting...\n").await?;
        }
        self.out.flush().await?;
        debug!("Session ended: {:?} after {} turns", end, self.turns);
        Ok(end)
    }

    async fn write_banner(&mut self)
      -> Result<(), crate::error::Error>
    {   let banner = format!(
          "Simple Aider v{}\nModel: {}\n\n{}"
        , env!("CARGO_PKG_VERSION")
        , self.display_model
        , PROMPT
        );
        self.out.write_all(banner.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn write_prompt(&mut self)
      -> Result<(), crate::error::Error>
    {   self.out.write_all(PROMPT.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }

    /// Write each word plus a space, flushing and pausing between words
    async fn stream_reply<I>(
      &mut self
    , reply: &str
    , interrupt: &mut Pin<&mut I>
    ) -> Result<Streamed, crate::error::Error>
    where I: Future<Output = ()>
    {   for (index, word) in reply.split_whitespace().enumerate()
        {   self.out.write_all(word.as_bytes()).await?;
            self.out.write_all(b" ").await?;
            self.out.flush().await?;

            let delay = self.pacer.delay_after(index, word);
            trace!("Streamed word {}, pausing {:?}", index, delay);
            tokio::select!
            { biased;
              _ = interrupt.as_mut() => {
                debug!("Interrupt observed after word {}", index);
                return Ok(Streamed::Interrupted);
              }
            , _ = tokio::time::sleep(delay) => {}
            }
        }

        self.out.write_all(b"\n\n").await?;
        self.out.write_all(PROMPT.as_bytes()).await?;
        self.out.flush().await?;
        Ok(Streamed::Done)
    }
}
