pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod failover;
pub mod client;
pub mod session;

/*

simple-aider: a small console that forwards each typed line to a
chat-completion endpoint (OpenRouter) and streams the reply back
word by word. Without a key, or when the remote call fails, a local
mock reply is streamed instead, so a turn always gets an answer.

simple-aider/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and shared reply types
│   ├── main.rs         # Binary: logging, env config, stdin/stdout
│   ├── error.rs        # Error type
│   ├── config.rs       # AiderConfig, read once from the environment
│   ├── request.rs      # Chat-completion wire types
│   ├── providers/
│   │   ├── mod.rs
│   │   ├── openrouter.rs   # Remote strategy
│   │   └── mock.rs         # Local strategy
│   ├── failover.rs     # ChatReply -> reply text, degrading to mock
│   ├── client.rs       # ResponseProvider
│   └── session.rs      # InteractiveSession loop
└── tests/

*/

/// Outcome of one remote call: reply text or the reason it failed
pub type ChatReply = Result<String, crate::error::Error>;

pub use client::{Responder, ResponseProvider};
pub use config::AiderConfig;
pub use error::Error;
pub use failover::{ReplySource, Resolved};
pub use providers::MockStyle;
pub use session::{InteractiveSession, Jitter, Pacer, SessionEnd, PROMPT};
