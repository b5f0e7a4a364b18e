//! Reply strategies: the remote service and its local stand-in

pub mod mock;
pub mod openrouter;

// Re-export for convenience
pub use mock::{MockClient, MockStyle};
pub use openrouter::OpenRouterClient;
