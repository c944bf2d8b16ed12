//! Application layer - command handlers wiring domain logic to ports.

mod create_session;
mod handle_webhook;

pub use create_session::{CreateSessionError, CreateSessionHandler};
pub use handle_webhook::{HandleWebhookHandler, WebhookOutcome};
