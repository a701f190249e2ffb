//! Formatting and delivery of messages to a Discord channel webhook.

mod discord_client;
mod discord_client_error;
pub mod message;
mod payload_splitter;

pub use discord_client::{DiscordClient, DiscordWebhookClient};
pub use discord_client_error::NotifyError;
pub use payload_splitter::{split_content, DISCORD_MESSAGE_LIMIT};
