//! Turns today's releases into a [MessageData] to send to Discord.

mod release_message;

pub use release_message::build_release_message;
