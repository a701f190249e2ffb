//! Errors raised while delivering a message to Discord.

use reqwest::StatusCode;
use thiserror::Error;

/// The notification could not be delivered. Unlike fetch failures these end the run.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("The message to send to Discord was empty.")]
    EmptyPayload,
    #[error("Could not reach the Discord webhook: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Discord rejected message part {part} of {total} with status {status}: {body}")]
    Status {
        part: usize,
        total: usize,
        status: StatusCode,
        body: String,
    },
}
