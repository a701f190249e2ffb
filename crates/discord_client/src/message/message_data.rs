//! The finished text of a Discord message.

use crate::payload_splitter::split_content;

/// Formatted message data to send via Discord. The content is Discord-flavoured markdown and may
/// exceed what a single webhook call accepts; see [MessageData::split].
#[derive(Debug, Clone, PartialEq)]
pub struct MessageData {
    pub content: String,
}

impl MessageData {
    pub fn new(content: &str) -> MessageData {
        MessageData {
            content: String::from(content),
        }
    }

    /// Length as Discord counts it, in characters rather than bytes.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Break the content into parts of at most `limit` characters each.
    pub fn split(&self, limit: usize) -> Vec<String> {
        split_content(&self.content, limit)
    }
}

impl From<&str> for MessageData {
    fn from(m: &str) -> Self {
        Self::new(m)
    }
}
