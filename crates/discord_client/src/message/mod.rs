mod message_data;
mod message_data_builder;

pub use message_data::MessageData;
pub use message_data_builder::{markdown_link, MessageDataBuilder, MessageDataPart, SectionHeadingLevel};
