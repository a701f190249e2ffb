//! Utilities for building [MessageData] structs for delivery of Discord messages.

use crate::message::MessageData;
use std::fmt::Write;

const DEFAULT_BREAK: &str = "\n";
const LIST_INDENT: &str = "  ";

/// Implementors may implement this trait to allow a struct to format its data for display in Discord.
pub trait MessageDataPart {
    /// Render this part as Discord markdown.
    ///
    /// [break_character] separates this part from the next one; implementors append it themselves.
    fn to_markdown(&self, break_character: &str) -> String;
}

/// The heading levels Discord renders: `#`, `##` and `###`.
pub enum SectionHeadingLevel {
    One,
    Two,
    Three,
}

/// Builds [MessageData] structs with markdown formatting. Forward-only.
pub struct MessageDataBuilder {
    parts: String,
}

impl MessageDataBuilder {
    pub fn new() -> Self {
        MessageDataBuilder {
            parts: String::new(),
        }
    }

    /// Adds a separator after the last part; in markdown this produces a blank line.
    pub fn break_character(&mut self) {
        self.parts.push_str(DEFAULT_BREAK);
    }

    /// Adds a heading on its own line.
    ///
    /// # Examples
    /// `## Movies`
    pub fn add_heading(&mut self, heading: &SectionHeadingLevel, text: &str) {
        let marker = match heading {
            SectionHeadingLevel::One => "#",
            SectionHeadingLevel::Two => "##",
            SectionHeadingLevel::Three => "###",
        };
        write!(self.parts, "{} {}{}", marker, text, DEFAULT_BREAK)
            .expect("Failed to write to underlying String.");
    }

    /// Adds a line of text followed by a line break.
    pub fn add_line(&mut self, line: &str) {
        self.parts.push_str(line);
        self.parts.push_str(DEFAULT_BREAK);
    }

    /// Adds a bulleted list item, indented by `depth` levels.
    ///
    /// # Examples
    /// Depth 0: `- text`
    /// Depth 1: `  - text`
    pub fn add_list_item(&mut self, depth: usize, text: &str) {
        write!(
            self.parts,
            "{}- {}{}",
            LIST_INDENT.repeat(depth),
            text,
            DEFAULT_BREAK
        )
        .expect("Failed to write to underlying String.");
    }

    /// Adds the data from some implementor of [MessageDataPart] to the end of the resulting [MessageData]
    /// as-is; the part supplies its own line breaks.
    pub fn add_message_part(&mut self, part: impl MessageDataPart) {
        self.parts.push_str(&part.to_markdown(DEFAULT_BREAK));
    }

    /// Copy the contents of this builder to a new [MessageData].
    ///
    /// Leading and trailing whitespace, including trailing line breaks, is trimmed.
    pub fn to_message_data(&self) -> MessageData {
        MessageData::new(self.parts.trim())
    }
}

impl Default for MessageDataBuilder {
    fn default() -> Self {
        MessageDataBuilder::new()
    }
}

/// A markdown link, e.g. `[TMDB](https://www.themoviedb.org/movie/1)`.
pub fn markdown_link(text: &str, url: &str) -> String {
    format!("[{}]({})", text, url)
}

#[cfg(test)]
mod tests {
    use crate::message::message_data_builder::{
        markdown_link, MessageDataBuilder, MessageDataPart, SectionHeadingLevel,
    };

    #[test]
    pub fn add_line_returns_result_without_trailing_break_given_single_use() {
        // Arrange
        let mut builder = MessageDataBuilder::new();
        builder.add_line("Nothing today.");

        // Act
        let actual = builder.to_message_data();

        // Assert
        assert_eq!("Nothing today.", actual.content);
    }

    #[test]
    pub fn add_heading_inserts_expected() {
        // Arrange
        let expected = "## Test 123\n\nSome line";
        let mut builder = MessageDataBuilder::new();
        builder.add_heading(&SectionHeadingLevel::Two, "Test 123");
        builder.break_character();
        builder.add_line("Some line");

        // Act
        let actual = builder.to_message_data();

        // Assert
        assert_eq!(expected, actual.content);
    }

    #[test]
    pub fn add_list_item_indents_by_depth() {
        // Arrange
        let expected = "- Parent\n  - Child\n    - Grandchild";
        let mut builder = MessageDataBuilder::new();
        builder.add_list_item(0, "Parent");
        builder.add_list_item(1, "Child");
        builder.add_list_item(2, "Grandchild");

        // Act
        let actual = builder.to_message_data();

        // Assert
        assert_eq!(expected, actual.content);
    }

    struct TestMessageDataPart;

    impl MessageDataPart for TestMessageDataPart {
        fn to_markdown(&self, break_character: &str) -> String {
            format!("**Testing** test{}", break_character)
        }
    }

    #[test]
    pub fn add_message_part_inserts_as_is() {
        // Arrange
        let expected = "**Testing** test\n- 1";
        let mut builder = MessageDataBuilder::new();
        builder.add_message_part(TestMessageDataPart);
        builder.add_list_item(0, "1");

        // Act
        let actual = builder.to_message_data();

        // Assert
        assert_eq!(expected, actual.content);
    }

    #[test]
    pub fn markdown_link_formats_text_and_url() {
        assert_eq!(
            "[TVDB](https://thetvdb.com/series/1)",
            markdown_link("TVDB", "https://thetvdb.com/series/1")
        );
    }
}
