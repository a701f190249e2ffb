//! Splitting of message content that is longer than Discord accepts in one message.
//!
//! Content is cut at line boundaries so markdown lists stay intact. A single line that is longer
//! than the limit on its own is cut at character boundaries. Each part has its trailing line
//! breaks removed, and parts that would be blank are dropped.

/// Discord rejects webhook messages whose `content` exceeds this many characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Split `content` into parts of at most `limit` characters, in order. Joining the parts with
/// line breaks gives back the original text, apart from blank lines that fall on a part boundary.
pub fn split_content(content: &str, limit: usize) -> Vec<String> {
    assert!(limit > 0, "limit must be positive");

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in content.split_inclusive('\n') {
        let line_len = line.chars().count();
        if current_len + line_len > limit {
            flush(&mut parts, &mut current);
            current_len = 0;
        }

        if line_len <= limit {
            current.push_str(line);
            current_len += line_len;
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut pieces = chars.chunks(limit).peekable();
        while let Some(piece) = pieces.next() {
            if pieces.peek().is_some() {
                let mut full: String = piece.iter().collect();
                flush(&mut parts, &mut full);
            } else {
                current = piece.iter().collect();
                current_len = piece.len();
            }
        }
    }
    flush(&mut parts, &mut current);

    parts
}

fn flush(parts: &mut Vec<String>, current: &mut String) {
    let part = current.trim_end_matches('\n');
    if !part.trim().is_empty() {
        parts.push(String::from(part));
    }
    current.clear();
}
