//! Helpers for sending long or formatted text.
//!
//! Telegram rejects texts over [`MessageLimit::TEXT_LENGTH`] characters, so
//! long replies are split first. Splits prefer line boundaries and keep
//! fenced code blocks balanced in every chunk.

use std::time::Duration;

use tracing::warn;

use tgkit_core::constants::{MessageLimit, ParseMode};

use crate::bot::Bot;
use crate::types::{ChatId, Message};

const FENCE_CLOSE: &str = "\n```";
/// Characters kept free when wrapping long lines, for a reopened fence header.
const WRAP_HEADROOM: usize = 16;

const MARKDOWN_SPECIALS: &[char] = &['_', '*', '`', '['];
const MARKDOWN_V2_SPECIALS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Split `text` into chunks of at most `limit` characters.
///
/// Lines are kept whole where possible; longer lines are wrapped at the last
/// space. A chunk that ends inside a code fence is closed with ```` ``` ````
/// and the next chunk reopens it with the same language tag. Room for the
/// closing fence is always reserved, so chunks stay within `limit` unless a
/// fence's language tag is unusually long.
pub fn split_text(text: &str, limit: usize) -> Vec<String> {
    if text.chars().count() <= limit {
        return vec![text.to_string()];
    }

    let close_len = FENCE_CLOSE.len();
    let wrap_width = limit.saturating_sub(WRAP_HEADROOM + close_len).max(1);

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    // Length of the reopened fence header at the start of `current`.
    let mut header_len = 0;
    let mut open_fence: Option<String> = None;

    for line in text.split('\n') {
        for piece in hard_wrap(line, wrap_width) {
            let piece_len = piece.chars().count();
            let separator = usize::from(current_len > 0);

            if current_len > header_len && current_len + separator + piece_len + close_len > limit {
                if open_fence.is_some() {
                    current.push_str(FENCE_CLOSE);
                }
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
                header_len = 0;
                if let Some(lang) = &open_fence {
                    current.push_str("```");
                    current.push_str(lang);
                    current_len = 3 + lang.chars().count();
                    header_len = current_len;
                }
            }

            if current_len > 0 {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(piece);
            current_len += piece_len;

            if let Some(rest) = piece.trim_start().strip_prefix("```") {
                open_fence = match open_fence {
                    Some(_) => None,
                    None => Some(rest.trim().to_string()),
                };
            }
        }
    }

    if current_len > 0 {
        chunks.push(current);
    }
    chunks
}

/// Break a single line into pieces of at most `width` characters,
/// preferring the last space before the boundary.
fn hard_wrap(line: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = line;
    loop {
        let Some((cut, _)) = rest.char_indices().nth(width) else {
            pieces.push(rest);
            return pieces;
        };
        let split_at = match rest[..cut].rfind(' ') {
            Some(space) if space > 0 => space,
            _ => cut,
        };
        pieces.push(&rest[..split_at]);
        rest = rest[split_at..].trim_start_matches(' ');
        if rest.is_empty() {
            return pieces;
        }
    }
}

/// Escape `text` so it renders literally under `parse_mode`.
pub fn escape(text: &str, parse_mode: ParseMode) -> String {
    if parse_mode == ParseMode::HTML {
        return text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
    }

    let specials = if parse_mode == ParseMode::MARKDOWN_V2 {
        MARKDOWN_V2_SPECIALS
    } else {
        MARKDOWN_SPECIALS
    };

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        if specials.contains(&ch) || (parse_mode == ParseMode::MARKDOWN_V2 && ch == '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Send `text` to `chat_id`, split to fit [`MessageLimit::TEXT_LENGTH`].
///
/// Each chunk is tried as escaped MarkdownV2 first and falls back to plain
/// text if Telegram rejects it. Failed chunks are logged and skipped; the
/// messages that did go out are returned. Consecutive chunks are spaced by
/// 100ms to stay clear of flood limits.
pub async fn send_long_text(bot: &Bot, chat_id: impl Into<ChatId>, text: &str) -> Vec<Message> {
    let chat_id = chat_id.into();
    // Escaping can grow the text, so leave headroom before it is applied.
    let chunks = split_text(text, MessageLimit::TEXT_LENGTH.value() / 2);
    let mut sent = Vec::with_capacity(chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        let escaped = escape(chunk, ParseMode::MARKDOWN_V2);
        let result = match bot
            .send_message(chat_id.clone(), &escaped, Some(ParseMode::MARKDOWN_V2))
            .await
        {
            Ok(msg) => Ok(msg),
            Err(_) => bot.send_message(chat_id.clone(), chunk, None).await,
        };

        match result {
            Ok(msg) => sent.push(msg),
            Err(e) => warn!(error = %e, chunk_index = i, chat_id = %chat_id, "failed to send text chunk"),
        }

        if i + 1 < chunks.len() {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }

    sent
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 4096;

    #[test]
    fn short_text_is_single_chunk() {
        assert_eq!(split_text("Hello, world!", LIMIT), vec!["Hello, world!"]);
    }

    #[test]
    fn text_at_limit_is_single_chunk() {
        let text = "a".repeat(MessageLimit::TEXT_LENGTH.into());
        assert_eq!(split_text(&text, LIMIT).len(), 1);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let text = "é".repeat(LIMIT);
        assert_eq!(split_text(&text, LIMIT).len(), 1);
    }

    #[test]
    fn over_limit_splits_on_newline() {
        let line = "a".repeat(2000);
        let text = format!("{line}\n{line}\n{line}");
        let chunks = split_text(&text, LIMIT);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], format!("{line}\n{line}"));
        assert_eq!(chunks[1], line);
    }

    #[test]
    fn very_long_single_line_is_wrapped() {
        let text = "x".repeat(9000);
        let chunks = split_text(&text, LIMIT);
        assert!(chunks.len() >= 3);
        for c in &chunks {
            assert!(c.chars().count() <= LIMIT, "chunk too large: {}", c.len());
        }
        assert_eq!(chunks.concat().len(), 9000);
    }

    #[test]
    fn code_fence_reopened_with_language() {
        let mut text = String::from("```python\n");
        for _ in 0..100 {
            text.push_str("print('hello world this is a reasonably long line of python code')\n");
        }
        text.push_str("```\n");

        let chunks = split_text(&text, LIMIT);
        assert!(chunks.len() >= 2);
        assert!(chunks[0].ends_with("\n```"));
        assert!(chunks[1].starts_with("```python\n"));
        for c in &chunks {
            assert!(c.chars().count() <= LIMIT);
            assert_eq!(c.matches("```").count() % 2, 0, "unbalanced fence in chunk");
        }
    }

    #[test]
    fn markdown_v2_escapes_specials() {
        let escaped = escape("Hello. World! (test) [link] ~strike~ a\\b", ParseMode::MARKDOWN_V2);
        assert_eq!(
            escaped,
            "Hello\\. World\\! \\(test\\) \\[link\\] \\~strike\\~ a\\\\b"
        );
    }

    #[test]
    fn legacy_markdown_escapes_fewer_chars() {
        assert_eq!(escape("a_b*c.d", ParseMode::MARKDOWN), "a\\_b\\*c.d");
    }

    #[test]
    fn html_escapes_entities() {
        assert_eq!(escape("<b>&</b>", ParseMode::HTML), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn plain_text_is_untouched() {
        let input = "Hello world 123 abc";
        assert_eq!(escape(input, ParseMode::MARKDOWN_V2), input);
    }
}
