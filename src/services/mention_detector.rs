//! Detection of `//name` workflow mentions in free text.
//!
//! A mention is `//` followed by an identifier (ASCII alphanumeric start, then
//! alphanumerics, `-` or `_`) and an optional `!` that forces re-hinting. The
//! `//` must not follow `:`, `/` or a word character, which keeps URLs
//! (`https://host//path`), `file:///path` and `word//x` out.
//!
//! Scanning works on bytes: every delimiter is ASCII, so UTF-8 continuation
//! bytes never look like a boundary character or an identifier.

use std::collections::HashSet;

use crate::domain::models::Mention;

/// Find workflow mentions in first-occurrence order.
///
/// A name mentioned more than once is reported once, with the `force` flag of
/// its first occurrence.
pub fn detect_mentions(text: &str) -> Vec<Mention> {
    let bytes = text.as_bytes();
    let mut mentions = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find("//") {
        let start = pos + offset;

        if !is_boundary(bytes, start) {
            pos = start + 1;
            continue;
        }

        let name_start = start + 2;
        let name_end = identifier_end(bytes, name_start);
        if name_end == name_start {
            pos = start + 1;
            continue;
        }

        let force = bytes.get(name_end) == Some(&b'!');
        let name = &text[name_start..name_end];
        if seen.insert(name) {
            tracing::trace!(name, force, "workflow mention detected");
            mentions.push(Mention::new(name, force));
        }

        pos = if force { name_end + 1 } else { name_end };
    }

    mentions
}

fn is_boundary(bytes: &[u8], slash: usize) -> bool {
    match slash.checked_sub(1).map(|i| bytes[i]) {
        None => true,
        Some(prev) => !(prev == b':' || prev == b'/' || is_word_byte(prev)),
    }
}

/// Byte index one past the identifier starting at `start`, or `start` if none.
fn identifier_end(bytes: &[u8], start: usize) -> usize {
    match bytes.get(start) {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return start,
    }

    let mut end = start + 1;
    while bytes
        .get(end)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
    {
        end += 1;
    }
    end
}

const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
