//! Removal of hint blocks from user messages.
//!
//! Conversation text is re-sent every turn, so a message may arrive carrying
//! the hint block appended last turn, several stale blocks from edits, or
//! fragments of a block that upstream truncation cut at an arbitrary offset
//! and glued back together. Classification is therefore per line: each line
//! is tested against the hint templates (current and legacy, whole or
//! truncated) and anything that doesn't match is user content and survives
//! verbatim, wherever it sits relative to hint lines.
//!
//! Thresholds for truncated prefixes live in [`crate::domain::models::hint`].

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::models::hint::{
    DESC_MARKER, HEADERS, INSTRUCTION_LINE, LEGACY_REF_MARKER, MATCHED_SUFFIX,
    MIN_DESCRIPTION_PREFIX_CHARS, MIN_HEADER_PREFIX_CHARS, MIN_INSTRUCTION_PREFIX_CHARS,
    REF_MARKER,
};
use crate::domain::models::LineKind;

/// Highlighted text in square brackets on one line, e.g. `[5 approaches]` or
/// `[multi-step]`. Colons mark structured references, and `/` or `⚡` mark
/// hint block syntax; neither is a highlight. The text must not start or end
/// with whitespace.
const HIGHLIGHT_PATTERN: &str =
    r"\[([^\s\[\]:/⚡](?:[^\[\]:/⚡\r\n]*[^\s\[\]:/⚡])?)\]";

fn highlight_regex() -> &'static Regex {
    static HIGHLIGHT: OnceLock<Regex> = OnceLock::new();
    HIGHLIGHT.get_or_init(|| Regex::new(HIGHLIGHT_PATTERN).expect("highlight pattern is valid"))
}

/// A parsed `↳ [// name]` or `↳ //[name]` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RefLine<'a> {
    name: &'a str,
    /// The closing bracket survived, so `name` is whole
    complete: bool,
}

#[derive(Debug, Default)]
struct StripCounts {
    headers: usize,
    instructions: usize,
    references: usize,
    descriptions: usize,
    orphans: usize,
}

impl StripCounts {
    fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Header => self.headers += 1,
            LineKind::Instruction => self.instructions += 1,
            LineKind::MentionRef => self.references += 1,
            LineKind::Description => self.descriptions += 1,
            LineKind::OrphanFragment => self.orphans += 1,
            LineKind::Content | LineKind::Blank => {}
        }
    }

    const fn total(&self) -> usize {
        self.headers + self.instructions + self.references + self.descriptions + self.orphans
    }
}

/// Classify one line of a message.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();

    if line.is_empty() {
        LineKind::Blank
    } else if HEADERS
        .iter()
        .any(|header| is_truncated_prefix(line, header, MIN_HEADER_PREFIX_CHARS))
    {
        LineKind::Header
    } else if is_truncated_prefix(line, INSTRUCTION_LINE, MIN_INSTRUCTION_PREFIX_CHARS) {
        LineKind::Instruction
    } else if parse_ref_line(line).is_some() {
        LineKind::MentionRef
    } else if is_description_line(line) {
        LineKind::Description
    } else if is_orphan_fragment(line) {
        LineKind::OrphanFragment
    } else {
        LineKind::Content
    }
}

/// Remove every hint line, whole or truncated, keeping all other lines.
///
/// Blank lines between two kept lines are kept as written unless hint lines
/// were removed between them, in which case the gap shrinks to one blank
/// line at most. The result is trimmed.
pub fn strip_existing_hints(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut blanks: Vec<&str> = Vec::new();
    let mut stripped_in_gap = false;
    let mut counts = StripCounts::default();

    for line in text.split('\n') {
        match classify_line(line) {
            LineKind::Blank => blanks.push(line),
            LineKind::Content => {
                if !kept.is_empty() {
                    if !stripped_in_gap {
                        kept.append(&mut blanks);
                    } else if let Some(first) = blanks.first().copied() {
                        kept.push(first);
                    }
                }
                blanks.clear();
                stripped_in_gap = false;
                kept.push(line);
            }
            kind => {
                tracing::trace!(?kind, line, "hint fingerprint line");
                counts.record(kind);
                stripped_in_gap = true;
            }
        }
    }

    if counts.total() > 0 {
        tracing::debug!(
            headers = counts.headers,
            instructions = counts.instructions,
            references = counts.references,
            descriptions = counts.descriptions,
            orphans = counts.orphans,
            kept = kept.len(),
            "stripped hint fingerprint lines"
        );
    }

    kept.join("\n").trim().to_string()
}

/// Unwrap square-bracket highlights around plain words.
///
/// `[5 approaches]` becomes `5 approaches` and `[don't]` becomes `don't`.
/// Bracketed text holding a colon, a slash or `⚡`, such as
/// `[use_workflow:test-123]` or `[// cr]`, is left alone.
pub fn strip_highlight_brackets(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = highlight_regex().replace_all(&current, "${1}").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Canonical pre-processing before mention detection: strip highlights,
/// then hint blocks, then trim. Idempotent.
pub fn sanitize_user_message(text: &str) -> String {
    let unhighlighted = strip_highlight_brackets(text);
    strip_existing_hints(&unhighlighted).trim().to_string()
}

/// Workflow names referenced by hint lines in `text`, in first-appearance
/// order, without duplicates.
///
/// Only names whose closing bracket survived are reported, so truncated
/// names are skipped. Bracketless legacy lines (`↳ //cr`, what highlight
/// stripping leaves of `↳ //[cr]`) can't prove their name whole and are
/// skipped too; call this on the raw message, not a sanitized one.
pub fn hinted_workflows(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in text.lines() {
        let Some(reference) = parse_ref_line(line.trim()) else {
            continue;
        };
        if reference.complete
            && !reference.name.is_empty()
            && !names.iter().any(|n| n == reference.name)
        {
            names.push(reference.name.to_string());
        }
    }
    names
}

/// Case-insensitive: `line` is `template` or a prefix of it at least
/// `min_chars` characters long.
fn is_truncated_prefix(line: &str, template: &str, min_chars: usize) -> bool {
    let line = line.to_lowercase();
    let template = template.to_lowercase();
    line == template || (line.chars().count() >= min_chars && template.starts_with(&line))
}

/// Parse a reference line in either bracket style, tolerating truncation
/// anywhere after the `↳ [//` or `↳ //` marker.
fn parse_ref_line(line: &str) -> Option<RefLine<'_>> {
    if let Some(rest) = line.strip_prefix(REF_MARKER.trim_end()) {
        return parse_bracketed(rest.strip_prefix(' ').unwrap_or(rest));
    }

    let rest = line.strip_prefix(LEGACY_REF_MARKER)?;
    match rest.strip_prefix('[') {
        Some(rest) => parse_bracketed(rest),
        // Highlight stripping turns `//[cr]` into `//cr`.
        None => parse_bare(rest),
    }
}

/// `name] (matched: ...)`: names are opaque, so the name runs to the closing
/// bracket and may hold spaces.
fn parse_bracketed(rest: &str) -> Option<RefLine<'_>> {
    let Some((name, after)) = rest.split_once(']') else {
        // Cut before the closing bracket
        return Some(RefLine {
            name: rest,
            complete: false,
        });
    };

    is_matched_suffix(after).then_some(RefLine {
        name,
        complete: true,
    })
}

/// `name (matched: ...)` with both brackets gone. The name runs to the
/// keyword list and is never known to be whole.
fn parse_bare(rest: &str) -> Option<RefLine<'_>> {
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (name, after) = rest.find(" (").map_or((rest, ""), |i| rest.split_at(i));
    is_matched_suffix(after).then_some(RefLine {
        name: name.trim_end(),
        complete: false,
    })
}

/// Nothing, or a possibly truncated ` (matched: ...)` suffix.
fn is_matched_suffix(after: &str) -> bool {
    let after = after.trim_start();
    after.is_empty() || after.starts_with(MATCHED_SUFFIX) || MATCHED_SUFFIX.starts_with(after)
}

fn is_description_line(line: &str) -> bool {
    if let Some(rest) = line.strip_prefix(DESC_MARKER) {
        let rest = rest.trim_start();
        return rest.is_empty() || rest.starts_with('"') || rest.starts_with('`');
    }
    line.chars().count() >= MIN_DESCRIPTION_PREFIX_CHARS && DESC_MARKER.starts_with(line)
}

/// The tail of a reference line cut at an arbitrary offset:
/// `5-approaches] (matched: "5", "approaches")`.
fn is_orphan_fragment(line: &str) -> bool {
    let Some(idx) = line.rfind(MATCHED_SUFFIX) else {
        return false;
    };
    is_cut_ref_head(&line[..idx]) && is_quoted_list(&line[idx + MATCHED_SUFFIX.len()..])
}

/// Whether `head` is what could be left of `↳ [// name] `, `↳ //[name] `
/// or `↳ //name ` after losing an arbitrary number of leading characters.
fn is_cut_ref_head(head: &str) -> bool {
    let head = head.trim_end();

    if let Some(cut) = head.strip_suffix(']') {
        let legacy = format!("{LEGACY_REF_MARKER}[");
        return [REF_MARKER, legacy.as_str()].into_iter().any(|marker| {
            marker_remainders(cut, marker).any(|name| !name.contains(|c: char| c == '[' || c == ']'))
        });
    }

    // Without a closing bracket only the bare legacy form is left; its name
    // can't be told apart from prose once it holds a space.
    marker_remainders(head, LEGACY_REF_MARKER)
        .any(|name| !name.contains(|c: char| c.is_whitespace() || c == '[' || c == ']'))
}

/// What follows each suffix of `marker` (the empty one included) that `head`
/// starts with.
fn marker_remainders<'a>(head: &'a str, marker: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    marker
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(marker.len()))
        .filter_map(move |i| head.strip_prefix(&marker[i..]))
}

/// `"a", "b")`: a comma-separated list of double-quoted strings closed by `)`.
fn is_quoted_list(s: &str) -> bool {
    let Some(inner) = s.trim().strip_suffix(')') else {
        return false;
    };

    let mut rest = inner.trim_start();
    loop {
        let Some(open) = rest.strip_prefix('"') else {
            return false;
        };
        let Some(close) = open.find('"') else {
            return false;
        };
        rest = open[close + 1..].trim_start();
        if rest.is_empty() {
            return true;
        }
        let Some(next) = rest.strip_prefix(',') else {
            return false;
        };
        rest = next.trim_start();
    }
}
