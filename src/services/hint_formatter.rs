//! Rendering of hint blocks appended to user messages.

use crate::domain::models::hint::{ARROW, INSTRUCTION_LINE, MATCHED_SUFFIX};
use crate::domain::models::{HintEntry, Theme};
use crate::services::hint_stripper::sanitize_user_message;

/// Render the hint block for `entries`.
///
/// Each entry gets a `↳ [// name]` reference line, carrying its keywords when
/// it has any, followed by a `↳ Desc:` line when it has a description. An
/// empty entry list renders nothing.
pub fn format_hint_block(entries: &[HintEntry], theme: Theme) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut lines = vec![theme.header().to_string(), INSTRUCTION_LINE.to_string()];
    for entry in entries {
        lines.push(reference_line(entry));
        // Keep the description on one line so it stays one fingerprint.
        let description = entry.description.split_whitespace().collect::<Vec<_>>().join(" ");
        if !description.is_empty() {
            lines.push(format!("{ARROW}Desc: \"{description}\""));
        }
    }

    lines.join("\n")
}

/// Sanitize `message` and append the hint block for `entries` after a blank
/// line. With no entries the sanitized message is returned as is.
pub fn format_auto_apply_hint(message: &str, entries: &[HintEntry], theme: Theme) -> String {
    let clean = sanitize_user_message(message);
    let block = format_hint_block(entries, theme);
    if block.is_empty() {
        return clean;
    }

    tracing::debug!(
        workflows = entries.len(),
        theme = ?theme,
        "appending workflow hint"
    );
    format!("{clean}\n\n{block}")
}

fn reference_line(entry: &HintEntry) -> String {
    let mut line = format!("{ARROW}[// {}]", entry.name);
    if !entry.keywords.is_empty() {
        let quoted: Vec<String> = entry.keywords.iter().map(|k| format!("\"{k}\"")).collect();
        line.push_str(&format!(" {MATCHED_SUFFIX} {})", quoted.join(", ")));
    }
    line
}
