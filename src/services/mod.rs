//! Service layer: matching, detection, hint formatting and stripping

pub mod hint_formatter;
pub mod hint_stripper;
pub mod mention_detector;
pub mod mention_resolver;
pub mod name_matcher;

pub use hint_formatter::{format_auto_apply_hint, format_hint_block};
pub use hint_stripper::{
    classify_line, hinted_workflows, sanitize_user_message, strip_existing_hints,
    strip_highlight_brackets,
};
pub use mention_detector::detect_mentions;
pub use mention_resolver::{resolve_mentions, MentionResolver};
pub use name_matcher::{
    best_suggestion, canonicalize, format_suggestion, fuzzy_match, resolve_exact,
};
