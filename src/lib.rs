//! Captain - workflow mentions and self-healing hint blocks
//!
//! Captain lets chat messages point at named workflows with `//name`
//! mentions, resolves those mentions against a workflow catalog despite
//! casing and delimiter drift, and appends a machine-readable hint block the
//! downstream agent acts on. Because the conversation is re-sent every turn,
//! old hint blocks, including truncated or duplicated ones, are stripped
//! before new ones are added, without touching user text.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): catalog, mention and hint block models
//! - **Service Layer** (`services`): matching, detection, formatting, stripping
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//!
//! # Example
//!
//! ```
//! use captain::{format_auto_apply_hint, sanitize_user_message, HintEntry, Theme};
//!
//! let hinted = format_auto_apply_hint("//cr my changes", &[HintEntry::new("cr")], Theme::Standard);
//! assert_eq!(sanitize_user_message(&hinted), "//cr my changes");
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, HintConfig, HintEntry, LineKind, LoggingConfig, Mention, MentionResolution, Theme,
    Workflow, WorkflowCatalog,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    best_suggestion, canonicalize, classify_line, detect_mentions, format_auto_apply_hint,
    format_hint_block, format_suggestion, fuzzy_match, hinted_workflows, resolve_exact,
    resolve_mentions, sanitize_user_message, strip_existing_hints, strip_highlight_brackets,
    MentionResolver,
};
