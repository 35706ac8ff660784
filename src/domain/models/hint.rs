//! Hint block wire format.
//!
//! A hint block is appended to a user message and later stripped from it
//! again. The text is the only thing persisted, so the templates below are a
//! stable format: the formatter emits the current variants and the stripper
//! recognizes the current and every legacy variant.
//!
//! ```text
//! [⚡ Workflow matched]
//! ACTION_REQUIRED: IF matches user intent → get_workflow("name"), else SKIP
//! ↳ [// 5-approaches] (matched: "5", "approaches")
//! ↳ Desc: "Analyze problems from 5 perspectives"
//! ```

use serde::{Deserialize, Serialize};

/// Header emitted by [`Theme::Standard`].
pub const STANDARD_HEADER: &str = "[⚡ Workflow matched]";

/// Header emitted by [`Theme::Pirate`].
pub const PIRATE_HEADER: &str = "[⚡ Orders matched]";

/// Every header the stripper recognizes.
pub const HEADERS: [&str; 2] = [STANDARD_HEADER, PIRATE_HEADER];

/// Fixed instruction line following the header.
pub const INSTRUCTION_LINE: &str =
    "ACTION_REQUIRED: IF matches user intent → get_workflow(\"name\"), else SKIP";

/// Arrow that opens reference and description lines.
pub const ARROW: &str = "↳ ";

/// Opening of a current-style reference line: `↳ [// name]`.
pub const REF_MARKER: &str = "↳ [// ";

/// Opening of a legacy reference line: `↳ //[name]`.
pub const LEGACY_REF_MARKER: &str = "↳ //";

/// Keyword list suffix on reference lines.
pub const MATCHED_SUFFIX: &str = "(matched:";

/// Opening of a description line.
pub const DESC_MARKER: &str = "↳ Desc:";

/// Shortest truncated header prefix still treated as a header.
///
/// Four characters is `[⚡ W` / `[⚡ O`; `[` and `[⚡` alone stay content.
pub const MIN_HEADER_PREFIX_CHARS: usize = 4;

/// Shortest truncated instruction prefix still treated as an instruction.
///
/// The whole `ACTION_REQUIRED:` token must survive. `ACTION_RE` stays content.
pub const MIN_INSTRUCTION_PREFIX_CHARS: usize = 16;

/// Shortest truncated `↳ Desc:` prefix still treated as a description line.
pub const MIN_DESCRIPTION_PREFIX_CHARS: usize = 4;

/// Header wording for the hint block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// `[⚡ Workflow matched]`
    #[default]
    Standard,
    /// `[⚡ Orders matched]`
    Pirate,
}

impl Theme {
    /// Header line for this theme.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Standard => STANDARD_HEADER,
            Self::Pirate => PIRATE_HEADER,
        }
    }
}

/// One workflow the decision layer chose to hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintEntry {
    /// Canonical workflow name
    pub name: String,

    /// Description line text; blank means no description line
    #[serde(default)]
    pub description: String,

    /// Raw keywords from the message that triggered the match
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl HintEntry {
    /// Create an entry with no description and no keywords.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add triggering keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }
}

/// Classification of a single message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// User-authored text, always preserved
    Content,
    /// Empty or whitespace-only line
    Blank,
    /// Themed header, possibly truncated
    Header,
    /// `ACTION_REQUIRED:` line, possibly truncated
    Instruction,
    /// `↳ [// name]` or legacy `↳ //[name]` line, possibly truncated
    MentionRef,
    /// `↳ Desc:` line in either quoting style, possibly truncated
    Description,
    /// Tail of a cut reference line: `...] (matched: "a", "b")`
    OrphanFragment,
}

impl LineKind {
    /// Whether the line belongs to a hint block and must be stripped.
    pub const fn is_fingerprint(self) -> bool {
        !matches!(self, Self::Content | Self::Blank)
    }
}
