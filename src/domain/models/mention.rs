//! Mentions detected in message text and their resolution outcomes.

use serde::{Deserialize, Serialize};

/// A raw `//name` reference found in message text, not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    /// Identifier text exactly as typed
    pub name: String,

    /// Set when the mention ended in `!`: hint again even if already hinted
    pub force: bool,
}

impl Mention {
    /// Create a mention.
    pub fn new(name: impl Into<String>, force: bool) -> Self {
        Self {
            name: name.into(),
            force,
        }
    }
}

/// Outcome of resolving one mention against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MentionResolution {
    /// The mention names a workflow (exactly or after canonicalization)
    Resolved {
        /// The detected mention
        mention: Mention,
        /// Canonical workflow name
        workflow: String,
    },

    /// No workflow matched, but these partial matches are worth showing
    Suggested {
        /// The detected mention
        mention: Mention,
        /// Display strings, best first, e.g. `commit-review (cr | review)`
        suggestions: Vec<String>,
    },

    /// Nothing in the catalog looks like this mention
    Unknown {
        /// The detected mention
        mention: Mention,
    },
}

impl MentionResolution {
    /// The mention this outcome is about.
    pub const fn mention(&self) -> &Mention {
        match self {
            Self::Resolved { mention, .. }
            | Self::Suggested { mention, .. }
            | Self::Unknown { mention } => mention,
        }
    }

    /// The resolved workflow name, if any.
    pub fn workflow(&self) -> Option<&str> {
        match self {
            Self::Resolved { workflow, .. } => Some(workflow.as_str()),
            _ => None,
        }
    }
}
