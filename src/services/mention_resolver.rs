//! Resolution of detected mentions against the workflow catalog.
//!
//! This is the hand-off to the host's decision layer: every `//name` in the
//! message comes back either resolved to a workflow, with suggestions to
//! show the user, or as unknown.

use crate::domain::models::{HintConfig, Mention, MentionResolution, WorkflowCatalog};
use crate::services::hint_stripper::sanitize_user_message;
use crate::services::mention_detector::detect_mentions;
use crate::services::name_matcher::{format_suggestion, DEFAULT_MAX_ALIASES, DEFAULT_SUGGESTION_LIMIT};

/// Resolves mentions with configured suggestion limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionResolver {
    suggestion_limit: usize,
    max_aliases: usize,
}

impl Default for MentionResolver {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            max_aliases: DEFAULT_MAX_ALIASES,
        }
    }
}

impl MentionResolver {
    /// Create a resolver using the limits from `config`.
    pub const fn new(config: &HintConfig) -> Self {
        Self {
            suggestion_limit: config.suggestion_limit,
            max_aliases: config.max_aliases,
        }
    }

    /// Detect mentions in the sanitized `text` and resolve each one.
    pub fn resolve_text(&self, text: &str, catalog: &WorkflowCatalog) -> Vec<MentionResolution> {
        let clean = sanitize_user_message(text);
        detect_mentions(&clean)
            .into_iter()
            .map(|mention| self.resolve(mention, catalog))
            .collect()
    }

    /// Resolve a single mention.
    pub fn resolve(&self, mention: Mention, catalog: &WorkflowCatalog) -> MentionResolution {
        if let Some(workflow) = catalog.resolve(&mention.name) {
            return MentionResolution::Resolved {
                workflow: workflow.name.clone(),
                mention,
            };
        }

        let suggestions: Vec<String> = catalog
            .suggest(&mention.name, self.suggestion_limit)
            .into_iter()
            .map(|wf| format_suggestion(&wf.name, &wf.aliases, self.max_aliases))
            .collect();

        if suggestions.is_empty() {
            tracing::debug!(name = %mention.name, "mention matches no workflow");
            MentionResolution::Unknown { mention }
        } else {
            tracing::debug!(
                name = %mention.name,
                suggestions = suggestions.len(),
                "mention is ambiguous or partial"
            );
            MentionResolution::Suggested {
                mention,
                suggestions,
            }
        }
    }
}

/// Detect and resolve mentions in `text` with default limits, capping
/// suggestions at `limit`.
pub fn resolve_mentions(
    text: &str,
    catalog: &WorkflowCatalog,
    limit: usize,
) -> Vec<MentionResolution> {
    MentionResolver {
        suggestion_limit: limit,
        ..MentionResolver::default()
    }
    .resolve_text(text, catalog)
}
