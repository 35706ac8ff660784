//! Workflow catalog domain models.
//!
//! The catalog is the hand-off point from the host's workflow loader: the host
//! reads workflow files and their frontmatter, then builds a [`WorkflowCatalog`]
//! that the matching services consume. Nothing here touches storage.

use serde::{Deserialize, Serialize};

use crate::services::name_matcher;

/// A reusable instruction bundle the assistant can be pointed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Case-sensitive identifier, unique within a catalog
    pub name: String,

    /// Alternate spellings that resolve to this workflow
    #[serde(default)]
    pub aliases: Vec<String>,

    /// One-line summary shown in hint blocks
    #[serde(default)]
    pub description: String,
}

impl Workflow {
    /// Create a workflow with no aliases and no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
        }
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether `key` is this workflow's name or one of its aliases (byte-exact).
    pub fn answers_to(&self, key: &str) -> bool {
        self.name == key || self.aliases.iter().any(|a| a == key)
    }
}

/// Ordered set of workflows known to the host.
///
/// Catalog order is significant: it is the tie-break order for every matcher
/// operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowCatalog {
    workflows: Vec<Workflow>,
}

impl WorkflowCatalog {
    /// Build a catalog from workflows in catalog order.
    pub fn new(workflows: Vec<Workflow>) -> Self {
        Self { workflows }
    }

    /// Append a workflow at the end of the catalog.
    pub fn push(&mut self, workflow: Workflow) {
        self.workflows.push(workflow);
    }

    /// Number of workflows.
    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    /// Whether the catalog has no workflows.
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }

    /// Iterate workflows in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Workflow> {
        self.workflows.iter()
    }

    /// The candidate set for the matcher: each workflow's name followed by its
    /// aliases, in catalog order.
    pub fn candidates(&self) -> Vec<&str> {
        self.workflows
            .iter()
            .flat_map(|wf| {
                std::iter::once(wf.name.as_str()).chain(wf.aliases.iter().map(String::as_str))
            })
            .collect()
    }

    /// Look up a workflow by its exact name or alias.
    pub fn get(&self, key: &str) -> Option<&Workflow> {
        self.workflows
            .iter()
            .find(|wf| wf.name == key)
            .or_else(|| self.workflows.iter().find(|wf| wf.answers_to(key)))
    }

    /// Resolve user input to a workflow without accepting partial names.
    pub fn resolve(&self, input: &str) -> Option<&Workflow> {
        let candidates = self.candidates();
        let key = name_matcher::resolve_exact(input, &candidates)?;
        self.get(key)
    }

    /// Ranked workflow suggestions for a possibly partial or misspelled name.
    ///
    /// A workflow reached through several of its keys is listed once, at the
    /// rank of its best key.
    pub fn suggest(&self, typo: &str, limit: usize) -> Vec<&Workflow> {
        if limit == 0 {
            return Vec::new();
        }

        let candidates = self.candidates();
        let mut suggestions: Vec<&Workflow> = Vec::new();

        // Rank every key first, then dedupe, so the cap applies to workflows.
        for key in name_matcher::fuzzy_match(typo, &candidates, candidates.len()) {
            let Some(workflow) = self.get(key) else {
                continue;
            };
            if suggestions.iter().any(|s| s.name == workflow.name) {
                continue;
            }
            suggestions.push(workflow);
            if suggestions.len() == limit {
                break;
            }
        }

        suggestions
    }
}

impl FromIterator<Workflow> for WorkflowCatalog {
    fn from_iter<I: IntoIterator<Item = Workflow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
