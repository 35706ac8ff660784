//! Workflow name canonicalization and fuzzy matching.
//!
//! Two names are "the same" when their canonical forms are equal: case and
//! `-`/`_` delimiters are ignored. Exact resolution never accepts a partial
//! name, so a half-typed mention can't silently trigger a workflow. Partial
//! names only ever produce ranked suggestions.

/// Default number of suggestions returned by [`fuzzy_match`] callers.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Default number of aliases shown by [`format_suggestion`] callers.
pub const DEFAULT_MAX_ALIASES: usize = 3;

/// Comparison key for a workflow name: lower-cased, `-` and `_` removed.
pub fn canonicalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve `input` to a candidate, accepting only whole-name matches.
///
/// A byte-exact match wins; otherwise the earliest candidate with the same
/// canonical form is returned.
pub fn resolve_exact<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    if let Some(exact) = candidates.iter().copied().find(|c| *c == input) {
        return Some(exact);
    }

    let key = canonicalize(input);
    candidates.iter().copied().find(|c| canonicalize(c) == key)
}

/// Ranked suggestions for a possibly partial or misspelled name.
///
/// Canonically equal candidates come back alone when present. Otherwise,
/// candidates whose canonical form starts with the query are returned
/// shortest first; equal lengths keep candidate order.
pub fn fuzzy_match<'a>(typo: &str, candidates: &[&'a str], limit: usize) -> Vec<&'a str> {
    let query = canonicalize(typo);
    if query.is_empty() {
        return Vec::new();
    }

    let keyed: Vec<(&'a str, String)> = candidates
        .iter()
        .map(|c| (*c, canonicalize(c)))
        .collect();

    let exact: Vec<&'a str> = keyed
        .iter()
        .filter(|(_, key)| *key == query)
        .map(|(c, _)| *c)
        .take(limit)
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let mut prefixed: Vec<&(&'a str, String)> =
        keyed.iter().filter(|(_, key)| key.starts_with(&query)).collect();
    prefixed.sort_by_key(|(_, key)| key.chars().count());

    prefixed.into_iter().take(limit).map(|(c, _)| *c).collect()
}

/// The top suggestion from [`fuzzy_match`].
pub fn best_suggestion<'a>(typo: &str, candidates: &[&'a str]) -> Option<&'a str> {
    fuzzy_match(typo, candidates, 1).into_iter().next()
}

/// Display form of a suggestion: `name (alias1 | alias2)`.
pub fn format_suggestion<S: AsRef<str>>(name: &str, aliases: &[S], max_aliases: usize) -> String {
    if aliases.is_empty() || max_aliases == 0 {
        return name.to_string();
    }

    let shown: Vec<&str> = aliases.iter().take(max_aliases).map(AsRef::as_ref).collect();
    format!("{name} ({})", shown.join(" | "))
}
