//! End-to-end hint lifecycle: detect, resolve, hint, re-send, strip.

use captain::{
    detect_mentions, format_auto_apply_hint, hinted_workflows, resolve_mentions,
    sanitize_user_message, strip_existing_hints, Config, HintEntry, MentionResolution,
    MentionResolver, Theme, Workflow, WorkflowCatalog,
};

fn catalog() -> WorkflowCatalog {
    WorkflowCatalog::new(vec![
        Workflow::new("5-approaches")
            .with_alias("5a")
            .with_description("Analyze problems from 5 perspectives"),
        Workflow::new("commit-review")
            .with_alias("cr")
            .with_description("Review staged changes before committing"),
        Workflow::new("create-pr"),
    ])
}

/// Turn the resolved mentions into hint entries the way a host would.
fn entries_for(resolutions: &[MentionResolution], catalog: &WorkflowCatalog) -> Vec<HintEntry> {
    resolutions
        .iter()
        .filter_map(|r| {
            let workflow = catalog.get(r.workflow()?)?;
            Some(
                HintEntry::new(&workflow.name)
                    .with_description(&workflow.description)
                    .with_keywords([r.mention().name.clone()]),
            )
        })
        .collect()
}

#[test]
fn test_hint_survives_resend_unchanged() {
    let catalog = catalog();
    let message = "//cr look at my staged changes";

    let resolutions = resolve_mentions(message, &catalog, 3);
    let entries = entries_for(&resolutions, &catalog);
    assert_eq!(entries.len(), 1);

    let turn_one = format_auto_apply_hint(message, &entries, Theme::Standard);
    assert!(turn_one.starts_with("//cr look at my staged changes\n\n[⚡ Workflow matched]\n"));
    assert!(turn_one.contains("↳ [// commit-review] (matched: \"cr\")"));
    assert!(turn_one.contains("↳ Desc: \"Review staged changes before committing\""));

    // The conversation is re-sent with last turn's hint still attached
    assert_eq!(sanitize_user_message(&turn_one), message);
    let turn_two = format_auto_apply_hint(&turn_one, &entries, Theme::Standard);
    assert_eq!(turn_two, turn_one);

    // Mentions inside the hint itself are never detected
    assert_eq!(resolve_mentions(&turn_one, &catalog, 3), resolutions);
}

#[test]
fn test_hinted_workflows_skip_unless_forced() {
    let catalog = catalog();
    let hinted = format_auto_apply_hint(
        "//cr please",
        &[HintEntry::new("commit-review").with_keywords(["cr"])],
        Theme::Standard,
    );
    let already = hinted_workflows(&hinted);
    assert_eq!(already, vec!["commit-review".to_string()]);

    let edited = format!("{hinted}\n\n//commit-review! again");
    // Hint lines vanish; the user's follow-up line is kept
    assert_eq!(sanitize_user_message(&edited), "//cr please\n\n//commit-review! again");

    let mentions = detect_mentions(&sanitize_user_message(&edited));
    let fresh: Vec<_> = mentions
        .iter()
        .filter(|m| {
            let name = catalog.resolve(&m.name).map(|w| w.name.clone());
            m.force || !name.is_some_and(|n| already.contains(&n))
        })
        .collect();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].name, "commit-review");
}

#[test]
fn test_truncated_and_glued_hint_is_cleaned() {
    // Upstream truncation cut the block mid-reference and a later edit was appended
    let corrupted = "think about 5 approaches\n\n\
                     [⚡ Workflow matched]\n\
                     ACTION_REQUIRED: IF matches user intent → get_wor\n\
                     ↳ [// 5-appr\n\
                     oaches] (matched: \"5\", \"approaches\")\n\
                     ↳ Desc: \"Analyze prob\n\
                     and also //5a!";

    assert_eq!(
        sanitize_user_message(corrupted),
        "think about 5 approaches\n\nand also //5a!"
    );

    let resolutions = resolve_mentions(corrupted, &catalog(), 3);
    assert_eq!(resolutions.len(), 1);
    assert_eq!(resolutions[0].workflow(), Some("5-approaches"));
    assert!(resolutions[0].mention().force);
}

#[test]
fn test_stale_legacy_and_fresh_blocks_both_stripped() {
    let legacy = "[⚡ Orders matched]\n\
                  ACTION_REQUIRED: IF matches user intent → get_workflow(\"name\"), else SKIP\n\
                  ↳ //[5-approaches] (matched: \"5a\")\n\
                  ↳ Desc: `Analyze problems from 5 perspectives`";
    let fresh = format_auto_apply_hint("x", &[HintEntry::new("cr")], Theme::Standard);
    let fresh_block = fresh.trim_start_matches('x');
    let text = format!("compare [5 approaches] for this\n\n{legacy}{fresh_block}");

    assert_eq!(strip_existing_hints(&text), "compare [5 approaches] for this");
    assert_eq!(sanitize_user_message(&text), "compare 5 approaches for this");
    assert_eq!(
        hinted_workflows(&text),
        vec!["5-approaches".to_string(), "cr".to_string()]
    );
}

#[test]
fn test_partial_mention_only_suggests() {
    let config = Config::default();
    let resolver = MentionResolver::new(&config.hint);

    let results = resolver.resolve_text("try //5app and //cre and //zzz", &catalog());
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0],
        MentionResolution::Suggested {
            mention: captain::Mention::new("5app", false),
            suggestions: vec!["5-approaches (5a)".to_string()],
        }
    );
    assert!(matches!(
        &results[1],
        MentionResolution::Suggested { suggestions, .. } if suggestions == &vec!["create-pr".to_string()]
    ));
    assert!(matches!(results[2], MentionResolution::Unknown { .. }));
}

#[test]
fn test_urls_and_paths_are_not_mentions() {
    let text = "see https://example.com//path and file:///tmp/x, not a//b";
    assert!(resolve_mentions(text, &catalog(), 3).is_empty());
}

#[test]
fn test_pirate_theme_round_trip() {
    let hinted = format_auto_apply_hint(
        "//5a my plan",
        &[HintEntry::new("5-approaches").with_keywords(["5a"])],
        Theme::Pirate,
    );
    assert!(hinted.contains("[⚡ Orders matched]"));
    assert_eq!(sanitize_user_message(&hinted), "//5a my plan");
}
