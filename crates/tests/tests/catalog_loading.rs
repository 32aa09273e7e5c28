use parley_core::{CatalogError, Matcher, RuleCatalog, ShadowKind, DEFAULT_FALLBACK};
use parley_tests::{precedence_catalog, write_catalog};
use serde_json::json;

#[test]
fn loads_catalog_from_file() {
    let (_dir, path) = write_catalog(&precedence_catalog());
    let catalog = RuleCatalog::from_json_file(&path).expect("catalog loads");

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.fallback(), "Come again?");
    assert_eq!(catalog.rules()[1].trigger_phrase, "tell me a joke");
}

#[test]
fn duplicate_trigger_in_file_is_rejected() {
    let (_dir, path) = write_catalog(&json!({
        "rules": [
            { "trigger": "hello", "response": "one" },
            { "trigger": "hello", "response": "two" }
        ]
    }));
    let err = RuleCatalog::from_json_file(&path).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::DuplicateTrigger {
            first: 0,
            duplicate: 1,
            ..
        }
    ));
}

#[test]
fn fixture_catalog_is_removed_on_drop() {
    let (dir, path) = write_catalog(&precedence_catalog());
    assert!(path.exists());

    drop(dir);
    assert!(!path.exists());
}

#[test]
fn empty_trigger_is_rejected() {
    let err = RuleCatalog::from_json_str(
        &json!({ "rules": [ { "trigger": "", "response": "anything" } ] }).to_string(),
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::EmptyTrigger { index: 0 }));
}

#[test]
fn dump_and_reload_keeps_behaviour() {
    let original = RuleCatalog::builtin().unwrap();
    let dumped = serde_json::to_string(&original.to_file()).unwrap();
    let reloaded = Matcher::with_default_normalizer(RuleCatalog::from_json_str(&dumped).unwrap());

    assert_eq!(reloaded.catalog().len(), original.len());
    assert_eq!(reloaded.catalog().fallback(), DEFAULT_FALLBACK);
    assert_eq!(
        reloaded.get_response("what is github"),
        "GitHub is a platform for version control and collaboration, allowing developers to host and review code."
    );
}

#[test]
fn builtin_lint_finds_only_the_joke_shadowing() {
    let bot = parley_tests::builtin_matcher();
    let report = bot.catalog().shadowed_rules(bot.normalizer());

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].kind, ShadowKind::Shadowed);
    assert_eq!(report[0].trigger, "tell me a joke");
    assert_eq!(report[0].shadowed_by, Some(3));
}
