use std::fs;
use std::path::Path;

use mc_commons_lang::{FileLanguageBundle, LangError, LanguageBundle, LoadTarget};
use mc_commons_testkit::{assert_text_snapshot, scratch_dir, scratch_path};

fn sample_bundle() -> FileLanguageBundle {
    let mut bundle = FileLanguageBundle::new();
    bundle
        .set_string("messages.welcome", "Welcome to %server.name%, {0}")
        .unwrap();
    bundle.set_string("messages.goodbye", "See you, {0}!").unwrap();
    bundle.set_string("menu.shop.title", "&6Shop").unwrap();
    bundle
}

#[test]
fn save_output_matches_golden() {
    let golden = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/snapshots/messages.lang");
    assert_text_snapshot(golden, &sample_bundle().save_to_string()).expect("golden matches");
}

#[test]
fn save_creates_parent_directories_and_overwrites() {
    let path = scratch_dir("lang-save").join("lang/en_us.lang");
    let bundle = sample_bundle();
    bundle.save(&path).expect("save succeeds");
    assert_eq!(fs::read_to_string(&path).unwrap(), bundle.save_to_string());

    let mut smaller = FileLanguageBundle::new();
    smaller.set_string("only.node", "v").unwrap();
    smaller.save(&path).expect("overwrite succeeds");
    assert_eq!(fs::read_to_string(&path).unwrap(), "only.node: \"v\"\n");
}

#[test]
fn saved_nodes_reload_as_placeholders() {
    let path = scratch_path("lang-asymmetry", "lang");
    sample_bundle().save(&path).unwrap();

    let reloaded = FileLanguageBundle::load_from_file(&path);
    assert!(reloaded.as_map().is_empty(), "nodes are not restored");
    assert_eq!(reloaded.placeholders().len(), 3);
    assert_eq!(reloaded.get_string("messages.welcome"), "messages.welcome");
    assert_eq!(
        reloaded.placeholders().get("menu.shop.title").map(String::as_str),
        Some("&6Shop")
    );
}

#[test]
fn node_target_round_trips() {
    let path = scratch_path("lang-symmetric", "lang");
    let original = sample_bundle();
    original.save(&path).unwrap();

    let mut reloaded = FileLanguageBundle::new();
    reloaded.set_load_target(LoadTarget::Nodes);
    reloaded.load(&path).unwrap();
    assert_eq!(reloaded.as_map(), original.as_map());
    assert_eq!(reloaded.get_string("menu.shop.title"), "§6Shop");
}

#[test]
fn direct_load_reports_missing_file() {
    let path = scratch_path("lang-missing", "lang");
    let mut bundle = FileLanguageBundle::new();
    match bundle.load(&path) {
        Err(LangError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn convenience_paths_swallow_missing_files() {
    let path = scratch_path("lang-missing", "lang");
    let bundle = FileLanguageBundle::load_from_file(&path);
    assert!(bundle.as_map().is_empty());
    assert!(bundle.placeholders().is_empty());

    let mut bundle = sample_bundle();
    bundle.reload(&path);
    assert!(bundle.as_map().is_empty(), "reload clears before loading");
}

#[test]
fn reload_keeps_previous_state_cleared_on_malformed_file() {
    let path = scratch_path("lang-malformed", "lang");
    fs::write(&path, "good.key : \"value\"\nbroken line here\n").unwrap();

    let mut bundle = sample_bundle();
    bundle.reload(&path);
    assert!(bundle.as_map().is_empty());
    assert!(bundle.placeholders().is_empty(), "malformed file applies nothing");

    let mut bundle = FileLanguageBundle::new();
    assert!(matches!(
        bundle.load(&path),
        Err(LangError::Malformed { line: 2, .. })
    ));
}
