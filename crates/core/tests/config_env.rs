//! Kept in its own test binary with a single test: it mutates process environment variables.

use performer_import_core::config;
use std::env;
use std::fs;
use tempfile::tempdir;

const BLACKLIST: &str = "PERFORMER_IMPORT__PERFORMERS__BLACKLIST";
const ENDPOINT: &str = "PERFORMER_IMPORT__STASH__ENDPOINT";
const AUTOTAG: &str = "PERFORMER_IMPORT__IMPORT__AUTOTAG";

#[test]
fn environment_layer_sets_lists_and_scalars() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("importer.toml");
    fs::write(&path, "[performers]\nroot = \"/media/performers\"\n").unwrap();
    let path = path.to_str().unwrap();

    env::set_var(BLACKLIST, "compilations,Misc");
    env::set_var(ENDPOINT, "http://nas:9999/graphql");
    env::set_var(AUTOTAG, "false");
    let several = config::load(Some(path));

    env::set_var(BLACKLIST, "misc");
    env::remove_var(ENDPOINT);
    env::remove_var(AUTOTAG);
    let single = config::load(Some(path));
    env::remove_var(BLACKLIST);

    let cfg = several.unwrap();
    assert_eq!(cfg.performers.blacklist, vec!["compilations", "Misc"]);
    assert_eq!(cfg.stash.endpoint, "http://nas:9999/graphql");
    assert!(!cfg.import.autotag);
    assert_eq!(cfg.performers.root, "/media/performers");

    let cfg = single.unwrap();
    assert_eq!(cfg.performers.blacklist, vec!["misc"]);
    assert_eq!(cfg.stash.endpoint, config::DEFAULT_ENDPOINT);
    assert!(cfg.import.autotag);
}
