//! Workspace path resolution against a loaded daemon configuration.
//!
//! Each `#[case]` is isolated — no shared state.

use std::path::{Path, PathBuf};

use jobd_core::{workspace_path, DaemonConfig, DaemonId};
use rstest::rstest;

// ---------------------------------------------------------------------------
// 1. Resolution through an explicit config
// ---------------------------------------------------------------------------

#[test]
fn resolves_daemon_id_under_configured_workspace() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let config = DaemonConfig::load_at(home.path()).expect("load");

    let uid = DaemonId::from("jworkspace");
    assert_eq!(
        config.workspace_path(&uid, &[]),
        config.workspace.join("jworkspace")
    );
    assert_eq!(
        config.workspace_path("123", &["456"]),
        config.workspace.join("123").join("456")
    );
}

#[test]
fn config_file_workspace_flows_into_resolution() {
    use assert_fs::prelude::*;

    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".jobd/config.yaml")
        .write_str("workspace: /srv/jobd/workspaces\n")
        .expect("write config");

    let config = DaemonConfig::load_at(home.path()).expect("load");
    assert_eq!(
        config.workspace_path(&DaemonId::from("jworkspace"), &[]),
        PathBuf::from("/srv/jobd/workspaces/jworkspace")
    );
}

// ---------------------------------------------------------------------------
// 2. Join semantics
// ---------------------------------------------------------------------------

#[rstest]
#[case("jworkspace", &[], "/srv/ws/jworkspace")]
#[case("123", &["456"], "/srv/ws/123/456")]
#[case("a", &["b", "c"], "/srv/ws/a/b/c")]
fn joins_segments_left_to_right(
    #[case] first: &str,
    #[case] rest: &[&str],
    #[case] expected: &str,
) {
    let root = Path::new("/srv/ws");
    assert_eq!(workspace_path(root, first, rest), PathBuf::from(expected));
}

#[test]
fn daemon_id_matches_plain_string_form() {
    let root = Path::new("/srv/ws");
    let uid = DaemonId::from("jworkspace");
    assert_eq!(
        workspace_path(root, &uid, &["logs"]),
        workspace_path(root, uid.to_string().as_str(), &["logs"])
    );
}

#[test]
fn resolution_touches_no_filesystem() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let config = DaemonConfig::load_at(home.path()).expect("load");

    let resolved = config.workspace_path(&DaemonId::from("jworkspace"), &[]);
    assert!(!resolved.exists(), "resolver must not create directories");
}
