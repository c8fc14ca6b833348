mod common;

use common::*;

#[test]
fn status_unpublished_without_index() {
    let env = TestEnv::builder().with_bundle().build();

    let result = env.run(&["status"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Mode: unpublished"));
}

#[test]
fn status_after_maintenance_is_maintenance() {
    let env = TestEnv::builder().with_bundle().build();
    assert!(env.run(&["maintenance"]).success);

    let result = env.run(&["status"]);

    assert!(result.stdout.contains("Mode: maintenance"), "{}", result.stdout);
}

#[test]
fn status_live_when_index_differs() {
    let env = TestEnv::builder()
        .with_bundle()
        .with_file("build/web/index.html", "<script src=\"main.dart.js\"></script>")
        .build();

    let result = env.run(&["status"]);

    assert!(result.stdout.contains("Mode: live"));
}

#[test]
fn status_reports_missing_bundle_files() {
    let env = TestEnv::builder()
        .with_file("web/maintenance.html", MAINTENANCE_HTML)
        .build();

    let result = env.run(&["status"]);

    assert!(result.success);
    assert!(result.stdout.contains("Missing bundle file:"));
    assert!(result.stdout.contains("favicon.png"));
}

#[test]
fn status_does_not_write() {
    let env = TestEnv::builder().with_bundle().build();

    env.run(&["status"]);

    assert!(!env.project_path("build").exists());
}

#[test]
fn status_json_event() {
    let env = TestEnv::builder().with_bundle().build();
    assert!(env.run(&["maintenance"]).success);

    let result = env.run(&["status", "--json"]);

    let events = result.json_events();
    let status = events.iter().find(|e| e["event"] == "status").unwrap();
    assert_eq!(status["mode"], "maintenance");
    assert_eq!(status["bundle_complete"], true);
    assert_eq!(status["index_hash"], status["maintenance_hash"]);
    assert!(events[0].get("dry_run").is_none());
}

#[test]
fn status_names_configured_index_document() {
    let env = TestEnv::builder()
        .with_bundle()
        .with_project_config("[publish]\nindex_name = \"home.html\"\n")
        .build();

    let result = env.run(&["status"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result
            .stdout
            .contains("Mode: unpublished (no home.html in the publish directory)"),
        "{}",
        result.stdout
    );
    assert!(!result.stdout.contains("index.html"));
}
