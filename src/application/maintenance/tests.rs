//! Tests for MaintenanceUseCase

use std::path::{Path, PathBuf};

use super::*;
use crate::application::testing::{FakeRunner, MockFileSystem};
use crate::config::{Config, SiteConfig};
use crate::domain::ports::site_events::testing::RecordingEventSink;
use crate::domain::ports::{NoopEventSink, SiteEvent, StdioMode};
use crate::domain::value_objects::{ContentHash, Step};
use crate::error::SiteModeError;

const HTML: &[u8] = b"<!doctype html><h1>Back soon</h1>";
const ICON: &[u8] = &[0x89, b'P', b'N', b'G', 0x00, 0x01, 0x02];

fn site() -> SiteConfig {
    SiteConfig::new("/app", Config::default())
}

fn bundle_fs() -> MockFileSystem {
    MockFileSystem::new()
        .with_file("/app/web/maintenance.html", HTML)
        .with_file("/app/web/favicon.png", ICON)
}

fn index() -> PathBuf {
    PathBuf::from("/app/build/web/index.html")
}

fn icon() -> PathBuf {
    PathBuf::from("/app/build/web/favicon.png")
}

#[test]
fn copies_bundle_into_publish_dir() {
    let fs = bundle_fs();
    let runner = FakeRunner::new();
    let use_case = MaintenanceUseCase::new(&fs, &runner);

    let result = use_case
        .execute(&site(), &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap();

    assert_eq!(fs.get(&index()).as_deref(), Some(HTML));
    assert_eq!(fs.get(&icon()).as_deref(), Some(ICON));
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].hash, ContentHash::from_bytes(HTML));
    assert_eq!(result.files[1].bytes, ICON.len());
    assert!(result.is_success());
    assert!(runner.calls().is_empty());
}

#[test]
fn creates_missing_publish_dir_with_parents() {
    let fs = bundle_fs();
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    let result = use_case
        .execute(&site(), &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap();

    assert!(result.created_dir);
    assert!(fs.has_dir(Path::new("/app/build/web")));
    assert!(fs.has_dir(Path::new("/app/build")));
}

#[test]
fn existing_publish_dir_is_not_reported_as_created() {
    let fs = bundle_fs()
        .with_dir("/app/build/web")
        .with_file("/app/build/web/index.html", b"live app")
        .with_file("/app/build/web/main.dart.js", b"app code");
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    let result = use_case
        .execute(&site(), &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap();

    assert!(!result.created_dir);
    assert_eq!(fs.get(&index()).as_deref(), Some(HTML));
    // Files outside the bundle are left alone
    assert_eq!(
        fs.get(Path::new("/app/build/web/main.dart.js")).as_deref(),
        Some(&b"app code"[..])
    );
}

#[test]
fn running_twice_is_idempotent() {
    let fs = bundle_fs();
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    use_case
        .execute(&site(), &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap();
    let once = fs.snapshot();
    use_case
        .execute(&site(), &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap();

    assert_eq!(fs.snapshot(), once);
}

#[test]
fn missing_document_writes_nothing() {
    let fs = MockFileSystem::new().with_file("/app/web/favicon.png", ICON);
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    let err = use_case
        .execute(&site(), &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap_err();

    assert!(
        matches!(err, SiteModeError::SourceMissing { ref path } if path == Path::new("/app/web/maintenance.html"))
    );
    assert!(fs.get(&icon()).is_none());
    assert!(!fs.has_dir(Path::new("/app/build/web")));
}

#[test]
fn missing_icon_writes_nothing() {
    let fs = MockFileSystem::new().with_file("/app/web/maintenance.html", HTML);
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    let err = use_case
        .execute(&site(), &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap_err();

    assert!(matches!(err, SiteModeError::SourceMissing { .. }));
    assert!(fs.get(&index()).is_none());
}

#[test]
fn icon_write_failure_leaves_document_replaced() {
    let fs = bundle_fs().fail_writes_to(icon());
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    let err = use_case
        .execute(&site(), &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap_err();

    assert!(matches!(err, SiteModeError::Fs(_)));
    assert_eq!(fs.get(&index()).as_deref(), Some(HTML));
    assert!(fs.get(&icon()).is_none());
}

#[test]
fn dry_run_touches_nothing() {
    let fs = bundle_fs();
    let before = fs.snapshot();
    let runner = FakeRunner::new();
    let use_case = MaintenanceUseCase::new(&fs, &runner);

    let result = use_case
        .execute(
            &site(),
            &MaintenanceOptions::new().with_dry_run(true).with_deploy(true),
            &NoopEventSink,
        )
        .unwrap();

    assert!(result.dry_run);
    assert_eq!(result.files.len(), 2);
    assert!(matches!(result.deploy, DeployStatus::Planned));
    assert_eq!(fs.snapshot(), before);
    assert!(!fs.has_dir(Path::new("/app/build/web")));
    assert!(runner.calls().is_empty());
}

#[test]
fn dry_run_still_requires_sources() {
    let fs = MockFileSystem::new();
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    let result = use_case.execute(
        &site(),
        &MaintenanceOptions::new().with_dry_run(true),
        &NoopEventSink,
    );

    assert!(result.is_err());
}

#[test]
fn deploy_runs_after_copy() {
    let fs = bundle_fs();
    let runner = FakeRunner::new();
    let use_case = MaintenanceUseCase::new(&fs, &runner);

    let result = use_case
        .execute(
            &site(),
            &MaintenanceOptions::new()
                .with_deploy(true)
                .with_stdio(StdioMode::StdoutToStderr),
            &NoopEventSink,
        )
        .unwrap();

    assert!(matches!(result.deploy, DeployStatus::Deployed));
    assert_eq!(runner.calls(), vec!["firebase deploy --only hosting"]);
    assert_eq!(runner.stdio_modes(), vec![StdioMode::StdoutToStderr]);
}

#[test]
fn deploy_failure_is_reported_not_raised() {
    let fs = bundle_fs();
    let runner = FakeRunner::new().exit_with("firebase", 2);
    let use_case = MaintenanceUseCase::new(&fs, &runner);

    let result = use_case
        .execute(
            &site(),
            &MaintenanceOptions::new().with_deploy(true),
            &NoopEventSink,
        )
        .unwrap();

    assert!(!result.is_success());
    match result.deploy {
        DeployStatus::Failed(err) => assert_eq!(err.exit_code(), Some(2)),
        other => panic!("expected deploy failure, got {other:?}"),
    }
    // Bundle stays in place
    assert_eq!(fs.get(&index()).as_deref(), Some(HTML));
}

#[test]
fn emits_events_in_order() {
    let fs = bundle_fs();
    let sink = RecordingEventSink::default();
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    use_case
        .execute(&site(), &MaintenanceOptions::new().with_deploy(true), &sink)
        .unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 5);
    assert!(matches!(events[0], SiteEvent::PublishDirReady { created: true, .. }));
    assert!(
        matches!(events[1], SiteEvent::FilePublished { ref destination, .. } if destination == &index())
    );
    assert!(
        matches!(events[2], SiteEvent::FilePublished { ref destination, .. } if destination == &icon())
    );
    assert!(matches!(
        events[3],
        SiteEvent::CommandStarted {
            step: Step::Deploy,
            ..
        }
    ));
    assert_eq!(events[4], SiteEvent::CommandSucceeded { step: Step::Deploy });
}

#[test]
fn respects_configured_names() {
    let mut config = Config::default();
    config.publish.dir = PathBuf::from("public");
    config.publish.index_name = "maintenance.html".to_string();
    config.publish.icon_name = "favicon.ico".to_string();
    let site = SiteConfig::new("/app", config);
    let fs = bundle_fs();
    let use_case = MaintenanceUseCase::new(&fs, FakeRunner::new());

    use_case
        .execute(&site, &MaintenanceOptions::new(), &NoopEventSink)
        .unwrap();

    assert_eq!(
        fs.get(Path::new("/app/public/maintenance.html")).as_deref(),
        Some(HTML)
    );
    assert_eq!(fs.get(Path::new("/app/public/favicon.ico")).as_deref(), Some(ICON));
}
