//! End-to-end tests for the full discover → validate → aggregate → report
//! pass, driven through real temporary directory trees.

use std::fs;
use std::path::Path;

use kansa_kernel::reporter::{EXIT_FAILURE, EXIT_SUCCESS, render};
use kansa_kernel::run;
use kansa_types::{Status, TargetKind, ValidationReport};

const ALL_KINDS: &[TargetKind] = &[
    TargetKind::Script,
    TargetKind::Json,
    TargetKind::PluginManifest,
];

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, content).expect("write");
}

fn render_to_string(report: &ValidationReport) -> (String, i32) {
    let mut buf = Vec::new();
    let code = render(report, &mut buf).expect("render");
    (String::from_utf8(buf).expect("utf8"), code)
}

#[test]
fn scenario_single_valid_script() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(
        &dir.path().join("valid.kai"),
        "set GREETING = \"hello\"\necho ${GREETING}\n",
    );

    let report = run(dir.path(), &[TargetKind::Script]).expect("run");
    assert_eq!(report.results().len(), 1);
    assert_eq!(report.results()[0].status(), Status::Ok);

    let (_, code) = render_to_string(&report);
    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn scenario_mixed_json_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir.path().join("broken.json"), "{ invalid");
    write_file(&dir.path().join("ok.json"), "{}");

    let report = run(dir.path(), &[TargetKind::Json]).expect("run");
    assert_eq!(report.results().len(), 2);
    assert_eq!(report.fail_count(), 1);

    // Lexicographic order: broken.json before ok.json.
    assert_eq!(report.results()[0].status(), Status::Fail);
    assert!(
        report.results()[0]
            .target()
            .path()
            .ends_with("broken.json")
    );
    assert_eq!(report.results()[1].status(), Status::Ok);

    let (_, code) = render_to_string(&report);
    assert_eq!(code, EXIT_FAILURE);
}

#[test]
fn scenario_plugin_manifests() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("plugins/foo")).expect("mkdir");
    write_file(&dir.path().join("plugins/bar/plugin.json"), "{}");

    let report = run(dir.path(), &[TargetKind::PluginManifest]).expect("run");
    assert_eq!(report.results().len(), 2);

    // bar sorts before foo.
    assert_eq!(report.results()[0].status(), Status::Ok);
    assert_eq!(report.results()[1].status(), Status::Fail);
    assert_eq!(
        report.results()[1].messages(),
        ["Missing plugin.json in foo"]
    );

    let (_, code) = render_to_string(&report);
    assert_eq!(code, EXIT_FAILURE);
}

#[test]
fn combined_run_orders_union_of_targets() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir.path().join("b.kai"), "echo\n");
    write_file(&dir.path().join("a.json"), "{}");
    write_file(&dir.path().join("plugins/p/plugin.json"), "{}");

    let report = run(dir.path(), ALL_KINDS).expect("run");
    let paths: Vec<_> = report
        .results()
        .iter()
        .map(|r| r.target().path().to_path_buf())
        .collect();

    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted, "report order must be lexicographic");
    // a.json, b.kai, plugins/p (dir target), plugins/p/plugin.json
    assert_eq!(paths.len(), 4);
}

#[test]
fn manifest_content_validated_only_by_json_pass() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir.path().join("plugins/foo/plugin.json"), "{ invalid");

    // The manifest pass only checks presence.
    let manifests = run(dir.path(), &[TargetKind::PluginManifest]).expect("run");
    assert!(manifests.is_success());

    // The JSON pass over the same tree catches the malformed content.
    let jsons = run(dir.path(), &[TargetKind::Json]).expect("run");
    assert_eq!(jsons.fail_count(), 1);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir.path().join("ok.kai"), "echo\n");
    write_file(&dir.path().join("bad.kai"), "if true; then echo\n");
    write_file(&dir.path().join("bad.json"), "{ invalid");
    fs::create_dir_all(dir.path().join("plugins/empty")).expect("mkdir");

    let first = run(dir.path(), ALL_KINDS).expect("run");
    let second = run(dir.path(), ALL_KINDS).expect("run");
    assert_eq!(first, second);

    let (first_text, first_code) = render_to_string(&first);
    let (second_text, second_code) = render_to_string(&second);
    assert_eq!(first_text, second_text, "rendered reports must be byte-identical");
    assert_eq!(first_code, second_code);
}

#[test]
fn exit_code_tracks_fail_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir.path().join("ok.json"), "{}");

    let clean = run(dir.path(), &[TargetKind::Json]).expect("run");
    assert_eq!(render_to_string(&clean).1, EXIT_SUCCESS);

    write_file(&dir.path().join("bad.json"), "{ invalid");
    let dirty = run(dir.path(), &[TargetKind::Json]).expect("run");
    assert!(dirty.fail_count() > 0);
    assert_eq!(render_to_string(&dirty).1, EXIT_FAILURE);
}

#[test]
fn failing_target_does_not_stop_the_pass() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(&dir.path().join("a_bad.kai"), "if true; then echo\n");
    write_file(&dir.path().join("z_good.kai"), "echo after the failure\n");

    let report = run(dir.path(), &[TargetKind::Script]).expect("run");
    assert_eq!(report.results().len(), 2, "all targets are always visited");
    assert_eq!(report.results()[0].status(), Status::Fail);
    assert_eq!(report.results()[1].status(), Status::Ok);
}

#[test]
fn script_and_json_message_contracts_differ() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Two bad tokens: the script validator reports both.
    write_file(&dir.path().join("bad.kai"), "echo ^\necho ^\n");
    // serde_json reports only its first error.
    write_file(&dir.path().join("bad.json"), "{ invalid stuff everywhere");

    let report = run(dir.path(), &[TargetKind::Script, TargetKind::Json]).expect("run");
    let by_ext = |ext: &str| {
        report
            .results()
            .iter()
            .find(|r| r.target().path().extension().is_some_and(|e| e == ext))
            .expect("target present")
    };

    assert_eq!(by_ext("kai").messages().len(), 2);
    assert_eq!(by_ext("json").messages().len(), 1);
}
