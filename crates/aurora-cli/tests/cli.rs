//! CLI command integration tests.
//! Each test uses a temp directory via AURORA_DATA_DIR for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn aurora_cmd(data_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("aurora").unwrap();
    cmd.env("AURORA_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn context_reports_peak_morning() {
    let dir = TempDir::new().unwrap();
    aurora_cmd(&dir)
        .args(["context", "--hour", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("peak-morning"))
        .stdout(predicate::str::contains("busy: true"));
}

#[test]
fn context_wraps_into_the_night_band() {
    let dir = TempDir::new().unwrap();
    for hour in ["23", "3"] {
        aurora_cmd(&dir)
            .args(["context", "--hour", hour])
            .assert()
            .success()
            .stdout(predicate::str::contains("night"));
    }
}

#[test]
fn areas_add_then_list() {
    let dir = TempDir::new().unwrap();

    aurora_cmd(&dir)
        .args(["areas", "add", "work", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("template-backed"));

    aurora_cmd(&dir)
        .arg("areas")
        .assert()
        .success()
        .stdout(predicate::str::contains("work"))
        .stdout(predicate::str::contains("Steady progress"));
}

#[test]
fn custom_area_warns_about_missing_template() {
    let dir = TempDir::new().unwrap();
    aurora_cmd(&dir)
        .args(["areas", "add", "gardening", "Gardening"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no template"));
}

#[test]
fn scan_then_suggest() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    std::fs::write(docs.join("invoice-march.pdf"), b"pdf").unwrap();
    std::fs::write(docs.join("holiday-snap.raw"), b"img").unwrap();

    aurora_cmd(&dir)
        .args(["areas", "add", "money", "Money"])
        .assert()
        .success();

    aurora_cmd(&dir)
        .arg("scan")
        .arg(&docs)
        .assert()
        .success()
        .stdout(predicate::str::contains("scanned 2 files"));

    aurora_cmd(&dir)
        .args(["suggest", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invoice-march.pdf"))
        .stdout(predicate::str::contains("money"));
}

#[test]
fn suggest_json_emits_parseable_rows() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    std::fs::write(docs.join("invoice-march.pdf"), b"pdf").unwrap();

    aurora_cmd(&dir)
        .args(["areas", "add", "money", "Money"])
        .assert()
        .success();
    aurora_cmd(&dir).arg("scan").arg(&docs).assert().success();

    let out = aurora_cmd(&dir)
        .args(["suggest", "--all", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["suggestion"]["lifeAreaId"], "money");
    assert!(
        rows[0]["file"]["path"]
            .as_str()
            .unwrap()
            .ends_with("invoice-march.pdf")
    );
}

#[test]
fn resurface_json_is_an_array_of_candidates() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    std::fs::write(docs.join("a.txt"), b"a").unwrap();

    aurora_cmd(&dir).arg("scan").arg(&docs).assert().success();

    let out = aurora_cmd(&dir)
        .args(["resurface", "--seed", "3", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let candidates: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let candidates = candidates.as_array().unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0]["rationale"], "randomDelight");
}

#[test]
fn suggest_without_areas_gives_a_hint() {
    let dir = TempDir::new().unwrap();
    aurora_cmd(&dir)
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("no life areas configured"));
}

#[test]
fn resurface_empty_catalogue() {
    let dir = TempDir::new().unwrap();
    aurora_cmd(&dir)
        .args(["resurface", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(nothing to resurface)"));
}

#[test]
fn resurface_fresh_files_is_random_delight_only() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    std::fs::write(docs.join("a.txt"), b"a").unwrap();
    std::fs::write(docs.join("b.txt"), b"b").unwrap();

    aurora_cmd(&dir).arg("scan").arg(&docs).assert().success();

    // Files created moments ago can only land in the random lane.
    aurora_cmd(&dir)
        .args(["resurface", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[random-delight]"))
        .stdout(predicate::str::contains("[forgotten]").not())
        .stdout(predicate::str::contains("[seasonal-echo]").not());
}

#[test]
fn seeded_resurface_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    for i in 0..8 {
        std::fs::write(docs.join(format!("f{i}.txt")), b"x").unwrap();
    }
    aurora_cmd(&dir).arg("scan").arg(&docs).assert().success();

    let first = aurora_cmd(&dir)
        .args(["resurface", "--seed", "42"])
        .output()
        .unwrap();
    let second = aurora_cmd(&dir)
        .args(["resurface", "--seed", "42"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn tag_requires_a_known_area() {
    let dir = TempDir::new().unwrap();
    aurora_cmd(&dir)
        .args(["tag", "/nope.txt", "work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown life area"));
}

#[test]
fn tag_a_scanned_file() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    let file = docs.join("lease.pdf");
    std::fs::write(&file, b"pdf").unwrap();

    aurora_cmd(&dir)
        .args(["areas", "add", "home", "Home"])
        .assert()
        .success();
    aurora_cmd(&dir).arg("scan").arg(&docs).assert().success();

    aurora_cmd(&dir)
        .args(["tag", file.to_str().unwrap(), "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tagged"));
}
