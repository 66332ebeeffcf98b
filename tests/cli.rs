use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const NOTES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites tests="3" failures="1" errors="0" time="1.5">
  <testsuite name="Notes" tests="3" failures="1" errors="0" time="1.234" timestamp="2024-05-01T10:20:30">
    <testcase name="create note"/>
    <testcase name="get note">
      <failure>Expected 200 got 404</failure>
    </testcase>
    <testcase name="delete note"/>
  </testsuite>
</testsuites>"#;

fn junit2html() -> Command {
    let mut cmd = Command::cargo_bin("junit2html").expect("binary is built");
    cmd.env_remove("JUNIT_REPORT_INPUT")
        .env_remove("JUNIT_REPORT_OUTPUT")
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_OUTPUT_FILE");
    cmd
}

#[test]
fn converts_report_to_html() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.xml");
    let output = dir.path().join("report.html");
    fs::write(&input, NOTES).unwrap();

    junit2html()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML report generated successfully"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"<div class="percentage">66.7%</div>"#));
    assert!(html.contains(r#"<span class="stat-badge failed">1 failed</span>"#));
    assert!(html.contains("Expected 200 got 404"));
}

#[test]
fn paths_can_come_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.xml");
    let output = dir.path().join("nested").join("out.html");
    fs::write(&input, NOTES).unwrap();

    junit2html()
        .env("JUNIT_REPORT_INPUT", &input)
        .env("JUNIT_REPORT_OUTPUT", &output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn settings_file_changes_page_labels() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.xml");
    let output = dir.path().join("report.html");
    let settings = dir.path().join("settings.toml");
    fs::write(&input, NOTES).unwrap();
    fs::write(
        &settings,
        "[report]\nheading = \"Nightly <API> run\"\nlang = \"en\"\n",
    )
    .unwrap();

    junit2html()
        .arg("-c")
        .arg(&settings)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h1>Nightly &lt;API&gt; run</h1>"));
    assert!(html.contains(r#"<html lang="en">"#));
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.html");

    junit2html()
        .arg("-i")
        .arg(dir.path().join("absent.xml"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read report"));

    assert!(!output.exists());
}

#[test]
fn silenced_logging_still_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.html");

    junit2html()
        .arg("-L")
        .arg("off")
        .arg("-i")
        .arg(dir.path().join("absent.xml"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read report"));

    assert!(!output.exists());
}

#[test]
fn bom_prefixed_report_converts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.xml");
    let output = dir.path().join("report.html");
    fs::write(&input, format!("\u{feff}{}", NOTES)).unwrap();

    junit2html()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert!(fs::read_to_string(&output).unwrap().contains("66.7%"));
}

#[test]
fn malformed_xml_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.xml");
    let output = dir.path().join("report.html");
    fs::write(&input, "<testsuites tests=\"1\">").unwrap();

    junit2html()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse report"));

    assert!(!output.exists());
}

#[test]
fn non_numeric_counter_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.xml");
    let output = dir.path().join("report.html");
    fs::write(
        &input,
        r#"<testsuites tests="many" failures="0" errors="0" time="1"/>"#,
    )
    .unwrap();

    junit2html()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'tests' is not a valid number"));

    assert!(!output.exists());
}
