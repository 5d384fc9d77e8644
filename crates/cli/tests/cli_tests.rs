//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("pagelift")
}

fn get_fixture_path(name: &str) -> String {
    format!("{}/../../tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("BUILDING A RAIN GAUGE"))
        .stdout(predicate::str::contains("  • Waterproof marker"));
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("article.html")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Cut the top off the bottle."));
}

#[test]
fn test_cli_removes_page_chrome() {
    cmd()
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Copyright").not())
        .stdout(predicate::str::contains("Sponsored").not());
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", &get_fixture_path("article.html")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["title"], "Building a Rain Gauge | Backyard Science");
    assert_eq!(value["author"], "Priya Raman");
    assert_eq!(value["statistics"]["headingCount"], 4);
    assert_eq!(value["blocks"][0]["type"], "heading");
    assert!(value["url"].as_str().unwrap().ends_with("article.html"));
}

#[test]
fn test_cli_csv_format() {
    cmd()
        .args(["-f", "csv", &get_fixture_path("docs_page.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("URL,Title,Content,Extracted At\n"))
        .stdout(predicate::str::contains(",\"Install Guide\","));
}

#[test]
fn test_cli_text_format() {
    cmd()
        .args(["--format", "text", &get_fixture_path("docs_page.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Install Guide\n\nContent:\n"))
        .stdout(predicate::str::contains("Extracted At: "));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "markdown", &get_fixture_path("article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output.txt");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Output written to"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("[CODE BLOCK]"));
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .arg("nonexistent.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_empty_content_falls_back() {
    cmd()
        .arg(get_fixture_path("empty_content.html"))
        .assert()
        .success()
        .stdout(predicate::str::diff("Welcome to the landing page Too short."));
}

#[test]
fn test_cli_stats() {
    cmd()
        .args(["--stats", &get_fixture_path("empty_content.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Statistics"))
        .stderr(predicate::str::contains("Words"));
}

#[test]
fn test_cli_min_paragraph_chars() {
    cmd()
        .args(["--min-paragraph-chars", "5", &get_fixture_path("empty_content.html")])
        .assert()
        .success()
        .stdout(predicate::str::diff("Too short.\n\n"));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Pagelift"))
        .stderr(predicate::str::contains("Timing Summary"));
}

#[test]
fn test_cli_unreachable_url() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    cmd()
        .args(["--timeout", "2", &url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch URL"));
}
