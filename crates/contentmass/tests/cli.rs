// ABOUTME: Integration tests for the contentmass CLI binary.
// ABOUTME: Tests file, stdin and URL inputs, output formats, score dumps and failure modes.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Kept free of inter-tag whitespace: blank text runs score too, and indentation
// would feed the body as much as the content div.
const ARTICLE_PAGE: &str = concat!(
    r#"<!DOCTYPE html><html><head><title>Test Page</title></head><body>"#,
    r#"<nav><a href="/">Home</a><a href="/news">News</a><a href="/contact">Contact us</a></nav>"#,
    r#"<div class="content" id="story">"#,
    r#"<p>The first paragraph carries enough prose to be scored as real article content by the extractor, running on with clauses and commas so that it fills a few lines.</p>"#,
    r#"<p>The second paragraph continues the story with yet more words, commas, and sentences to read, adding detail after detail until the reader has a full picture of it.</p>"#,
    r#"<p>The third paragraph keeps the momentum going, describing what happened next in enough detail that nobody could mistake it for a navigation link or a footer.</p>"#,
    r#"<p>The fourth paragraph wraps up, closing the article with a final thought worth keeping around, long enough to count as proper prose rather than page chrome.</p>"#,
    r#"</div></body></html>"#,
);

fn contentmass_cmd() -> Command {
    Command::cargo_bin("contentmass").unwrap()
}

fn write_page(dir: &TempDir, html: &str) -> std::path::PathBuf {
    let path = dir.path().join("page.html");
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn extract_text_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir, ARTICLE_PAGE);

    contentmass_cmd()
        .arg("--format")
        .arg("text")
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The first paragraph"))
        .stdout(predicate::str::contains("final thought"))
        .stdout(predicate::str::contains("Contact us").not());
}

#[test]
fn extract_html_is_content_root() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir, ARTICLE_PAGE);

    contentmass_cmd()
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<div class="content" id="story">"#));
}

#[test]
fn json_output_describes_root() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir, ARTICLE_PAGE);

    let output = contentmass_cmd()
        .arg("--json")
        .arg("-f")
        .arg("md")
        .arg(&html_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["tag"], "div");
    assert_eq!(value["id"], "story");
    assert_eq!(value["content_type"], "markdown");
    assert!(value["score"].as_f64().unwrap() > 0.0);
    assert!(value["source"].as_str().unwrap().ends_with("page.html"));
}

#[test]
fn reads_stdin() {
    contentmass_cmd()
        .arg("-f")
        .arg("text")
        .arg("-")
        .write_stdin(ARTICLE_PAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("second paragraph"));
}

#[test]
fn fetches_url() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/article");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(ARTICLE_PAGE);
    });

    contentmass_cmd()
        .arg("-f")
        .arg("text")
        .arg(server.url("/article"))
        .assert()
        .success()
        .stdout(predicate::str::contains("third paragraph"));

    mock.assert();
}

#[test]
fn fetch_failure_status_fails() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("nope");
    });

    contentmass_cmd()
        .arg(server.url("/missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("fetch error"));

    mock.assert();
}

#[test]
fn multiple_targets_json_array() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_page(&temp_dir, ARTICLE_PAGE);
    let second = temp_dir.path().join("second.html");
    fs::write(
        &second,
        "<html><body><article><p>Another article entirely, short but sweet.</p></article></body></html>",
    )
    .unwrap();

    let output = contentmass_cmd()
        .arg("--json")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let results = value.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["tag"], "article");
}

#[test]
fn output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir, ARTICLE_PAGE);
    let output_path = temp_dir.path().join("output.html");

    contentmass_cmd()
        .arg(&html_path)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let output_content = fs::read_to_string(&output_path).unwrap();
    assert!(output_content.contains("<p>The first paragraph"));
    assert!(!output_content.contains("<nav>"));
}

#[test]
fn scores_dump_ranks_content_first() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir, ARTICLE_PAGE);

    let output = contentmass_cmd()
        .arg("--scores")
        .arg(&html_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let first_row = stdout.lines().nth(1).unwrap();
    assert!(first_row.ends_with("div#story.content"), "got {}", first_row);
}

#[test]
fn config_file_overrides_scoring() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir, ARTICLE_PAGE);
    let config_path = temp_dir.path().join("scoring.json");
    fs::write(&config_path, r#"{"parent_factor": 0.0, "grandparent_factor": 0.0}"#).unwrap();

    // Without propagation the class-weighted div still outscores any single paragraph.
    contentmass_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<div"));
}

#[test]
fn bad_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir, ARTICLE_PAGE);
    let config_path = temp_dir.path().join("scoring.json");
    fs::write(&config_path, "{ nope").unwrap();

    contentmass_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg(&html_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn no_content_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = write_page(&temp_dir, "<html><body><ul><li>just a list</li></ul></body></html>");

    contentmass_cmd()
        .arg(&html_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no content found"));
}

#[test]
fn missing_file_fails() {
    contentmass_cmd()
        .arg("/no/such/page.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read error"));
}

#[test]
fn no_args_fails() {
    contentmass_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one target is required"));
}
