use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INDEX: &str = "<html>\n<body>\n  <h1>My Blog</h1>\n  <p>older</p>\n</body>\n</html>\n";

/// Site with one post, one image and a homepage
fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("_posts")).unwrap();
    fs::create_dir_all(root.join("assets/img")).unwrap();
    fs::write(
        root.join("_posts/2024-01-01-hello.md"),
        "---\nlayout: post\ntitle: Hello: again\ndescription: First post\n---\nBody\n",
    )
    .unwrap();
    fs::write(root.join("assets/img/hello.png"), b"png").unwrap();
    fs::write(root.join("index.html"), INDEX).unwrap();
    dir
}

fn homecard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("homecard").unwrap();
    cmd.arg("--cwd").arg(dir);
    cmd
}

#[test]
fn test_add_writes_review_copy() {
    let dir = site();

    homecard(dir.path())
        .args(["add", "-p", "_posts/2024-01-01-hello.md", "-i", "assets/img/hello.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.new.html"));

    assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), INDEX);
    let patched = fs::read_to_string(dir.path().join("index.new.html")).unwrap();
    assert!(patched.starts_with("<html>\n<body>\n  <h1>My Blog</h1>\n\n<!-- Hello: again -->\n"));
    assert!(patched.contains(r#"<a href="/posts/2024-01-01-hello/">"#));
    assert!(patched.contains(r#"src="/assets/img/hello.png""#));
    assert!(patched.contains("First post"));
}

#[test]
fn test_add_inplace_with_dated_slug() {
    let dir = site();

    homecard(dir.path())
        .args([
            "add",
            "--post",
            "_posts/2024-01-01-hello.md",
            "--image",
            "assets/img/hello.png",
            "--button",
            "Read it",
            "--slug-style",
            "dated",
            "--inplace",
        ])
        .assert()
        .success();

    assert!(!dir.path().join("index.new.html").exists());
    let patched = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(patched.contains(r#"href="/posts/hello/""#));
    assert!(patched.contains("Read it"));
}

#[test]
fn test_render_prints_fragment_only() {
    let dir = site();

    homecard(dir.path())
        .args([
            "render",
            "-p",
            "_posts/2024-01-01-hello.md",
            "-i",
            "assets/img/hello.png",
            "-t",
            "Custom",
            "-d",
            "Custom description",
            "--layout",
            "flex",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- Custom -->"))
        .stdout(predicate::str::contains("Custom description"))
        .stdout(predicate::str::contains("post-card"));

    assert!(!dir.path().join("index.new.html").exists());
}

#[test]
fn test_missing_heading_fails_without_artifact() {
    let dir = site();
    fs::write(dir.path().join("index.html"), "<h2>none</h2>\n").unwrap();

    homecard(dir.path())
        .args(["add", "-p", "_posts/2024-01-01-hello.md", "-i", "assets/img/hello.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing written"));

    assert!(!dir.path().join("index.new.html").exists());
}

#[test]
fn test_malformed_front_matter_fails() {
    let dir = site();
    fs::write(
        dir.path().join("_posts/2024-01-01-hello.md"),
        "---\ntitle: Hello\n---\n",
    )
    .unwrap();

    homecard(dir.path())
        .args(["add", "-p", "_posts/2024-01-01-hello.md", "-i", "assets/img/hello.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("description"));

    assert!(!dir.path().join("index.new.html").exists());
}

#[test]
fn test_missing_image_fails() {
    let dir = site();

    homecard(dir.path())
        .args(["add", "-p", "_posts/2024-01-01-hello.md", "-i", "assets/img/nope.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist or is invalid"));
}

#[test]
fn test_required_arguments() {
    let dir = site();

    homecard(dir.path())
        .args(["add", "-p", "_posts/2024-01-01-hello.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--image"));

    homecard(dir.path())
        .args(["add", "-p", "", "-i", "assets/img/hello.png"])
        .assert()
        .failure();

    assert!(!dir.path().join("index.new.html").exists());
}

#[test]
fn test_clean_removes_review_copy() {
    let dir = site();
    fs::write(dir.path().join("index.new.html"), "draft").unwrap();

    homecard(dir.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned"));

    assert!(!dir.path().join("index.new.html").exists());
}

#[test]
fn test_config_file_root() {
    let dir = site();
    let scripts = dir.path().join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::write(scripts.join("_homecard.yml"), "root: ..\nlayout: flex\n").unwrap();

    homecard(&scripts)
        .args([
            "add",
            "-p",
            "../_posts/2024-01-01-hello.md",
            "-i",
            "../assets/img/hello.png",
        ])
        .assert()
        .success();

    let patched = fs::read_to_string(dir.path().join("index.new.html")).unwrap();
    assert!(patched.contains(r#"<div class="post-card">"#));
    assert!(patched.contains(r#"src="/assets/img/hello.png""#));
}
