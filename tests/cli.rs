#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary with config lookup and CI output isolated from the host.
fn cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("image-detector").expect("binary should exist");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("GITHUB_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn create_file(root: &Path, relative_path: &str, content: &str) {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn empty_directory_prints_empty_array() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();

    cmd(home.path())
        .arg("-d")
        .arg(root.path())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn prints_deduplicated_sorted_images() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    create_file(root.path(), "dir1/file1.tf", "docker.io/library/ubuntu:latest");
    create_file(
        root.path(),
        "dir1/file2.tf",
        "docker.io/library/ubuntu:latest\nghcr.io/acme/api:1.0\n",
    );

    cmd(home.path())
        .arg("--check-directory")
        .arg(root.path())
        .assert()
        .success()
        .stdout("[\"docker.io/library/ubuntu:latest\",\"ghcr.io/acme/api:1.0\"]\n");
}

#[test]
fn exclude_flag_skips_files() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    create_file(root.path(), "file1.txt", "test/image1:1234");
    create_file(root.path(), "excluded.txt", "test/image2:5678");

    cmd(home.path())
        .arg("-d")
        .arg(root.path())
        .args(["-e", "**/excluded.txt", "--format", "lines"])
        .assert()
        .success()
        .stdout("test/image1:1234\n");
}

#[test]
fn default_excludes_skip_vendor_directories() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    create_file(root.path(), "main.tf", "docker.io/library/nginx:1.25");
    create_file(root.path(), "vendor/mod/README.md", "docker.io/library/redis:7");
    create_file(root.path(), "web/node_modules/x/doc.md", "docker.io/library/node:20");

    cmd(home.path())
        .arg("-d")
        .arg(root.path())
        .assert()
        .success()
        .stdout("[\"docker.io/library/nginx:1.25\"]\n");
}

#[test]
fn reads_settings_from_config_file() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    create_file(root.path(), "a.md", "quay.io/org/a:1");
    create_file(root.path(), "skip/b.md", "quay.io/org/b:2");

    let config = home.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "check-directory = {:?}\nexclude = [\"**/skip/**\"]\nformat = \"lines\"\n",
            root.path().to_str().unwrap()
        ),
    )
    .unwrap();

    cmd(home.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("quay.io/org/a:1\n");
}

#[test]
fn verbose_run_logs_loaded_config_file() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(
        &config,
        format!("check-directory = {:?}\n", root.path().to_str().unwrap()),
    )
    .unwrap();

    cmd(home.path())
        .arg("-v")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded config file"));
}

#[test]
fn writes_github_output_file() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    create_file(root.path(), "values.yaml", "image: test/image1:1234\n");
    let output = home.path().join("github_output");

    cmd(home.path())
        .env("GITHUB_OUTPUT", &output)
        .arg("-d")
        .arg(root.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "images=[\"test/image1:1234\"]\n"
    );
}

#[test]
fn missing_directory_fails() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();

    cmd(home.path())
        .arg("-d")
        .arg(root.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid root directory"));
}

#[test]
fn invalid_exclude_pattern_fails() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    create_file(root.path(), "a.txt", "x/y:1");

    cmd(home.path())
        .arg("-d")
        .arg(root.path())
        .args(["-e", "[invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[invalid"));
}
