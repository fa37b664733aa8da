//! End-to-end tests for the guard-site generator binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the guard-site binary
fn guard_site() -> Command {
    cargo_bin_cmd!("guard-site")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        guard_site()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("guard-site"))
            .stdout(predicate::str::contains("--static-dir"));
    }

    #[test]
    fn shows_version() {
        guard_site()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Site Build Tests
// ============================================

mod site_build {
    use super::*;

    #[test]
    fn writes_index_html() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");

        guard_site()
            .args(["--out", out.to_str().unwrap()])
            .current_dir(tmp.path())
            .assert()
            .success();

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Easy to Use"));
        assert!(html.contains("Focus on What Matters"));
        assert!(html.contains("Powered by Presidio"));
    }

    #[test]
    fn copies_static_assets_into_site_root() {
        let tmp = TempDir::new().unwrap();
        let static_dir = tmp.path().join("static");
        std::fs::create_dir_all(static_dir.join("img")).unwrap();
        std::fs::write(static_dir.join("img/easy_to_use.png"), b"png").unwrap();
        let out = tmp.path().join("dist");

        guard_site()
            .args(["--out", out.to_str().unwrap()])
            .current_dir(tmp.path())
            .assert()
            .success();

        assert!(out.join("img/easy_to_use.png").is_file());
    }

    #[test]
    fn succeeds_without_static_dir() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");

        guard_site()
            .args(["--out", out.to_str().unwrap()])
            .current_dir(tmp.path())
            .assert()
            .success();

        assert!(out.join("index.html").is_file());
    }
}
