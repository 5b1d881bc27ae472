#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Closed port: every index probe fails, which must read as "does not exist".
pub const DEAD_INDEX_URL: &str = "http://127.0.0.1:9/pypi/{name}/json";

const FAKE_PIP: &str = r#"#!/bin/sh
STATE="$(dirname "$0")/state"
case "$1" in
  freeze)
    cat "$STATE/installed" 2>/dev/null
    exit 0
    ;;
  install)
    echo "$2" >> "$STATE/install_log"
    version=$(grep "^$2==" "$STATE/available" 2>/dev/null | head -n 1 | cut -d= -f3)
    if [ -n "$version" ]; then
      echo "$2==$version" >> "$STATE/installed"
      echo "Successfully installed $2-$version"
      exit 0
    fi
    echo "ERROR: No matching distribution found for $2" >&2
    exit 1
    ;;
esac
exit 2
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
    pub pip: PathBuf,
    state: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let project = tmp.path().join("project");
        let bin = tmp.path().join("bin");
        let state = bin.join("state");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&project).expect("create project dir");
        fs::create_dir_all(&state).expect("create fake pip state");

        let pip = bin.join("pip");
        fs::write(&pip, FAKE_PIP).expect("write fake pip");
        fs::set_permissions(&pip, fs::Permissions::from_mode(0o755)).expect("chmod fake pip");

        Self {
            _tmp: tmp,
            home,
            project,
            pip,
            state,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("reqscan");
        cmd.env("HOME", &self.home).env_remove("REQSCAN_LOG");
        cmd
    }

    pub fn pip_arg(&self) -> &str {
        self.pip.to_str().expect("pip path utf8")
    }

    pub fn project_arg(&self) -> &str {
        self.project.to_str().expect("project path utf8")
    }

    pub fn write_source(&self, rel: &str, body: &str) {
        let path = self.project.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create source dir");
        }
        fs::write(path, body).expect("write source");
    }

    pub fn set_installed(&self, lines: &[&str]) {
        write_lines(&self.state.join("installed"), lines);
    }

    pub fn set_available(&self, lines: &[&str]) {
        write_lines(&self.state.join("available"), lines);
    }

    pub fn install_log(&self) -> Vec<String> {
        fs::read_to_string(self.state.join("install_log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn read_project(&self, rel: &str) -> String {
        fs::read_to_string(self.project.join(rel)).expect("read project file")
    }

    /// `generate` against the fake pip and a dead index, never prompting.
    pub fn generate_json(&self) -> Value {
        self.run_json(&[
            "generate",
            self.project_arg(),
            "--pip",
            self.pip_arg(),
            "--index-url",
            DEAD_INDEX_URL,
            "--non-interactive",
        ])
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn write_lines(path: &Path, lines: &[&str]) {
    let mut body = lines.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(path, body).expect("write fake pip state");
}
