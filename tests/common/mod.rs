use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub registry: PathBuf,
}

impl TestEnv {
    /// Fixture registry whose record for this package matches the built version.
    pub fn new() -> Self {
        Self::with_recorded_version(env!("CARGO_PKG_VERSION"))
    }

    pub fn with_recorded_version(recorded: &str) -> Self {
        Self::build(Some(recorded))
    }

    /// Fixture registry with no record for this package at all.
    pub fn without_self_record() -> Self {
        Self::build(None)
    }

    fn build(self_version: Option<&str>) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let registry = write_fixture_registry(tmp.path(), self_version);

        Self {
            _tmp: tmp,
            home,
            registry,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vercheck").expect("binary under test");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn registry_arg(&self) -> &str {
        self.registry.to_str().expect("registry path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--registry")
            .arg(self.registry_arg())
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--registry")
            .arg(self.registry_arg())
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json error output")
    }
}

fn write_fixture_registry(base: &Path, self_version: Option<&str>) -> PathBuf {
    let path = base.join("registry.json");

    let mut distributions = vec![serde_json::json!({
        "name": "quartz-lsp",
        "version": "0.9.1"
    })];
    if let Some(version) = self_version {
        distributions.push(serde_json::json!({
            "name": "vercheck",
            "version": version
        }));
    }

    let doc = serde_json::json!({
        "version": 1,
        "distributions": distributions
    });
    fs::write(
        &path,
        serde_json::to_string_pretty(&doc).expect("serialize registry"),
    )
    .expect("write registry");

    path
}
