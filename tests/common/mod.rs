//! Isolated environment for driving the shipyard binary.
//!
//! Each `TestEnv` owns a temp working directory, points the user config
//! directory and the log file inside it and clears `SHIPYARD_*` overrides
//! inherited from the caller.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const INHERITED_OVERRIDES: &[&str] = &[
    "SHIPYARD_APP_NAME",
    "SHIPYARD_LANGUAGE",
    "SHIPYARD_PORTS",
    "SHIPYARD_BASE_IMAGE",
    "SHIPYARD_METRICS",
    "SHIPYARD_SKAFFOLD_PATH",
    "SHIPYARD_KUBECTL_PATH",
    "SHIPYARD_LOG_FILE",
    "RUST_LOG",
];

#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub root: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            env: Vec::new(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("reading {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.env
            .push((key.to_string(), value.as_ref().display().to_string()));
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_shipyard"));
        cmd.current_dir(self.root.path())
            .env("XDG_CONFIG_HOME", self.path(".config"))
            .env("HOME", self.root.path());
        for key in INHERITED_OVERRIDES {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd.args(args);

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// A stand-in for `skaffold`/`kubectl` that appends its argv to a log
/// file and exits with a scripted code per first argument.
#[cfg(unix)]
pub struct StubTool {
    pub path: PathBuf,
    pub calls: PathBuf,
}

#[cfg(unix)]
impl StubTool {
    /// `exits` maps a first argument (e.g. `run`) to its exit code; anything
    /// else exits 0.
    pub fn install(env: &TestEnv, name: &str, exits: &[(&str, i32)]) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = env.path("bin");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let calls = env.path(&format!("{}.calls", name));

        let mut cases = String::new();
        for (arg, code) in exits {
            cases.push_str(&format!("  {}) exit {} ;;\n", arg, code));
        }
        let script = format!(
            "#!/bin/sh\necho \"$*\" >> \"{}\"\ncase \"$1\" in\n{}esac\nexit 0\n",
            calls.display(),
            cases
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        Self { path, calls }
    }

    /// Recorded invocations, one argument string per call
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.calls)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
