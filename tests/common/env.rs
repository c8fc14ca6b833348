//! Isolated environment for driving the sitemode binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{MAINTENANCE_HTML, MAINTENANCE_ICON};

/// Result of running a sitemode CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Temp project plus a temp home so the user config never leaks in
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let home = self.home_dir.path();
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("APPDATA", home.join("AppData").join("Roaming"))
            .env("NO_COLOR", "1")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("SITEMODE_PUBLISH_DIR")
            .env_remove("SITEMODE_BUILD_COMMAND")
            .env_remove("SITEMODE_DEPLOY_COMMAND");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute sitemode");
        to_result(output)
    }

    pub fn write_project_file(&self, relative_path: &str, content: &[u8]) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directories");
        }
        std::fs::write(&full_path, content).expect("failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> Vec<u8> {
        std::fs::read(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    with_bundle: bool,
    files: Vec<(String, Vec<u8>)>,
    project_config: Option<String>,
}

impl TestEnvBuilder {
    /// Add `web/maintenance.html` and `web/favicon.png`
    pub fn with_bundle(mut self) -> Self {
        self.with_bundle = true;
        self
    }

    pub fn with_file(mut self, relative_path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.push((relative_path.to_string(), content.into()));
        self
    }

    /// Write `sitemode.toml` in the project root
    pub fn with_project_config(mut self, config: &str) -> Self {
        self.project_config = Some(config.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: tempfile::tempdir().expect("failed to create project dir"),
            home_dir: tempfile::tempdir().expect("failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sitemode")),
        };

        if self.with_bundle {
            env.write_project_file("web/maintenance.html", MAINTENANCE_HTML);
            env.write_project_file("web/favicon.png", MAINTENANCE_ICON);
        }
        for (path, content) in &self.files {
            env.write_project_file(path, content);
        }
        if let Some(config) = &self.project_config {
            env.write_project_file("sitemode.toml", config.as_bytes());
        }

        env
    }
}
