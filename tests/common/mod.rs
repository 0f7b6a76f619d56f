#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run gitpod-issues commands against an isolated data root
pub struct IssuesTest {
    pub temp_dir: TempDir,
    binary_path: PathBuf,
}

impl IssuesTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        IssuesTest {
            temp_dir,
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_gitpod-issues")),
        }
    }

    pub fn data_root(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("GITPOD_ISSUES_ROOT", self.data_root())
            .env("NO_COLOR", "1")
            .env_remove("GITPOD_ISSUES_LOG")
            .output()
            .expect("Failed to execute gitpod-issues command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("Invalid JSON from {args:?}: {e}\n{stdout}"))
    }

    /// Write `content` to a file in the temp directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> String {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path.to_string_lossy().into_owned()
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.data_root()).expect("Failed to create data root");
        fs::write(self.data_root().join("config.yaml"), content)
            .expect("Failed to write config file");
    }

    pub fn read_data_file(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.data_root().join(name)).ok()
    }
}
