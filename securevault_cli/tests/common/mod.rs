//!
//! # Test Common Utilities
//!
//! Shared helpers for the `securevault` CLI integration tests: each test
//! gets an isolated vault inside a temporary directory, and commands run
//! against it through `assert_cmd`.
//!

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{TempDir, tempdir};

/// An isolated vault for one test. The temporary directory is cleaned up
/// when the context goes out of scope.
pub struct TestContext {
    /// Held for its Drop behavior to ensure cleanup.
    pub _temp_dir: TempDir,
    pub vault_path: PathBuf,
}

impl TestContext {
    /// Creates and initializes a fresh vault.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempdir()?;
        let vault_path = temp_dir.path().join("vault");

        let mut cmd = Command::cargo_bin("securevault")?;
        cmd.arg("--vault").arg(&vault_path).arg("init");
        cmd.assert().success();

        Ok(TestContext {
            _temp_dir: temp_dir,
            vault_path,
        })
    }

    /// A command already pointed at this vault.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("securevault").expect("binary exists");
        cmd.arg("--vault").arg(&self.vault_path);
        cmd
    }

    /// Writes a local file and registers it in the catalog; returns the
    /// minted entry id parsed from the command output.
    pub fn add_file(&self, file_name: &str, content: &str) -> anyhow::Result<String> {
        let local_path = self.scratch_file(file_name, content)?;

        let output = self
            .cmd()
            .arg("add")
            .arg(&local_path)
            .output()?;
        anyhow::ensure!(output.status.success(), "add failed");

        let stdout = String::from_utf8(output.stdout)?;
        parse_minted_id(&stdout)
    }

    /// Writes a throwaway file next to the vault.
    pub fn scratch_file(&self, file_name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let local_path = self._temp_dir.path().join(file_name);
        fs::write(&local_path, content)?;
        Ok(local_path)
    }

    pub fn vault_path(&self) -> &Path {
        &self.vault_path
    }
}

/// 从 "Added 'x' with id 123." 中取出 id。
fn parse_minted_id(stdout: &str) -> anyhow::Result<String> {
    let id = stdout
        .rsplit("with id ")
        .next()
        .and_then(|rest| rest.split(['.', '\n']).next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("no id in output: {stdout}"))?;
    Ok(id.to_string())
}
