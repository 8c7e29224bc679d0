//! Common test utilities for filedep integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A full commit id used in hand-written lockfiles
#[allow(dead_code)]
pub const SHA: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

/// An address nothing listens on, so network calls fail fast
pub const OFFLINE_HOST: &str = "127.0.0.1:9";

/// A test project for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty directory (no manifest yet)
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a directory holding an empty filedep.toml
    pub fn initialized() -> Self {
        let workspace = Self::new();
        workspace.write_file("filedep.toml", "");
        workspace
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Declare a dependency in filedep.toml
    pub fn declare(&self, name: &str, source: &str, path: &str) {
        let mut manifest = if self.file_exists("filedep.toml") {
            self.read_file("filedep.toml")
        } else {
            String::new()
        };
        manifest.push_str(&format!(
            "\n[dependencies.{name}]\nsource = \"{source}\"\npath = \"{path}\"\n"
        ));
        self.write_file("filedep.toml", &manifest);
    }

    /// Record a commit-pinned lock entry in filedep.lock
    pub fn lock(&self, name: &str, url: &str, path: &str) {
        let mut lockfile = if self.file_exists("filedep.lock") {
            self.read_file("filedep.lock")
        } else {
            "version = 1\n".to_string()
        };
        lockfile.push_str(&format!(
            "\n[files.{name}]\nurl = \"{url}\"\npath = \"{path}\"\nintegrity = \"commit:{SHA}\"\n"
        ));
        self.write_file("filedep.lock", &lockfile);
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the filedep binary, isolated from the developer environment
///
/// Every network endpoint points at [`OFFLINE_HOST`].
#[allow(deprecated)]
pub fn filedep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("filedep").expect("filedep binary should be built");
    cmd.env_remove("FILEDEP_WORKSPACE");
    cmd.env_remove("GITHUB_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd.env("FILEDEP_GITHUB_API", format!("http://{OFFLINE_HOST}"));
    cmd.env("FILEDEP_RAW_HOST", OFFLINE_HOST);
    cmd.env("FILEDEP_TIMEOUT", "5");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_declare_and_lock_append() {
        let workspace = TestWorkspace::initialized();
        workspace.declare("a", "github:acme/lib/a.lua@main", "a.lua");
        workspace.declare("b", "github:acme/lib/b.lua@main", "b.lua");
        workspace.lock("a", "https://example.test/a.lua", "a.lua");

        let manifest = workspace.read_file("filedep.toml");
        assert!(manifest.contains("[dependencies.a]"));
        assert!(manifest.contains("[dependencies.b]"));
        assert!(workspace.read_file("filedep.lock").starts_with("version = 1"));
    }
}
