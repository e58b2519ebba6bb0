//! Shared testing utilities for vowelkit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that must not leak from the developer's shell into tests.
const SCRUBBED_ENV: [&str; 5] =
    ["VOWELKIT_API_KEY", "OPENAI_API_KEY", "VOWELKIT_API_URL", "VOWELKIT_MODEL", "VOWELKIT_LOG"];

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `vowelkit` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vowelkit").expect("Failed to locate vowelkit binary");
        cmd.current_dir(&self.work_dir);
        for name in SCRUBBED_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Build a command wired to a fake chat-completion endpoint.
    pub fn cli_with_service(&self, base_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("VOWELKIT_API_KEY", "test-key")
            .env("VOWELKIT_API_URL", format!("{}/v1/chat/completions", base_url));
        cmd
    }

    /// Write a `vowelkit.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("vowelkit.toml"), content).expect("Failed to write config");
    }

    /// Read an exported resource file, if present.
    pub fn read_output(&self, file_name: &str) -> Option<String> {
        fs::read_to_string(self.work_dir.join(file_name)).ok()
    }

    /// Assert that none of the export files exist in the work directory.
    pub fn assert_no_exports(&self) {
        for name in ["vocab_list.txt", "student_worksheet.txt", "student_reading_passages.txt"] {
            assert!(!self.work_dir.join(name).exists(), "{} should not exist", name);
        }
    }
}

/// Chat-completion response body with a single choice.
#[allow(dead_code)]
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
    .to_string()
}

/// Standard lesson flags used across tests.
#[allow(dead_code)]
pub const OCEAN_LESSON: [&str; 8] =
    ["--category", "long-vowel", "--grade", "5", "--topic", "ocean animals", "--minutes", "10"];
