use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use serde_json::json;
use tokio::io::AsyncWriteExt;

/// Environment variables that influence locale, color or logging
const AMBIENT_VARS: &[&str] = &[
    "PARLANCE_COLOR",
    "PARLANCE_LOCALE",
    "PARLANCE_LOG",
    "LC_ALL",
    "LC_MESSAGES",
    "LANG",
    "LANGUAGE",
    "NO_COLOR",
    "CLICOLOR",
    "CLICOLOR_FORCE",
];

/// Output from running the binary
#[derive(Debug)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Exit code, or -1 when the process was killed by a signal
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }
}

/// Shared test fixture keeping catalog files isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
    env: Vec<(String, String)>,
}

impl Fixture {
    /// Create an empty fixture
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
            env: Vec::new(),
        }
    }

    /// Write a `<locale>.all.json` catalog from (id, translation) pairs
    ///
    /// # Panics
    ///
    /// Panics if the catalog file cannot be written.
    pub fn write_catalog(&self, locale: &str, entries: &[(&str, &str)]) {
        let messages: Vec<_> = entries
            .iter()
            .map(|(id, translation)| json!({"id": id, "translation": translation}))
            .collect();
        let document = serde_json::to_vec_pretty(&messages).unwrap();
        self.write_file(&format!("{locale}.all.json"), &document);
    }

    /// Write an arbitrary file into the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &[u8]) {
        fs::write(self.root_dir.path().join(name), contents).unwrap();
    }

    /// Directory holding the fixture files
    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Catalog directory argument for `--catalog-dir`
    pub fn catalog_dir(&self) -> String {
        self.root_dir.path().display().to_string()
    }

    /// Set an environment variable for subsequent runs
    pub fn set_env(&mut self, name: &str, value: &str) {
        self.env.push((name.to_string(), value.to_string()));
    }

    /// Run the binary with no input
    pub async fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, &[]).await
    }

    /// Run the binary feeding `stdin_bytes` to its standard input
    ///
    /// # Panics
    ///
    /// Panics if the binary cannot be spawned or waited on.
    pub async fn run_with_stdin(&self, args: &[&str], stdin_bytes: &[u8]) -> Output {
        let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_parlance"));
        for name in AMBIENT_VARS {
            command.env_remove(name);
        }
        command
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .args(args)
            .current_dir(self.root_dir.path())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().unwrap();

        if let Some(ref mut stdin) = child.stdin {
            stdin.write_all(stdin_bytes).await.unwrap_or_else(|err| {
                // Commands that never read stdin may exit before we finish writing.
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    panic!("failed write to stdin ({} bytes): {err}", stdin_bytes.len());
                }
            });
        }

        // Drop stdin to send EOF to the child process
        drop(child.stdin.take());

        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
            stdout_raw: raw_output.stdout,
        }
    }
}
