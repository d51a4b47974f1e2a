//! Shared test utilities for CLI E2E tests.
//!
//! The fixture gives every test an isolated sandbox:
//!
//! - `work/`: the directory gitclone runs in; "cloned" projects live here.
//! - `bin/`: the only entry on `PATH`; fake `git`, `go`, `yarn` and `npm`
//!   scripts are installed here.
//! - `home/`: used as `HOME`, so config lookup never sees the real one.
//! - `calls.log`: every fake tool appends one line per invocation.
//!
//! The fake tools are `/bin/sh` scripts that only use shell builtins, since
//! `PATH` contains nothing but `bin/`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new()
//!     .with_tool("git")
//!     .with_cloned_project("widget", &["go.mod"]);
//! fixture.command().arg(REPO_URL).assert().success();
//! ```

#![cfg(unix)]

use assert_fs::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
    pub use super::REPO_URL;
}

/// Repository URL used by most tests; it derives the `widget` directory.
pub const REPO_URL: &str = "https://github.com/example/widget.git";

/// A sandbox with fake tools on `PATH`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with empty `work/`, `bin/` and `home/`.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        for dir in ["work", "bin", "home"] {
            temp_dir
                .child(dir)
                .create_dir_all()
                .expect("Failed to create fixture directory");
        }
        Self { temp_dir }
    }

    /// Install a fake tool that logs its arguments and succeeds.
    ///
    /// The tool prints `<name>-out <args>` to stdout and `<name>-err` to
    /// stderr.
    pub fn with_tool(self, name: &str) -> Self {
        let body = format!(
            "echo \"{name} $* @ $(pwd)\" >> \"{log}\"\n\
             echo \"{name}-out $*\"\n\
             echo \"{name}-err\" >&2\n",
            name = name,
            log = self.log_path().display()
        );
        self.with_script(name, &body)
    }

    /// Install a fake tool that logs its arguments and exits with `code`.
    #[allow(dead_code)]
    pub fn with_failing_tool(self, name: &str, code: i32) -> Self {
        let body = format!(
            "echo \"{name} $*\" >> \"{log}\"\n\
             echo \"{name} failed\" >&2\n\
             exit {code}\n",
            name = name,
            log = self.log_path().display(),
            code = code
        );
        self.with_script(name, &body)
    }

    /// Install an executable script under `bin/` with the given body.
    pub fn with_script(self, name: &str, body: &str) -> Self {
        let path = self.bin_dir().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}", body)).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        self
    }

    /// Create `work/<name>` containing the given marker files, standing in for
    /// the result of a clone.
    pub fn with_cloned_project(self, name: &str, markers: &[&str]) -> Self {
        let dir = self.temp_dir.child("work").child(name);
        dir.create_dir_all().expect("Failed to create project dir");
        for marker in markers {
            dir.child(marker)
                .write_str("")
                .expect("Failed to write marker file");
        }
        self
    }

    /// Write `home/<name>` with the given content.
    #[allow(dead_code)]
    pub fn with_home_file(self, name: &str, content: &str) -> Self {
        self.temp_dir
            .child("home")
            .child(name)
            .write_str(content)
            .expect("Failed to write home file");
        self
    }

    /// Write a file at the fixture root and return its path.
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let child = self.temp_dir.child(name);
        child.write_str(content).expect("Failed to write file");
        child.path().to_path_buf()
    }

    pub fn work_dir(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.temp_dir.path().join("bin")
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn log_path(&self) -> PathBuf {
        self.temp_dir.path().join("calls.log")
    }

    /// Lines recorded by the fake tools, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Create a command running in `work/` with a sandboxed environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gitclone");
        cmd.current_dir(self.work_dir())
            .env("PATH", self.bin_dir())
            .env("HOME", self.temp_dir.path().join("home"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("GITCLONE_CLONE_PROGRAM")
            .env_remove("GITCLONE_SKIP_INSTALL");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
