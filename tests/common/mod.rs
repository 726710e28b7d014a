// tests/common/mod.rs
//! Shared helpers for the CLI tests.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn numrange() -> Command {
    Command::new(env!("CARGO_BIN_EXE_numrange"))
}

/// Temporary directory holding input files for one test.
pub struct Inputs {
    dir: TempDir,
}

impl Inputs {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}
