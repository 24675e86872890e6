//! Puzzle inputs stored on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Read-only view over an input directory.
///
/// Directory structure: `{dir}/day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self, day: u8) -> PathBuf {
        self.dir.join(format!("day{:02}.txt", day))
    }

    pub fn contains(&self, day: u8) -> bool {
        self.path(day).is_file()
    }

    pub fn read(&self, day: u8) -> Result<String, InputError> {
        let path = self.path(day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { path },
            _ => InputError::Io { path, source },
        })
    }
}
