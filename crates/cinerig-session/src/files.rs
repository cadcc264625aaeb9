//! File read/write collaborator

use cinerig_core::Result;
use std::collections::HashMap;
use std::fs;

/// The host's file primitive: whole-file text read and write
pub trait FileStore {
    fn read(&self, path: &str) -> Result<String>;
    fn write(&mut self, path: &str, contents: &str) -> Result<()>;
}

/// Disk-backed store
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&self, path: &str) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<()> {
        fs::write(path, contents)?;
        Ok(())
    }
}

/// In-memory store for tests and headless hosts
#[derive(Default)]
pub struct MemoryStore {
    files: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(|s| s.as_str())
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &str) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("no such file: {}", path))
                .into()
        })
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<()> {
        self.files.insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
