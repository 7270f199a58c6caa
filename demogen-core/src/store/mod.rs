//! Output directory holding the generated Markdown files.

mod clear;
mod create;
mod filename;

pub use filename::filename_for;

use std::path::{Path, PathBuf};

use crate::error::{DemoGenError, DemoGenResult};

/// Directory the generated files are written into.
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Open the output directory, creating it (and its parents) if missing.
    pub fn prepare(path: impl Into<PathBuf>) -> DemoGenResult<Self> {
        let path = path.into();
        std::fs::create_dir_all(&path).map_err(|e| DemoGenError::io(&path, e))?;
        Ok(OutputDir { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove previously generated files. Returns how many were removed.
    pub fn clear(&self) -> DemoGenResult<usize> {
        clear::clear(&self.path)
    }

    /// Write one file into the directory and return its path.
    pub fn write(&self, filename: &str, content: &str) -> DemoGenResult<PathBuf> {
        create::create(&self.path, filename, content)
    }
}
