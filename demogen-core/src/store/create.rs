//! Write generated files into the output directory.

use std::path::{Path, PathBuf};

use crate::error::{DemoGenError, DemoGenResult};

/// Write a file to the directory, replacing any file with the same name.
pub fn create(dir: &Path, filename: &str, content: &str) -> DemoGenResult<PathBuf> {
    let path = dir.join(filename);

    std::fs::write(&path, content).map_err(|e| DemoGenError::io(&path, e))?;

    Ok(path)
}
