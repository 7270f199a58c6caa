//! Remove generated files from the output directory.

use std::path::Path;

use crate::constants::FILE_EXTENSION;
use crate::error::{DemoGenError, DemoGenResult};

/// Delete every generated file directly inside `dir`.
///
/// Only regular files with the generated extension are removed; other files
/// and subdirectories are left alone.
pub fn clear(dir: &Path) -> DemoGenResult<usize> {
    let mut removed = 0;

    let entries = std::fs::read_dir(dir).map_err(|e| DemoGenError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| DemoGenError::io(dir, e))?;
        let path = entry.path();

        if path.is_file() && path.extension().map(|e| e == FILE_EXTENSION).unwrap_or(false) {
            std::fs::remove_file(&path).map_err(|e| DemoGenError::io(&path, e))?;
            removed += 1;
        }
    }

    Ok(removed)
}
