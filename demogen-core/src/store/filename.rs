//! Filenames for generated records.

use rand::Rng;

use crate::constants::{FILENAME_SUFFIX_LEN, FILENAME_TITLE_MAX, FILE_EXTENSION};
use crate::generator::random_text;
use crate::record::Record;

/// Filename for a record: sanitized title plus a random suffix.
///
/// The suffix keeps names practically unique within a run; there is no
/// collision check against the directory.
pub fn filename_for<R: Rng + ?Sized>(record: &Record, rng: &mut R) -> String {
    let suffix = random_text(rng, FILENAME_SUFFIX_LEN);
    format!("{}_{}.{}", sanitize_title(&record.title), suffix, FILE_EXTENSION)
}

/// Keep letters, digits, spaces, hyphens and underscores; at most
/// `FILENAME_TITLE_MAX` characters.
fn sanitize_title(title: &str) -> String {
    let safe: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe: String = safe.trim().chars().take(FILENAME_TITLE_MAX).collect();

    if safe.is_empty() {
        "untitled".to_string()
    } else {
        safe
    }
}
