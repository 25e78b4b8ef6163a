//! Module search path registration

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Ensure `library_dir` appears in `search_path` exactly once, at the front.
///
/// Inserts at the front when absent, then removes later duplicates of every
/// entry while preserving first-occurrence order. Idempotent: running it
/// again leaves the list unchanged.
pub fn register_library_dir(search_path: &mut Vec<PathBuf>, library_dir: &Path) {
    if search_path.first().map(PathBuf::as_path) != Some(library_dir) {
        search_path.insert(0, library_dir.to_path_buf());
    }
    let mut seen = HashSet::new();
    search_path.retain(|entry| seen.insert(entry.clone()));
}
