use std::io;
use std::path::{Path, PathBuf};

/// List the immediate entries of `dir` whose name ends with `suffix`.
///
/// The match is case-sensitive and against the full entry name, not just
/// the extension component. Results come back in directory-listing order,
/// which is OS-dependent — callers must not assume they are sorted.
///
/// Entries with non-UTF-8 names cannot suffix-match and are skipped.
/// A missing or unreadable directory fails the whole scan.
pub fn scan_dir(dir: &Path, suffix: &str) -> io::Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(suffix) {
                matches.push(dir.join(name));
            }
        }
    }
    Ok(matches)
}
