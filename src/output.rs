//! Collision-avoided output naming.

use std::path::{Path, PathBuf};

/// Return `directory/filename`, or the first `base_N.ext` variant that does not
/// exist yet when the plain name is taken.
///
/// The existence check is racy across processes; uniqueness is only guaranteed
/// within a single process.
pub fn unique_output_path(directory: &Path, filename: &str) -> PathBuf {
    let candidate = directory.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (base, ext) = split_extension(filename);
    let mut counter: u64 = 1;
    loop {
        let name = match ext {
            Some(ext) => format!("{base}_{counter}.{ext}"),
            None => format!("{base}_{counter}"),
        };
        let candidate = directory.join(&name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn split_extension(filename: &str) -> (&str, Option<&str>) {
    match filename.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() && !ext.is_empty() => (base, Some(ext)),
        _ => (filename, None),
    }
}
