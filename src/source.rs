//! Caption source resolution and loading.
//!
//! The default source lives at a fixed relative location under a caller-supplied
//! base directory; a per-request `source_path` overrides it only when it points at
//! an existing regular file.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::debug;

use crate::error::{CapburnError, CapburnResult};

/// Location of the default caption source, relative to the handler's base directory.
pub const DEFAULT_SOURCE_RELATIVE: &str = "data/4.source.txt";

/// Resolve the caption source path for one request.
///
/// A provided path wins only if it is an existing regular file; otherwise the
/// default location under `base_dir` is used. Either way the result is absolute.
pub fn resolve_source_path(base_dir: &Path, provided: Option<&Path>) -> CapburnResult<PathBuf> {
    if let Some(path) = provided {
        if path.is_file() {
            debug!(path = %path.display(), "using provided captions source");
            return absolute(path);
        }
        debug!(
            path = %path.display(),
            "provided captions source is missing or not a file, using default"
        );
    }
    let default_path = base_dir.join(DEFAULT_SOURCE_RELATIVE);
    debug!(path = %default_path.display(), "using default captions source");
    absolute(&default_path)
}

fn absolute(path: &Path) -> CapburnResult<PathBuf> {
    Ok(std::path::absolute(path)
        .with_context(|| format!("failed to absolutize path '{}'", path.display()))?)
}

/// Read the caption source file into the ordered caption sequence.
///
/// Each line is trimmed and blank lines are dropped; file order is preserved.
/// Fails with [`CapburnError::NotFound`] when `path` is not an existing regular
/// file and with [`CapburnError::Empty`] when no non-blank lines remain.
pub fn read_caption_lines(path: &Path) -> CapburnResult<Vec<String>> {
    if !path.is_file() {
        return Err(CapburnError::NotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read captions file '{}'", path.display()))?;

    let captions: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if captions.is_empty() {
        return Err(CapburnError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), count = captions.len(), "loaded captions");
    Ok(captions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "capburn_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn blank_lines_are_dropped_and_order_preserved() {
        let tmp = temp_dir("source_blank_lines");
        std::fs::create_dir_all(&tmp).unwrap();
        let path = tmp.join("captions.txt");
        std::fs::write(&path, "a\n\n  \nb\n").unwrap();

        let captions = read_caption_lines(&path).unwrap();
        assert_eq!(captions, vec!["a".to_string(), "b".to_string()]);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn lines_are_trimmed() {
        let tmp = temp_dir("source_trim");
        std::fs::create_dir_all(&tmp).unwrap();
        let path = tmp.join("captions.txt");
        std::fs::write(&path, "  hello  \n\tworld\t\n").unwrap();

        let captions = read_caption_lines(&path).unwrap();
        assert_eq!(captions, vec!["hello".to_string(), "world".to_string()]);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn all_blank_file_is_empty_error() {
        let tmp = temp_dir("source_all_blank");
        std::fs::create_dir_all(&tmp).unwrap();
        let path = tmp.join("captions.txt");
        std::fs::write(&path, "\n   \n\t\n").unwrap();

        assert!(matches!(
            read_caption_lines(&path),
            Err(CapburnError::Empty(_))
        ));

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = temp_dir("source_missing");
        assert!(matches!(
            read_caption_lines(&tmp.join("nope.txt")),
            Err(CapburnError::NotFound(_))
        ));
    }

    #[test]
    fn directory_is_not_found() {
        let tmp = temp_dir("source_dir");
        std::fs::create_dir_all(&tmp).unwrap();
        assert!(matches!(
            read_caption_lines(&tmp),
            Err(CapburnError::NotFound(_))
        ));
        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn missing_provided_path_falls_back_to_default() {
        let tmp = temp_dir("source_fallback");
        std::fs::create_dir_all(tmp.join("data")).unwrap();
        let default_path = tmp.join(DEFAULT_SOURCE_RELATIVE);
        std::fs::write(&default_path, "x\n").unwrap();

        let resolved =
            resolve_source_path(&tmp, Some(Path::new("/definitely/not/there.txt"))).unwrap();
        assert_eq!(resolved, std::path::absolute(&default_path).unwrap());

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn existing_provided_path_wins() {
        let tmp = temp_dir("source_provided");
        std::fs::create_dir_all(&tmp).unwrap();
        let provided = tmp.join("mine.txt");
        std::fs::write(&provided, "x\n").unwrap();

        let resolved = resolve_source_path(Path::new("/elsewhere"), Some(&provided)).unwrap();
        assert_eq!(resolved, std::path::absolute(&provided).unwrap());

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn no_provided_path_resolves_to_default_location() {
        let resolved = resolve_source_path(Path::new("/base"), None).unwrap();
        assert_eq!(resolved, Path::new("/base").join(DEFAULT_SOURCE_RELATIVE));
    }
}
