//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_literal_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("resume.txt");
        fs::write(&file_path, "text").unwrap();

        let files = resolve_patterns(&[file_path.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_resolve_glob_dedups_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        let pattern = temp_dir.path().join("*.txt").to_string_lossy().into_owned();
        let literal = a.to_string_lossy().into_owned();

        let files = resolve_patterns(&[pattern, literal]).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_no_matches_is_an_error() {
        let result = resolve_patterns(&["/nonexistent/dir/*.txt".to_string()]);
        assert!(result.is_err());
    }
}
