//! Finding the files to lint.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Resolve explicit file arguments against `base_dir`, keeping argument order
pub fn resolve_files(base_dir: &Path, files: &[PathBuf]) -> Vec<PathBuf> {
    files.iter().map(|file| base_dir.join(file)).collect()
}

/// Find every file under `base_dir` matching an include pattern and no
/// exclude pattern.
///
/// Paths are returned relative to `base_dir`, sorted, without duplicates.
#[tracing::instrument(fields(base = %base_dir.display()))]
pub fn discover_files(base_dir: &Path, include: &[&str], exclude: &[&str]) -> Result<Vec<PathBuf>> {
    let exclude = exclude
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern)
                .with_context(|| format!("Invalid exclude pattern: {pattern}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut files = BTreeSet::new();
    for pattern in include {
        let full_pattern = base_dir.join(pattern).display().to_string();

        for entry in glob::glob(&full_pattern)
            .with_context(|| format!("Invalid glob pattern: {full_pattern}"))?
        {
            let path = entry.context("Glob error")?;
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(base_dir).unwrap_or(&path).to_path_buf();
            if exclude.iter().any(|pattern| pattern.matches_path(&relative)) {
                tracing::trace!(path = %relative.display(), "Excluded");
                continue;
            }
            files.insert(relative);
        }
    }

    tracing::debug!(files = files.len(), "Discovered files");
    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sass_order_test_utils::TestProjectBuilder;

    #[test]
    fn test_discovers_sass_files_recursively() {
        let project = TestProjectBuilder::new()
            .with_file("b.sass", "")
            .with_file("styles/a.sass", "")
            .with_file("styles/deep/c.sass", "")
            .with_file("styles/d.scss", "")
            .build();

        let files = discover_files(project.path(), &["**/*.sass"], &[]).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("b.sass"),
                PathBuf::from("styles/a.sass"),
                PathBuf::from("styles/deep/c.sass"),
            ]
        );
    }

    #[test]
    fn test_excludes_node_modules() {
        let project = TestProjectBuilder::new()
            .with_file("a.sass", "")
            .with_file("node_modules/pkg/b.sass", "")
            .build();

        let files =
            discover_files(project.path(), &["**/*.sass"], &["node_modules/**/*"]).unwrap();
        assert_eq!(files, vec![PathBuf::from("a.sass")]);
    }

    #[test]
    fn test_directories_are_skipped() {
        let project = TestProjectBuilder::new()
            .with_file("dir.sass/inner.txt", "")
            .build();

        let files = discover_files(project.path(), &["**/*.sass"], &[]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_overlapping_patterns_do_not_duplicate() {
        let project = TestProjectBuilder::new().with_file("a.sass", "").build();

        let files = discover_files(project.path(), &["**/*.sass", "*.sass"], &[]).unwrap();
        assert_eq!(files, vec![PathBuf::from("a.sass")]);
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let project = TestProjectBuilder::new().build();
        assert!(discover_files(project.path(), &["**/*.sass"], &["[*"]).is_err());
    }

    #[test]
    fn test_resolve_files_keeps_order() {
        let base = Path::new("/work");
        let files = resolve_files(
            base,
            &[PathBuf::from("z.sass"), PathBuf::from("/abs/a.sass")],
        );
        assert_eq!(
            files,
            vec![PathBuf::from("/work/z.sass"), PathBuf::from("/abs/a.sass")]
        );
    }
}
