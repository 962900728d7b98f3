//! Temporary project directories for tests that touch the filesystem.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A populated temporary directory, removed on drop
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the project
    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// Builder for [`TestProject`]
///
/// ```ignore
/// let project = TestProjectBuilder::new()
///     .with_file("a.sass", ".a\n  color: red\n")
///     .with_file(".sassorderrc.yml", "jobs: 2\n")
///     .build();
/// ```
#[derive(Default)]
pub struct TestProjectBuilder {
    files: Vec<(String, String)>,
}

impl TestProjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; parent directories are created as needed
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Write all files into a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory or a file cannot be created.
    pub fn build(self) -> TestProject {
        let dir = tempfile::tempdir().expect("create temp dir");
        for (relative, content) in self.files {
            let path = dir.path().join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create parent dir");
            }
            std::fs::write(&path, content).expect("write project file");
        }
        TestProject { dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_writes_nested_files() {
        let project = TestProjectBuilder::new()
            .with_file("a.sass", ".a\n")
            .with_file("nested/dir/b.sass", ".b\n")
            .build();
        assert_eq!(std::fs::read_to_string(project.join("a.sass")).unwrap(), ".a\n");
        assert!(project.join("nested/dir/b.sass").is_file());
    }
}
