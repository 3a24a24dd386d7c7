use crate::domain::ports::ConfigSource;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// In-memory filesystem for injecting configuration contents.
///
/// Adding a file or directory implicitly creates all of its ancestors.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path, content.into());
        self
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    fn add_dir(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl ConfigSource for MemoryFs {
    fn read_lines(&self, path: &Path) -> Option<Vec<String>> {
        self.files.get(path).map(|content| {
            content
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn list_dirs(&self, path: &Path) -> Vec<PathBuf> {
        self.dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter(|dir| {
                dir.file_name()
                    .map(|name| !name.to_string_lossy().starts_with('.'))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}
