use std::path::{Path, PathBuf};

/// Read-only view of the filesystem the resolver probes.
///
/// Every method is infallible: a path that cannot be read is reported the
/// same way as a path that does not exist.
pub trait ConfigSource {
    /// Lines of a text file with blank lines removed, or `None` if the file is
    /// absent or unreadable.
    fn read_lines(&self, path: &Path) -> Option<Vec<String>>;

    fn is_dir(&self, path: &Path) -> bool;

    /// Non-hidden directories directly under `path`, sorted by name.
    fn list_dirs(&self, path: &Path) -> Vec<PathBuf>;
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn read_lines(&self, path: &Path) -> Option<Vec<String>> {
        (**self).read_lines(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_dirs(&self, path: &Path) -> Vec<PathBuf> {
        (**self).list_dirs(path)
    }
}
