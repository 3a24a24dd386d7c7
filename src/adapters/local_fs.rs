use crate::domain::ports::ConfigSource;
use std::fs;
use std::path::{Path, PathBuf};

/// The real filesystem, optionally re-rooted under a sysroot.
///
/// Paths handed in and returned are always logical (as seen from `/` on the
/// target system); only the probes themselves are redirected.
#[derive(Debug, Clone, Default)]
pub struct LocalFs {
    sysroot: Option<PathBuf>,
}

impl LocalFs {
    pub fn new() -> Self {
        Self { sysroot: None }
    }

    pub fn with_sysroot(sysroot: impl Into<PathBuf>) -> Self {
        Self {
            sysroot: Some(sysroot.into()),
        }
    }

    fn physical(&self, path: &Path) -> PathBuf {
        match &self.sysroot {
            Some(root) => root.join(path.strip_prefix("/").unwrap_or(path)),
            None => path.to_path_buf(),
        }
    }
}

impl ConfigSource for LocalFs {
    fn read_lines(&self, path: &Path) -> Option<Vec<String>> {
        let full_path = self.physical(path);
        match fs::read(&full_path) {
            // decoded per line so one stray Latin-1 byte only spoils its own line
            Ok(bytes) => Some(
                bytes
                    .split(|&b| b == b'\n')
                    .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
                    .filter(|line| !line.is_empty())
                    .map(|line| String::from_utf8_lossy(line).into_owned())
                    .collect(),
            ),
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", full_path.display(), e);
                None
            }
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.physical(path).is_dir()
    }

    fn list_dirs(&self, path: &Path) -> Vec<PathBuf> {
        let full_path = self.physical(path);
        let entries = match fs::read_dir(&full_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot list {}: {}", full_path.display(), e);
                return Vec::new();
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
            // follows symlinks, like a shell glob does
            .filter(|entry| entry.path().is_dir())
            .map(|entry| path.join(entry.file_name()))
            .collect();
        dirs.sort();
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sysroot_redirects_probes() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("etc")).unwrap();
        fs::write(temp_dir.path().join("etc/app.cfg"), "a=1\n\nb=2\n").unwrap();

        let local = LocalFs::with_sysroot(temp_dir.path());
        assert!(local.is_dir(Path::new("/etc")));
        assert_eq!(
            local.read_lines(Path::new("/etc/app.cfg")),
            Some(vec!["a=1".to_string(), "b=2".to_string()])
        );
    }

    #[test]
    fn test_crlf_lines_are_stripped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".rtorrent.rc"),
            "network.scgi.open_local = rpc.sock\r\n\r\nthrottle.max_uploads.set = 8\r\n",
        )
        .unwrap();

        let local = LocalFs::with_sysroot(temp_dir.path());
        assert_eq!(
            local.read_lines(Path::new("/.rtorrent.rc")),
            Some(vec![
                "network.scgi.open_local = rpc.sock".to_string(),
                "throttle.max_uploads.set = 8".to_string(),
            ])
        );
    }

    #[test]
    fn test_latin1_line_does_not_hide_the_rest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("mod.cfg"),
            b"export MOD_HOSTNAME='K\xfcche'\nexport MOD_STOR_PREFIX='xStor'\n",
        )
        .unwrap();

        let local = LocalFs::with_sysroot(temp_dir.path());
        let lines = local.read_lines(Path::new("/mod.cfg")).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "export MOD_HOSTNAME='K\u{fffd}che'");
        assert_eq!(lines[1], "export MOD_STOR_PREFIX='xStor'");
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let local = LocalFs::with_sysroot(temp_dir.path());
        assert_eq!(local.read_lines(Path::new("/nope.cfg")), None);
    }

    #[test]
    fn test_list_dirs_sorted_logical_and_skips_files_and_hidden() {
        let temp_dir = TempDir::new().unwrap();
        let mount = temp_dir.path().join("media");
        fs::create_dir_all(mount.join("zeta")).unwrap();
        fs::create_dir_all(mount.join("alpha")).unwrap();
        fs::create_dir_all(mount.join(".hidden")).unwrap();
        fs::write(mount.join("file.txt"), "x").unwrap();

        let local = LocalFs::with_sysroot(temp_dir.path());
        assert_eq!(
            local.list_dirs(Path::new("/media")),
            vec![PathBuf::from("/media/alpha"), PathBuf::from("/media/zeta")]
        );
        assert!(local.list_dirs(Path::new("/absent")).is_empty());
    }

    #[test]
    fn test_without_sysroot_uses_paths_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("one")).unwrap();

        let local = LocalFs::new();
        assert_eq!(
            local.list_dirs(temp_dir.path()),
            vec![temp_dir.path().join("one")]
        );
    }
}
