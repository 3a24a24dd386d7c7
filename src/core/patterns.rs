//! Line matchers for the shell-style `export` files and `.rtorrent.rc`.
//!
//! Everything here works on single lines already read into memory, so the
//! patterns can be tested without touching the filesystem.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static STOR_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^export MOD_STOR_PREFIX='([^']+)'").expect("MOD_STOR_PREFIX pattern")
});

static BASEDIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^export RTORRENT_BASEDIR='([^']+)'").expect("RTORRENT_BASEDIR pattern")
});

static OPEN_PORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*network\.scgi\.open_port\s*=\s*(.+)").expect("open_port pattern")
});

static OPEN_LOCAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*network\.scgi\.open_local\s*=\s*(.+)").expect("open_local pattern")
});

static HOST_PORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):([0-9]+)$").expect("host:port pattern"));

/// An SCGI directive found in `.rtorrent.rc`, value still raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScgiDirective<'a> {
    OpenPort(&'a str),
    OpenLocal(&'a str),
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty())
}

/// `export MOD_STOR_PREFIX='uStor'` -> `uStor`
pub fn match_stor_prefix(line: &str) -> Option<&str> {
    capture(&STOR_PREFIX_RE, line)
}

/// `export RTORRENT_BASEDIR='/path'` -> `/path`
pub fn match_base_dir(line: &str) -> Option<&str> {
    capture(&BASEDIR_RE, line)
}

pub fn match_scgi_directive(line: &str) -> Option<ScgiDirective<'_>> {
    if let Some(value) = capture(&OPEN_PORT_RE, line) {
        return Some(ScgiDirective::OpenPort(value));
    }
    capture(&OPEN_LOCAL_RE, line).map(ScgiDirective::OpenLocal)
}

/// Parses `host:port`. Port `0` and out-of-range ports are rejected.
pub fn parse_host_port(value: &str) -> Option<(String, u16)> {
    let caps = HOST_PORT_RE.captures(value.trim())?;
    let host = caps.get(1)?.as_str();
    let port: u16 = caps.get(2)?.as_str().parse().ok()?;
    if port == 0 {
        return None;
    }
    Some((host.to_string(), port))
}

/// Relative socket paths live under `tmp_dir`.
///
/// A blank value yields `None` so the caller keeps scanning; it is not turned
/// into the bare `tmp_dir` itself.
pub fn absolutize_socket(value: &str, tmp_dir: &Path) -> Option<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if value.starts_with('/') {
        Some(PathBuf::from(value))
    } else {
        Some(tmp_dir.join(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stor_prefix() {
        assert_eq!(match_stor_prefix("export MOD_STOR_PREFIX='xStor'"), Some("xStor"));
        assert_eq!(
            match_stor_prefix("export MOD_STOR_PREFIX='uStor' # trailing"),
            Some("uStor")
        );
        assert_eq!(match_stor_prefix("export MOD_STOR_PREFIX=''"), None);
        assert_eq!(match_stor_prefix("  export MOD_STOR_PREFIX='x'"), None);
        assert_eq!(match_stor_prefix("export MOD_STOR_PREFIX=\"x\""), None);
    }

    #[test]
    fn test_base_dir() {
        assert_eq!(
            match_base_dir("export RTORRENT_BASEDIR='/var/media/ftp/disk/rtorrent'"),
            Some("/var/media/ftp/disk/rtorrent")
        );
        assert_eq!(match_base_dir("export RTORRENT_BASEDIR=''"), None);
        assert_eq!(match_base_dir("export RTORRENT_ENABLED='yes'"), None);
    }

    #[test]
    fn test_scgi_directives() {
        assert_eq!(
            match_scgi_directive("network.scgi.open_port = 127.0.0.1:5000"),
            Some(ScgiDirective::OpenPort("127.0.0.1:5000"))
        );
        assert_eq!(
            match_scgi_directive("  network.scgi.open_local=my.sock"),
            Some(ScgiDirective::OpenLocal("my.sock"))
        );
        assert_eq!(match_scgi_directive("# network.scgi.open_port = :5000"), None);
        assert_eq!(match_scgi_directive("network.scgi.open_port ="), None);
        assert_eq!(match_scgi_directive("directory.default.set = /tmp"), None);
    }

    #[test]
    fn test_parse_host_port() {
        assert_eq!(
            parse_host_port("127.0.0.1:5000 "),
            Some(("127.0.0.1".to_string(), 5000))
        );
        assert_eq!(parse_host_port("localhost:abc"), None);
        assert_eq!(parse_host_port("5000"), None);
        assert_eq!(parse_host_port(":5000"), None);
        assert_eq!(parse_host_port("host:0"), None);
        assert_eq!(parse_host_port("host:70000"), None);
    }

    #[test]
    fn test_absolutize_socket() {
        let tmp = Path::new("/tmp");
        assert_eq!(absolutize_socket("my.sock", tmp), Some(PathBuf::from("/tmp/my.sock")));
        assert_eq!(
            absolutize_socket(" /run/rt.sock ", tmp),
            Some(PathBuf::from("/run/rt.sock"))
        );
        assert_eq!(absolutize_socket("   ", tmp), None);
    }
}
