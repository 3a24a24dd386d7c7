use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a resolved base directory came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageOrigin {
    /// `RTORRENT_BASEDIR` from one of the base-dir config files.
    Configured { source: PathBuf },
    /// `{mount_root}/{prefix}01` existed.
    PrefixMount,
    /// First directory under the mount root.
    FirstMount,
    /// Nothing mounted.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageLocation {
    pub path: PathBuf,
    pub origin: StorageOrigin,
}

impl StorageLocation {
    pub fn new(path: impl Into<PathBuf>, origin: StorageOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// SCGI endpoint of the rTorrent instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SocketAddress {
    Tcp { host: String, port: u16 },
    Unix { path: PathBuf },
}

impl SocketAddress {
    pub const UNIX_SCHEME: &'static str = "unix://";

    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        SocketAddress::Tcp {
            host: host.into(),
            port,
        }
    }

    pub fn unix(path: impl Into<PathBuf>) -> Self {
        SocketAddress::Unix { path: path.into() }
    }

    /// Host value as ruTorrent expects it: the bare host for TCP, or the
    /// socket path behind a `unix://` scheme.
    pub fn scgi_host(&self) -> String {
        match self {
            SocketAddress::Tcp { host, .. } => host.clone(),
            SocketAddress::Unix { path } => format!("{}{}", Self::UNIX_SCHEME, path.display()),
        }
    }

    /// Port value as ruTorrent expects it; `0` selects the UNIX socket.
    pub fn scgi_port(&self) -> u16 {
        match self {
            SocketAddress::Tcp { port, .. } => *port,
            SocketAddress::Unix { .. } => 0,
        }
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocketAddress::Tcp { host, port } => write!(f, "{}:{}", host, port),
            SocketAddress::Unix { .. } => write!(f, "{}", self.scgi_host()),
        }
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub base_dir: StorageLocation,
    pub socket: SocketAddress,
}
