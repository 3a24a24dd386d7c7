use crate::config::ResolverConfig;
use crate::core::patterns::{
    absolutize_socket, match_base_dir, match_scgi_directive, match_stor_prefix, parse_host_port,
    ScgiDirective,
};
use crate::domain::model::{Resolution, SocketAddress, StorageLocation, StorageOrigin};
use crate::domain::ports::ConfigSource;
use std::path::Path;

/// Works out where rTorrent keeps its files and how to reach its SCGI socket.
///
/// Every step falls back to a default, so none of the methods can fail.
/// The resolver keeps no state between calls.
pub struct Resolver<S: ConfigSource> {
    source: S,
    config: ResolverConfig,
}

impl<S: ConfigSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ResolverConfig::default())
    }

    pub fn with_config(source: S, config: ResolverConfig) -> Self {
        Self { source, config }
    }

    pub fn resolve(&self) -> Resolution {
        let base_dir = self.resolve_base_dir();
        let socket = self.resolve_socket(base_dir.path());

        tracing::info!(
            "Resolved base_dir={} ({:?}) socket={}",
            base_dir,
            base_dir.origin,
            socket
        );

        Resolution { base_dir, socket }
    }

    /// Storage prefix from `MOD_STOR_PREFIX` in `mod.cfg`.
    pub fn resolve_prefix(&self) -> String {
        let mod_cfg = &self.config.mod_cfg;

        let found = self.source.read_lines(mod_cfg).and_then(|lines| {
            lines
                .iter()
                .find_map(|line| match_stor_prefix(line).map(str::to_string))
        });

        match found {
            Some(prefix) => {
                tracing::debug!("MOD_STOR_PREFIX='{}' from {}", prefix, mod_cfg.display());
                prefix
            }
            None => {
                tracing::debug!(
                    "No MOD_STOR_PREFIX in {}, using '{}'",
                    mod_cfg.display(),
                    self.config.default_prefix
                );
                self.config.default_prefix.clone()
            }
        }
    }

    /// Picks a storage directory under the mount root for `prefix`.
    pub fn resolve_storage(&self, prefix: &str) -> StorageLocation {
        let subdir = &self.config.storage_subdir;

        let preferred = self.config.prefix_mount(prefix);
        if self.source.is_dir(&preferred) {
            tracing::debug!("Using preferred mount {}", preferred.display());
            return StorageLocation::new(preferred.join(subdir), StorageOrigin::PrefixMount);
        }

        // sorted by name, so the pick is deterministic
        if let Some(first) = self.source.list_dirs(&self.config.mount_root).into_iter().next() {
            tracing::debug!(
                "{} not mounted, using first mount {}",
                preferred.display(),
                first.display()
            );
            return StorageLocation::new(first.join(subdir), StorageOrigin::FirstMount);
        }

        tracing::debug!(
            "Nothing mounted under {}, falling back to {}",
            self.config.mount_root.display(),
            self.config.fallback_storage.display()
        );
        StorageLocation::new(self.config.fallback_storage.clone(), StorageOrigin::Fallback)
    }

    /// `RTORRENT_BASEDIR` from the first config file that sets it, otherwise
    /// an auto-detected storage directory.
    pub fn resolve_base_dir(&self) -> StorageLocation {
        for candidate in &self.config.basedir_configs {
            let Some(lines) = self.source.read_lines(candidate) else {
                continue;
            };

            if let Some(base_dir) = lines.iter().find_map(|line| match_base_dir(line)) {
                tracing::debug!("RTORRENT_BASEDIR='{}' from {}", base_dir, candidate.display());
                return StorageLocation::new(
                    base_dir,
                    StorageOrigin::Configured {
                        source: candidate.clone(),
                    },
                );
            }

            tracing::debug!("{} does not set RTORRENT_BASEDIR", candidate.display());
        }

        self.resolve_storage(&self.resolve_prefix())
    }

    /// SCGI address declared in `{base_dir}/.rtorrent.rc`.
    pub fn resolve_socket(&self, base_dir: &Path) -> SocketAddress {
        let rc_file = base_dir.join(&self.config.rc_file_name);

        if let Some(lines) = self.source.read_lines(&rc_file) {
            if let Some(address) = lines.iter().find_map(|line| self.socket_from_line(line)) {
                tracing::debug!("SCGI address {} from {}", address, rc_file.display());
                return address;
            }
            tracing::debug!("No usable SCGI directive in {}", rc_file.display());
        } else {
            tracing::debug!("{} not readable", rc_file.display());
        }

        SocketAddress::unix(self.config.default_socket.clone())
    }

    fn socket_from_line(&self, line: &str) -> Option<SocketAddress> {
        match match_scgi_directive(line)? {
            ScgiDirective::OpenPort(value) => match parse_host_port(value) {
                Some((host, port)) => Some(SocketAddress::tcp(host, port)),
                None => {
                    tracing::debug!("Ignoring malformed open_port value '{}'", value.trim());
                    None
                }
            },
            ScgiDirective::OpenLocal(value) => {
                absolutize_socket(value, &self.config.socket_tmp_dir).map(SocketAddress::unix)
            }
        }
    }
}
