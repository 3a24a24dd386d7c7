use crate::utils::error::Result;
use crate::utils::validation::{validate_absolute_path, validate_name, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Well-known locations on a Freetz-NG system. Any field may be overridden
/// from TOML; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Freetz `mod.cfg`, source of `MOD_STOR_PREFIX`.
    pub mod_cfg: PathBuf,
    /// Files that may set `RTORRENT_BASEDIR`, in priority order.
    pub basedir_configs: Vec<PathBuf>,
    pub mount_root: PathBuf,
    pub default_prefix: String,
    pub fallback_storage: PathBuf,
    pub storage_subdir: String,
    pub rc_file_name: String,
    pub socket_tmp_dir: PathBuf,
    pub default_socket: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mod_cfg: PathBuf::from("/mod/etc/conf/mod.cfg"),
            basedir_configs: vec![
                PathBuf::from("/var/flash/rtorrent.cfg"),
                PathBuf::from("/etc/default.rtorrent/rtorrent.cfg"),
            ],
            mount_root: PathBuf::from("/var/media/ftp"),
            default_prefix: "uStor".to_string(),
            fallback_storage: PathBuf::from("/var/tmp/rtorrent"),
            storage_subdir: "rtorrent".to_string(),
            rc_file_name: ".rtorrent.rc".to_string(),
            socket_tmp_dir: PathBuf::from("/tmp"),
            default_socket: PathBuf::from("/tmp/rpc.socket"),
        }
    }
}

impl ResolverConfig {
    /// Loads overrides from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Directory a `{prefix}01` volume is mounted at. Always under
    /// `mount_root`, even for a prefix with a leading `/`.
    pub fn prefix_mount(&self, prefix: &str) -> PathBuf {
        self.mount_root
            .join(format!("{}01", prefix.trim_start_matches('/')))
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_absolute_path("mod_cfg", &self.mod_cfg)?;
        for (i, path) in self.basedir_configs.iter().enumerate() {
            validate_absolute_path(&format!("basedir_configs[{}]", i), path)?;
        }
        validate_absolute_path("mount_root", &self.mount_root)?;
        validate_name("default_prefix", &self.default_prefix)?;
        validate_absolute_path("fallback_storage", &self.fallback_storage)?;
        validate_name("storage_subdir", &self.storage_subdir)?;
        validate_name("rc_file_name", &self.rc_file_name)?;
        validate_absolute_path("socket_tmp_dir", &self.socket_tmp_dir)?;
        validate_absolute_path("default_socket", &self.default_socket)?;
        Ok(())
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
