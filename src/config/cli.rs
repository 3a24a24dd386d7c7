use crate::utils::render::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rutorrent-autoconf")]
#[command(about = "Resolve the rTorrent base directory and SCGI socket for ruTorrent")]
pub struct CliConfig {
    /// TOML file overriding the well-known paths
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory to treat as `/` for every probe
    #[arg(long)]
    pub sysroot: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
