pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalFs, MemoryFs};
pub use config::ResolverConfig;
pub use core::resolver::Resolver;
pub use domain::model::{Resolution, SocketAddress, StorageLocation, StorageOrigin};
pub use domain::ports::ConfigSource;
pub use utils::error::{AutoconfError, Result};

/// Resolves against the live filesystem with the stock Freetz-NG paths.
pub fn resolve() -> Resolution {
    Resolver::new(LocalFs::new()).resolve()
}
