pub mod patterns;
pub mod resolver;

pub use crate::domain::model::{Resolution, SocketAddress, StorageLocation, StorageOrigin};
pub use crate::domain::ports::ConfigSource;
pub use crate::utils::error::Result;
