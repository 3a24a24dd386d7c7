// Adapters layer: concrete implementations of the ConfigSource port.

pub mod local_fs;
pub mod memory_fs;

pub use local_fs::LocalFs;
pub use memory_fs::MemoryFs;
