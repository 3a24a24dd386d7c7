// Domain layer: resolved values and the filesystem port. No I/O here.

pub mod model;
pub mod ports;
