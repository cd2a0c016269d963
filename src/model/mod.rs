//! Data model shared between the collector and the front ends.

mod snapshot;

pub use snapshot::{INVALID, KernelInfo, MemoryUsage, NOT_IMPLEMENTED, Snapshot};
