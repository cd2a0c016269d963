//! Mock host implementations for testing.
//!
//! This module provides `MockFs`, `MockRunner`, `MockEnv` and pre-built
//! scenarios for testing probes without real `/proc`, real commands or the
//! real process environment.

mod env;
mod filesystem;
mod runner;
mod scenarios;

pub use env::MockEnv;
pub use filesystem::MockFs;
pub use runner::MockRunner;
pub use scenarios::{TYPICAL_CPUINFO, TYPICAL_FREE, TYPICAL_OS_RELEASE};
