//! Host information collector.
//!
//! This module provides the probes that read individual host facts and the
//! `Collector` that combines them into a `Snapshot`, with support for mocking
//! every source of host state.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Collector                           │
//! │  ┌───────────────────────────┐   ┌────────────────────────┐  │
//! │  │          Probes           │   │    PackageRegistry     │  │
//! │  │  - /proc/uptime, cpuinfo  │   │  - dpkg, snap, rpm,    │  │
//! │  │  - /etc/os-release        │   │    pacman, flatpak     │  │
//! │  │  - uname, free, $SHELL    │   └───────────┬────────────┘  │
//! │  └──┬──────────┬──────────┬──┘               │               │
//! │     │          │          └──────────┐       │               │
//! │ ┌───▼──────┐ ┌─▼───────────┐   ┌─────▼───────▼─┐             │
//! │ │FileSystem│ │ Environment │   │ CommandRunner │  (traits)   │
//! │ └───┬──────┘ └─┬───────────┘   └─────┬─────────┘             │
//! └─────┼──────────┼─────────────────────┼───────────────────────┘
//!       │          │                     │
//!   RealFs      SystemEnv           SystemRunner      (production)
//!   MockFs      MockEnv             MockRunner        (testing)
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use hostfetch::collector::{Collector, ProbeConfig, RealFs, SystemEnv, SystemRunner};
//!
//! let mut collector = Collector::new(RealFs::new(), SystemRunner::new(), SystemEnv::new(), ProbeConfig::default());
//! let snapshot = collector.collect_snapshot();
//! ```
//!
//! ## Testing (with mocks)
//!
//! ```
//! use hostfetch::collector::mock::{MockEnv, MockFs, MockRunner};
//! use hostfetch::collector::{Collector, ProbeConfig};
//!
//! let mut collector = Collector::new(
//!     MockFs::typical_system(),
//!     MockRunner::typical_system(),
//!     MockEnv::typical_system(),
//!     ProbeConfig::default(),
//! );
//! let snapshot = collector.collect_snapshot();
//! assert_eq!(snapshot.os_name, "Ubuntu 24.04.1 LTS");
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod command;
pub mod kv;
pub mod mock;
pub mod packages;
pub mod parser;
pub mod probes;
pub mod traits;

pub use collector::{Collector, CollectorTiming};
pub use command::{CommandError, CommandRunner, SystemRunner};
pub use kv::{KvError, read_key_values};
pub use packages::{PackageCounter, PackageRegistry};
pub use probes::{ProbeConfig, ProbeError, Probes};
pub use traits::{Environment, FileSystem, RealFs, SystemEnv};
