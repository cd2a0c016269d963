//! Snapshot structure produced by a single collection pass.

use std::time::Duration;

/// Placeholder for a fact that could not be determined.
pub const INVALID: &str = "Invalid";

/// Placeholder for a fact that has no detection logic yet.
pub const NOT_IMPLEMENTED: &str = "Not implemented";

/// Kernel identification triplet as reported by `uname -smr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelInfo {
    /// Kernel name (e.g. "Linux").
    pub name: String,
    /// Kernel release (e.g. "6.8.0-45-generic").
    pub version: String,
    /// Machine hardware name (e.g. "x86_64").
    pub machine: String,
}

impl KernelInfo {
    /// Triplet used when the kernel could not be identified.
    pub fn invalid() -> Self {
        Self {
            name: INVALID.to_string(),
            version: INVALID.to_string(),
            machine: INVALID.to_string(),
        }
    }
}

impl Default for KernelInfo {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Memory usage in KiB, as reported by `free`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryUsage {
    pub used_kib: u64,
    pub total_kib: u64,
}

/// One complete set of host facts.
///
/// Every field is always populated: a probe that fails leaves its sentinel
/// (`INVALID`, `NOT_IMPLEMENTED`, an empty string or zero) instead of
/// aborting the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub hostname: String,
    pub username: String,
    /// Human readable distribution label (`PRETTY_NAME`).
    pub os_name: String,
    pub kernel: KernelInfo,
    /// Time since boot, truncated to whole seconds.
    pub uptime: Duration,
    /// Joined package counts, e.g. `"120 (dpkg), 8 (snap)"`.
    pub packages: String,
    pub shell: String,
    pub theme: String,
    pub icons: String,
    pub terminal: String,
    /// CPU model and clock, e.g. `"Example CPU @ 2.500GHz"`.
    pub cpu: String,
    pub gpu: String,
    pub memory: MemoryUsage,
    /// Wall-clock time spent collecting this snapshot.
    pub fetch_duration: Duration,
}

impl Default for Snapshot {
    /// A snapshot where every field holds its sentinel.
    fn default() -> Self {
        Self {
            hostname: String::new(),
            username: String::new(),
            os_name: INVALID.to_string(),
            kernel: KernelInfo::invalid(),
            uptime: Duration::ZERO,
            packages: String::new(),
            shell: INVALID.to_string(),
            theme: NOT_IMPLEMENTED.to_string(),
            icons: NOT_IMPLEMENTED.to_string(),
            terminal: String::new(),
            cpu: format!("{} @ 0.000GHz", INVALID),
            gpu: NOT_IMPLEMENTED.to_string(),
            memory: MemoryUsage::default(),
            fetch_duration: Duration::ZERO,
        }
    }
}
