//! Abstractions over the ambient host state probes read from.
//!
//! The `FileSystem` trait covers `/proc` and distribution metadata files, the
//! `Environment` trait covers environment variables and the OS identity call.
//! Both have real implementations here and in-memory ones in `mock`.

use std::io;
use std::path::Path;

/// Abstraction for filesystem operations.
pub trait FileSystem: Send + Sync {
    /// Reads the raw bytes of a file.
    ///
    /// Only open and read failures are errors; decoding is left to the caller.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Abstraction for process environment and OS identity.
pub trait Environment: Send + Sync {
    /// Returns the value of an environment variable.
    ///
    /// Unset and empty variables are both reported as `None`.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the host name reported by the operating system.
    fn hostname(&self) -> io::Result<String>;
}

/// Environment backed by the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl SystemEnv {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }

    fn hostname(&self) -> io::Result<String> {
        Ok(hostname::get()?.to_string_lossy().into_owned())
    }
}
