//! In-memory mock filesystem for testing probes without real `/proc`.

use crate::collector::traits::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Holds raw file bytes so tests can stage `/proc` and os-release contents,
/// including ones that are not valid UTF-8.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Removes a file, simulating a missing pseudo-file.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }
}

impl FileSystem for MockFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_read() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/uptime", "12345.67 6789.01\n");
        assert_eq!(fs.read(Path::new("/proc/uptime")).unwrap(), b"12345.67 6789.01\n");

        fs.add_file("/proc/uptime", "1.0 1.0\n");
        assert_eq!(fs.read(Path::new("/proc/uptime")).unwrap(), b"1.0 1.0\n");
    }

    #[test]
    fn test_remove_file() {
        let mut fs = MockFs::typical_system();
        fs.remove_file("/proc/cpuinfo");
        let err = fs.read(Path::new("/proc/cpuinfo")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(fs.read(Path::new("/proc/uptime")).is_ok());
    }
}
