//! Installed-package counters.
//!
//! One `PackageCounter` per package manager, kept in a `PackageRegistry`.
//! A counter takes part in a pass only when its detection program is on the
//! search path. New managers are added with `PackageRegistry::register`.

use tracing::{debug, warn};

use crate::collector::command::{CommandError, CommandRunner};
use crate::collector::parser::count_lines;

/// Counts the packages installed by one package manager.
pub trait PackageCounter: Send + Sync {
    /// Label shown next to the count, e.g. `"dpkg"`.
    fn name(&self) -> &str;

    /// Program whose presence on the search path enables this counter.
    fn detect_program(&self) -> &str {
        self.program()
    }

    /// Program that lists installed packages.
    fn program(&self) -> &str;

    /// Arguments for the listing program.
    fn args(&self) -> &[&str];

    /// Number of packages in the listing output.
    fn count(&self, output: &[u8]) -> usize;
}

/// Debian packages via `dpkg-query`, one line per package.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dpkg;

impl PackageCounter for Dpkg {
    fn name(&self) -> &str {
        "dpkg"
    }

    fn detect_program(&self) -> &str {
        "dpkg"
    }

    fn program(&self) -> &str {
        "dpkg-query"
    }

    fn args(&self) -> &[&str] {
        &["-f", "${binary:Package}\\n", "-W"]
    }

    fn count(&self, output: &[u8]) -> usize {
        count_lines(output)
    }
}

/// Snap packages via `snap list`, which prints a header line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Snap;

impl PackageCounter for Snap {
    fn name(&self) -> &str {
        "snap"
    }

    fn program(&self) -> &str {
        "snap"
    }

    fn args(&self) -> &[&str] {
        &["list"]
    }

    fn count(&self, output: &[u8]) -> usize {
        count_lines(output).saturating_sub(1)
    }
}

/// RPM packages via `rpm -qa`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rpm;

impl PackageCounter for Rpm {
    fn name(&self) -> &str {
        "rpm"
    }

    fn program(&self) -> &str {
        "rpm"
    }

    fn args(&self) -> &[&str] {
        &["-qa"]
    }

    fn count(&self, output: &[u8]) -> usize {
        count_lines(output)
    }
}

/// Arch packages via `pacman -Qq`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pacman;

impl PackageCounter for Pacman {
    fn name(&self) -> &str {
        "pacman"
    }

    fn program(&self) -> &str {
        "pacman"
    }

    fn args(&self) -> &[&str] {
        &["-Qq"]
    }

    fn count(&self, output: &[u8]) -> usize {
        count_lines(output)
    }
}

/// Flatpak applications. The column header is printed only on some versions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flatpak;

impl PackageCounter for Flatpak {
    fn name(&self) -> &str {
        "flatpak"
    }

    fn program(&self) -> &str {
        "flatpak"
    }

    fn args(&self) -> &[&str] {
        &["list", "--app", "--columns=application"]
    }

    fn count(&self, output: &[u8]) -> usize {
        String::from_utf8_lossy(output)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.eq_ignore_ascii_case("application"))
            .count()
    }
}

/// Ordered set of package counters.
pub struct PackageRegistry {
    counters: Vec<Box<dyn PackageCounter>>,
}

impl Default for PackageRegistry {
    /// dpkg, snap, rpm, pacman, flatpak - in that order.
    fn default() -> Self {
        Self::empty()
            .with(Dpkg)
            .with(Snap)
            .with(Rpm)
            .with(Pacman)
            .with(Flatpak)
    }
}

impl PackageRegistry {
    /// Creates a registry with no counters.
    pub fn empty() -> Self {
        Self {
            counters: Vec::new(),
        }
    }

    /// Appends a counter.
    pub fn register(&mut self, counter: Box<dyn PackageCounter>) {
        self.counters.push(counter);
    }

    /// Appends a counter, builder style.
    pub fn with(mut self, counter: impl PackageCounter + 'static) -> Self {
        self.register(Box::new(counter));
        self
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Counters whose detection program is on the search path, in registry order.
    pub fn detect(&self, runner: &impl CommandRunner) -> Vec<&dyn PackageCounter> {
        self.counters
            .iter()
            .map(|c| c.as_ref())
            .filter(|c| runner.lookup(c.detect_program()).is_some())
            .collect()
    }

    /// Runs every detected counter and joins the results, e.g.
    /// `"120 (dpkg), 8 (snap)"`.
    ///
    /// A counter that fails is logged and left out.
    pub fn summarize(&self, runner: &impl CommandRunner) -> String {
        let detected = self.detect(runner);
        debug!(
            managers = ?detected.iter().map(|c| c.name()).collect::<Vec<_>>(),
            "package managers detected"
        );

        let mut parts = Vec::with_capacity(detected.len());
        for counter in detected {
            match count_with(counter, runner) {
                Ok(count) => parts.push(format!("{} ({})", count, counter.name())),
                Err(e) => warn!(probe = "packages", manager = counter.name(), error = %e, "package count failed"),
            }
        }
        parts.join(", ")
    }
}

fn count_with(
    counter: &dyn PackageCounter,
    runner: &impl CommandRunner,
) -> Result<usize, CommandError> {
    let output = runner.run(counter.program(), counter.args())?;
    Ok(counter.count(&output))
}
