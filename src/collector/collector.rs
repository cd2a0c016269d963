//! Main collector that runs every probe into a `Snapshot`.

use std::time::{Duration, Instant};

use tracing::{Dispatch, debug, warn};

use crate::collector::command::CommandRunner;
use crate::collector::packages::PackageRegistry;
use crate::collector::probes::{ProbeConfig, ProbeError, Probes};
use crate::collector::traits::{Environment, FileSystem};
use crate::model::{INVALID, KernelInfo, MemoryUsage, Snapshot};

/// Timing information for each probe.
///
/// Used for debugging and performance monitoring.
#[derive(Debug, Clone, Default)]
pub struct CollectorTiming {
    /// Total snapshot collection time.
    pub total: Duration,
    pub hostname: Duration,
    pub username: Duration,
    /// Time to run `uname`.
    pub kernel: Duration,
    /// Time to read os-release.
    pub os: Duration,
    pub uptime: Duration,
    /// Time to detect package managers and run every counter.
    pub packages: Duration,
    /// Time to run `$SHELL --version`.
    pub shell: Duration,
    pub terminal: Duration,
    pub cpu: Duration,
    /// Time to run `free`.
    pub memory: Duration,
}

/// Runs a probe and records how long it took.
fn timed<T>(slot: &mut Duration, probe: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let value = probe();
    *slot = start.elapsed();
    value
}

/// Converts a probe failure into its sentinel and a warning.
fn or_sentinel<T>(probe: &'static str, result: Result<T, ProbeError>, sentinel: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|e| {
        warn!(probe, error = %e, "probe failed");
        sentinel()
    })
}

/// Main collector that gathers all host facts.
///
/// Probes run one after another on the calling thread. A failing probe never
/// stops the pass: its field gets the documented sentinel and a warning is
/// logged.
pub struct Collector<F: FileSystem, R: CommandRunner, E: Environment> {
    probes: Probes<F, R, E>,
    packages: PackageRegistry,
    dispatch: Option<Dispatch>,
    /// Timing information from the last collect_snapshot call.
    last_timing: Option<CollectorTiming>,
}

impl<F: FileSystem, R: CommandRunner, E: Environment> Collector<F, R, E> {
    /// Creates a new collector with the default package managers.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `runner` - Command runner (real or mock)
    /// * `env` - Environment implementation (real or mock)
    /// * `config` - Paths the probes read from
    pub fn new(fs: F, runner: R, env: E, config: ProbeConfig) -> Self {
        Self {
            probes: Probes::new(fs, runner, env, config),
            packages: PackageRegistry::default(),
            dispatch: None,
            last_timing: None,
        }
    }

    /// Replaces the package counter registry.
    pub fn with_packages(mut self, packages: PackageRegistry) -> Self {
        self.packages = packages;
        self
    }

    /// Sends this collector's log events to `dispatch` instead of the
    /// global subscriber.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn probes(&self) -> &Probes<F, R, E> {
        &self.probes
    }

    /// Returns timing information from the last collect_snapshot call.
    pub fn last_timing(&self) -> Option<&CollectorTiming> {
        self.last_timing.as_ref()
    }

    /// Collects a complete snapshot.
    ///
    /// Always succeeds; `Snapshot::fetch_duration` holds the time the pass took.
    pub fn collect_snapshot(&mut self) -> Snapshot {
        match self.dispatch.clone() {
            Some(dispatch) => {
                tracing::dispatcher::with_default(&dispatch, || self.collect_all())
            }
            None => self.collect_all(),
        }
    }

    fn collect_all(&mut self) -> Snapshot {
        let total_start = Instant::now();
        let mut timing = CollectorTiming::default();
        let probes = &self.probes;

        let hostname = timed(&mut timing.hostname, || probes.hostname());
        let username = timed(&mut timing.username, || probes.username());

        let kernel = timed(&mut timing.kernel, || {
            or_sentinel("kernel", probes.kernel(), KernelInfo::invalid)
        });

        let os_name = timed(&mut timing.os, || {
            or_sentinel("os", probes.os_name(), || INVALID.to_string())
        });

        let uptime = timed(&mut timing.uptime, || {
            or_sentinel("uptime", probes.uptime(), || Duration::ZERO)
        });

        let packages = timed(&mut timing.packages, || {
            self.packages.summarize(probes.runner())
        });

        let shell = timed(&mut timing.shell, || {
            or_sentinel("shell", probes.shell(), || INVALID.to_string())
        });

        let terminal = timed(&mut timing.terminal, || probes.terminal());

        let cpu = timed(&mut timing.cpu, || {
            or_sentinel("cpu", probes.cpu(), || format!("{} @ 0.000GHz", INVALID))
        });

        let memory = timed(&mut timing.memory, || {
            or_sentinel("memory", probes.memory(), MemoryUsage::default)
        });

        let fetch_duration = total_start.elapsed();
        timing.total = fetch_duration;
        debug!(?fetch_duration, "snapshot collected");
        self.last_timing = Some(timing);

        Snapshot {
            hostname,
            username,
            os_name,
            kernel,
            uptime,
            packages,
            shell,
            theme: probes.theme(),
            icons: probes.icons(),
            terminal,
            cpu,
            gpu: probes.gpu(),
            memory,
            fetch_duration,
        }
    }
}
