//! Single-fact probes.
//!
//! Every probe reads one fact from the host: a `/proc` file, the os-release
//! file, an environment variable or the output of a command. Probes that can
//! fail return `Result<_, ProbeError>`; turning a failure into a sentinel is
//! left to the `Collector`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::collector::command::{CommandError, CommandRunner};
use crate::collector::kv::{KvError, read_key_values};
use crate::collector::parser::{
    ParseError, compose_terminal, first_line, format_cpu_summary, parse_free, parse_mhz_as_ghz,
    parse_uname, parse_uptime, strip_quotes,
};
use crate::collector::traits::{Environment, FileSystem};
use crate::model::{INVALID, KernelInfo, MemoryUsage, NOT_IMPLEMENTED};

const PRETTY_NAME_KEY: &str = "PRETTY_NAME";
const MODEL_NAME_KEY: &str = "model name";
const CPU_MHZ_KEY: &str = "cpu MHz";

/// Error type for probe failures.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    File(#[from] KvError),
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),
    #[error("key {0:?} not found")]
    MissingKey(&'static str),
}

/// Locations probes read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Base path to proc filesystem (usually "/proc").
    pub proc_path: PathBuf,
    /// os-release candidates, tried in order.
    pub os_release_paths: Vec<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            proc_path: PathBuf::from("/proc"),
            os_release_paths: vec![
                PathBuf::from("/etc/os-release"),
                PathBuf::from("/usr/lib/os-release"),
            ],
        }
    }
}

/// The set of host probes.
pub struct Probes<F: FileSystem, R: CommandRunner, E: Environment> {
    fs: F,
    runner: R,
    env: E,
    config: ProbeConfig,
}

impl<F: FileSystem, R: CommandRunner, E: Environment> Probes<F, R, E> {
    pub fn new(fs: F, runner: R, env: E, config: ProbeConfig) -> Self {
        Self {
            fs,
            runner,
            env,
            config,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Host name from the OS; empty when it cannot be determined.
    pub fn hostname(&self) -> String {
        match self.env.hostname() {
            Ok(name) => name,
            Err(e) => {
                debug!(error = %e, "hostname unavailable");
                String::new()
            }
        }
    }

    /// `$USER`; empty when unset.
    pub fn username(&self) -> String {
        self.env.var("USER").unwrap_or_default()
    }

    /// Kernel name, release and machine from `uname -smr`.
    pub fn kernel(&self) -> Result<KernelInfo, ProbeError> {
        let output = self.runner.run("uname", &["-smr"])?;
        let kernel = parse_uname(&String::from_utf8_lossy(&output))?;
        debug!(?kernel, "kernel identified");
        Ok(kernel)
    }

    /// `PRETTY_NAME` from the first readable os-release file.
    pub fn os_name(&self) -> Result<String, ProbeError> {
        let mut last_err = None;

        for path in &self.config.os_release_paths {
            match read_key_values(&self.fs, path, "=", &[PRETTY_NAME_KEY]) {
                Ok(values) => {
                    let name = values
                        .get(PRETTY_NAME_KEY)
                        .ok_or(ProbeError::MissingKey(PRETTY_NAME_KEY))?;
                    return Ok(strip_quotes(name).to_string());
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "os-release candidate unavailable");
                    last_err = Some(e);
                }
            }
        }

        Err(match last_err {
            Some(e) => ProbeError::File(e),
            None => ProbeError::MissingKey(PRETTY_NAME_KEY),
        })
    }

    /// Time since boot from `/proc/uptime`.
    pub fn uptime(&self) -> Result<Duration, ProbeError> {
        let path = self.config.proc_path.join("uptime");
        let content = self.read(&path)?;
        Ok(parse_uptime(&content)?)
    }

    /// CPU model and clock from `/proc/cpuinfo`.
    ///
    /// A missing model or clock degrades only that part of the summary; an
    /// unreadable file is an error.
    pub fn cpu(&self) -> Result<String, ProbeError> {
        let path = self.config.proc_path.join("cpuinfo");
        let values = read_key_values(&self.fs, &path, ":", &[MODEL_NAME_KEY, CPU_MHZ_KEY])?;

        let model = match values.get(MODEL_NAME_KEY) {
            Some(model) => model.as_str(),
            None => {
                warn!(probe = "cpu", "no model name found");
                INVALID
            }
        };

        let ghz = match values.get(CPU_MHZ_KEY).map(|v| parse_mhz_as_ghz(v)) {
            Some(Ok(ghz)) => ghz,
            Some(Err(e)) => {
                warn!(probe = "cpu", error = %e, "invalid clock speed");
                0.0
            }
            None => {
                warn!(probe = "cpu", "no clock speed found");
                0.0
            }
        };

        Ok(format_cpu_summary(model, ghz))
    }

    /// Total and used memory from `free`.
    pub fn memory(&self) -> Result<MemoryUsage, ProbeError> {
        let output = self.runner.run("free", &[])?;
        Ok(parse_free(&String::from_utf8_lossy(&output))?)
    }

    /// First line of `$SHELL --version`.
    pub fn shell(&self) -> Result<String, ProbeError> {
        let shell = self
            .env
            .var("SHELL")
            .ok_or(ProbeError::MissingVariable("SHELL"))?;
        let output = self.runner.run(&shell, &["--version"])?;
        Ok(first_line(&output))
    }

    /// Terminal label from `WT_SESSION` and `TERM_PROGRAM`; empty when neither is set.
    pub fn terminal(&self) -> String {
        let windows_terminal = self.env.var("WT_SESSION").is_some();
        let program = self.env.var("TERM_PROGRAM");
        compose_terminal(windows_terminal, program.as_deref())
    }

    pub fn gpu(&self) -> String {
        NOT_IMPLEMENTED.to_string()
    }

    pub fn theme(&self) -> String {
        NOT_IMPLEMENTED.to_string()
    }

    pub fn icons(&self) -> String {
        NOT_IMPLEMENTED.to_string()
    }

    fn read(&self, path: &Path) -> Result<String, ProbeError> {
        let bytes = self.fs.read(path).map_err(|source| ProbeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
