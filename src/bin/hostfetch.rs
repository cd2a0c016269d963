//! hostfetch - print a summary of the host.
//!
//! Supports two modes:
//! - One-shot (default): collect once, print the report, exit
//! - Follow: full-screen view refreshed on every key press and timer tick
//!
//! Usage:
//!   hostfetch                     # print once
//!   hostfetch --follow            # refresh every second until `q`
//!   hostfetch --follow -i 5       # refresh every 5 seconds
//!   hostfetch -vv --log-file /tmp/hostfetch.log

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use hostfetch::collector::{Collector, ProbeConfig, RealFs, SystemEnv, SystemRunner};
use hostfetch::logging::{DEFAULT_LOG_FILE, init_logging};
use hostfetch::provider::LiveProvider;
use hostfetch::refresh::{RefreshController, RefreshMode, TextSink};
use hostfetch::tui::App;

/// Fallback os-release location tried after `--os-release`.
const FALLBACK_OS_RELEASE: &str = "/usr/lib/os-release";

/// Host information snapshot.
#[derive(Parser)]
#[command(name = "hostfetch", about = "Show host information")]
struct Args {
    /// Keep refreshing in a full-screen view until `q` or Ctrl+C.
    #[arg(short, long)]
    follow: bool,

    /// Timer tick in seconds for follow mode.
    #[arg(short, long, value_name = "SECS", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Diagnostic log file, opened for appending.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to /proc filesystem.
    #[arg(long, value_name = "PATH", default_value = "/proc")]
    proc_path: PathBuf,

    /// Path to os-release. /usr/lib/os-release is tried when it is missing.
    #[arg(long, value_name = "PATH", default_value = "/etc/os-release")]
    os_release: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_file, args.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = ProbeConfig {
        proc_path: args.proc_path,
        os_release_paths: vec![args.os_release, PathBuf::from(FALLBACK_OS_RELEASE)],
    };
    let mode = RefreshMode::from_flags(args.follow, Duration::from_secs(args.interval));
    info!(?mode, ?config, "starting");

    let collector = Collector::new(RealFs::new(), SystemRunner::new(), SystemEnv::new(), config);
    let controller = RefreshController::new(LiveProvider::new(collector), mode);

    let result = match mode {
        RefreshMode::OneShot => run_once(controller),
        RefreshMode::Follow { .. } => App::new(controller).run(),
    };

    if let Err(e) = result {
        error!(error = %e, "terminal error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_once(
    mut controller: RefreshController<LiveProvider<RealFs, SystemRunner, SystemEnv>>,
) -> io::Result<()> {
    let mut sink = TextSink::new(io::stdout().lock());
    controller.start(&mut sink).map(|_| ())
}
