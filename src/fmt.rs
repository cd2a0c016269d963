//! Plain-text report rendering.
//!
//! All pure formatting functions live here. The same report text is printed
//! in one-shot mode and drawn by the TUI in follow mode.

use std::fmt::Write;
use std::time::Duration;

use crate::model::Snapshot;

/// Indentation of every report line.
const INDENT: &str = "    ";

/// Format a duration as hours, minutes and seconds.
///
/// `"0s"`, `"45s"`, `"2m5s"`, `"3h25m45s"`, `"26h0m0s"`. Sub-second parts
/// are dropped.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}h{}m{}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

/// Format a KiB count as whole MiB, e.g. `"7813MiB"`.
pub fn format_kib_as_mib(kib: u64) -> String {
    format!("{:.0}MiB", kib as f64 / 1024.0)
}

/// Renders a snapshot as the fixed-layout report.
///
/// ```text
///
///     alice@devbox
///     ------------
///     OS: Ubuntu 24.04.1 LTS x86_64
///     Kernel: 6.8.0-45-generic
///     ...
/// ```
pub fn render_report(snapshot: &Snapshot) -> String {
    let header = format!("{}@{}", snapshot.username, snapshot.hostname);
    let underline = "-".repeat(header.chars().count());

    let lines = [
        header,
        underline,
        format!("OS: {} {}", snapshot.os_name, snapshot.kernel.machine),
        format!("Kernel: {}", snapshot.kernel.version),
        format!("Uptime: {}", format_duration(snapshot.uptime)),
        format!("Packages: {}", snapshot.packages),
        format!("Shell: {}", snapshot.shell),
        format!("Theme: {}", snapshot.theme),
        format!("Icons: {}", snapshot.icons),
        format!("Terminal: {}", snapshot.terminal),
        format!("CPU: {}", snapshot.cpu),
        format!("GPU: {}", snapshot.gpu),
        format!(
            "Memory: {} / {}",
            format_kib_as_mib(snapshot.memory.used_kib),
            format_kib_as_mib(snapshot.memory.total_kib)
        ),
        format!("Fetch speed: {:?}", snapshot.fetch_duration),
    ];

    let mut out = String::from("\n");
    for line in lines {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}{}", INDENT, line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{KernelInfo, MemoryUsage};

    fn sample() -> Snapshot {
        Snapshot {
            hostname: "devbox".to_string(),
            username: "alice".to_string(),
            os_name: "Ubuntu 24.04.1 LTS".to_string(),
            kernel: KernelInfo {
                name: "Linux".to_string(),
                version: "6.8.0-45-generic".to_string(),
                machine: "x86_64".to_string(),
            },
            uptime: Duration::from_secs(12345),
            packages: "120 (dpkg), 8 (snap)".to_string(),
            shell: "zsh 5.9 (x86_64-pc-linux-gnu)".to_string(),
            theme: "Not implemented".to_string(),
            icons: "Not implemented".to_string(),
            terminal: "WezTerm".to_string(),
            cpu: "Example CPU @ 2.500GHz".to_string(),
            gpu: "Not implemented".to_string(),
            memory: MemoryUsage {
                used_kib: 8_001_000,
                total_kib: 16_000_000,
            },
            fetch_duration: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_millis(45_900)), "45s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m5s");
        assert_eq!(format_duration(Duration::from_secs(12345)), "3h25m45s");
        assert_eq!(format_duration(Duration::from_secs(26 * 3600)), "26h0m0s");
    }

    #[test]
    fn test_format_kib_as_mib() {
        assert_eq!(format_kib_as_mib(0), "0MiB");
        assert_eq!(format_kib_as_mib(16_000_000), "15625MiB");
        assert_eq!(format_kib_as_mib(1536), "2MiB");
    }

    #[test]
    fn test_render_report_layout() {
        let report = render_report(&sample());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "    alice@devbox");
        assert_eq!(lines[2], "    ------------");
        assert_eq!(lines[3], "    OS: Ubuntu 24.04.1 LTS x86_64");
        assert_eq!(lines[4], "    Kernel: 6.8.0-45-generic");
        assert_eq!(lines[5], "    Uptime: 3h25m45s");
        assert_eq!(lines[6], "    Packages: 120 (dpkg), 8 (snap)");
        assert_eq!(lines[7], "    Shell: zsh 5.9 (x86_64-pc-linux-gnu)");
        assert_eq!(lines[8], "    Theme: Not implemented");
        assert_eq!(lines[9], "    Icons: Not implemented");
        assert_eq!(lines[10], "    Terminal: WezTerm");
        assert_eq!(lines[11], "    CPU: Example CPU @ 2.500GHz");
        assert_eq!(lines[12], "    GPU: Not implemented");
        assert_eq!(lines[13], "    Memory: 7813MiB / 15625MiB");
        assert_eq!(lines[14], "    Fetch speed: 12ms");
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn test_render_report_sentinels() {
        let report = render_report(&Snapshot::default());
        assert!(report.contains("    @\n    -\n"));
        assert!(report.contains("OS: Invalid Invalid"));
        assert!(report.contains("Memory: 0MiB / 0MiB"));
        assert!(report.contains("Uptime: 0s"));
    }
}
