//! Parsers for probe inputs.
//!
//! These are pure functions over file contents or command output. They are
//! designed to be easily testable with string inputs.

use std::time::Duration;

use thiserror::Error;

use crate::model::{KernelInfo, MemoryUsage};

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("parse error: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

/// Parses the output of `uname -smr` into kernel name, release and machine.
///
/// The trimmed output must consist of exactly three space separated tokens.
pub fn parse_uname(output: &str) -> Result<KernelInfo, ParseError> {
    let fields: Vec<&str> = output.split_whitespace().collect();

    match fields.as_slice() {
        [name, version, machine] => Ok(KernelInfo {
            name: name.to_string(),
            version: version.to_string(),
            machine: machine.to_string(),
        }),
        _ => Err(ParseError::new(format!(
            "expected 3 fields in uname output, got {}",
            fields.len()
        ))),
    }
}

/// Parses `/proc/uptime` content.
///
/// Format: `<uptime seconds> <idle seconds>`. Only the first value is used,
/// truncated to whole seconds.
pub fn parse_uptime(content: &str) -> Result<Duration, ParseError> {
    let first = content
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::new("empty uptime"))?;

    let seconds: f64 = first
        .parse()
        .map_err(|_| ParseError::new(format!("invalid uptime value {:?}", first)))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ParseError::new(format!("uptime out of range: {}", first)));
    }

    Ok(Duration::from_secs(seconds.trunc() as u64))
}

/// Parses the output of `free`.
///
/// The first two integers after the first `:` (the `Mem:` row) are total and
/// used memory in KiB.
///
/// ```text
///                total        used        free      shared  buff/cache   available
/// Mem:        16000000     8000000     2000000      500000     6000000     7000000
/// ```
pub fn parse_free(output: &str) -> Result<MemoryUsage, ParseError> {
    let (_, rest) = output
        .split_once(':')
        .ok_or_else(|| ParseError::new("no ':' in free output"))?;

    let mut fields = rest.split_whitespace();
    let mut next_kib = |name: &str| -> Result<u64, ParseError> {
        let field = fields
            .next()
            .ok_or_else(|| ParseError::new(format!("missing {} memory", name)))?;
        field
            .parse()
            .map_err(|_| ParseError::new(format!("invalid {} memory {:?}", name, field)))
    };

    let total_kib = next_kib("total")?;
    let used_kib = next_kib("used")?;

    Ok(MemoryUsage {
        used_kib,
        total_kib,
    })
}

/// Parses a `cpu MHz` value from `/proc/cpuinfo` and converts it to GHz.
pub fn parse_mhz_as_ghz(value: &str) -> Result<f64, ParseError> {
    let mhz: f64 = value
        .trim()
        .parse()
        .map_err(|_| ParseError::new(format!("invalid cpu MHz {:?}", value)))?;
    Ok(mhz / 1000.0)
}

/// Formats the CPU summary line, e.g. `"Example CPU @ 2.500GHz"`.
pub fn format_cpu_summary(model: &str, ghz: f64) -> String {
    format!("{} @ {:.3}GHz", model, ghz)
}

/// Strips surrounding double and single quotes from an os-release value.
///
/// os-release allows either quoting style, e.g. `PRETTY_NAME='Alpine Linux'`.
pub fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}

/// Returns everything before the first newline of command output.
pub fn first_line(output: &[u8]) -> String {
    let end = output
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(output.len());
    String::from_utf8_lossy(&output[..end])
        .trim_end_matches('\r')
        .to_string()
}

/// Counts newline-terminated lines in command output.
pub fn count_lines(output: &[u8]) -> usize {
    output.iter().filter(|&&b| b == b'\n').count()
}

/// Builds the terminal label from the Windows Terminal session marker and
/// `TERM_PROGRAM`.
pub fn compose_terminal(windows_terminal: bool, program: Option<&str>) -> String {
    match (windows_terminal, program) {
        (true, Some(program)) => format!("Windows Terminal ({})", program),
        (true, None) => "Windows Terminal".to_string(),
        (false, Some(program)) => program.to_string(),
        (false, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uname() {
        let kernel = parse_uname("Linux 6.8.0-45-generic x86_64\n").unwrap();
        assert_eq!(kernel.name, "Linux");
        assert_eq!(kernel.version, "6.8.0-45-generic");
        assert_eq!(kernel.machine, "x86_64");
    }

    #[test]
    fn test_parse_uname_wrong_field_count() {
        assert!(parse_uname("Linux 6.8.0").is_err());
        assert!(parse_uname("Linux 6.8.0 x86_64 GNU/Linux").is_err());
        assert!(parse_uname("").is_err());
    }

    #[test]
    fn test_parse_uptime_truncates() {
        let uptime = parse_uptime("12345.67 6789.01\n").unwrap();
        assert_eq!(uptime, Duration::from_secs(12345));
    }

    #[test]
    fn test_parse_uptime_just_booted() {
        assert_eq!(parse_uptime("0.99 0.50").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_uptime_invalid() {
        assert!(parse_uptime("").is_err());
        assert!(parse_uptime("abc 1.0").is_err());
        assert!(parse_uptime("-5.0 1.0").is_err());
        assert!(parse_uptime("NaN 1.0").is_err());
    }

    #[test]
    fn test_parse_free() {
        let output = "\
               total        used        free      shared  buff/cache   available
Mem:        16000000     8000000     2000000      500000     6000000     7000000
Swap:        2097148           0     2097148
";
        let mem = parse_free(output).unwrap();
        assert_eq!(mem.total_kib, 16000000);
        assert_eq!(mem.used_kib, 8000000);
    }

    #[test]
    fn test_parse_free_single_line() {
        let mem = parse_free("Mem: 16000000 8000000 ...").unwrap();
        assert_eq!(
            mem,
            MemoryUsage {
                used_kib: 8000000,
                total_kib: 16000000
            }
        );
    }

    #[test]
    fn test_parse_free_invalid() {
        assert!(parse_free("no colon here").is_err());
        assert!(parse_free("Mem: 16000000").is_err());
        assert!(parse_free("Mem: lots 8000000").is_err());
    }

    #[test]
    fn test_parse_mhz_as_ghz() {
        assert_eq!(parse_mhz_as_ghz("2500.000").unwrap(), 2.5);
        assert!(parse_mhz_as_ghz("fast").is_err());
    }

    #[test]
    fn test_format_cpu_summary() {
        assert_eq!(
            format_cpu_summary("Example CPU", 2.5),
            "Example CPU @ 2.500GHz"
        );
        assert_eq!(format_cpu_summary("Invalid", 0.0), "Invalid @ 0.000GHz");
        assert_eq!(format_cpu_summary("X", 3.4001234), "X @ 3.400GHz");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Ubuntu 24.04.1 LTS\""), "Ubuntu 24.04.1 LTS");
        assert_eq!(strip_quotes("'Alpine'"), "Alpine");
        assert_eq!(strip_quotes("Arch"), "Arch");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(
            first_line(b"GNU bash, version 5.2.21(1)-release\nCopyright\n"),
            "GNU bash, version 5.2.21(1)-release"
        );
        assert_eq!(first_line(b"zsh 5.9 (x86_64-pc-linux-gnu)"), "zsh 5.9 (x86_64-pc-linux-gnu)");
        assert_eq!(first_line(b"fish, version 3.7.0\r\n"), "fish, version 3.7.0");
        assert_eq!(first_line(b""), "");
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(b"a\nb\nc\n"), 3);
        assert_eq!(count_lines(b""), 0);
        assert_eq!(count_lines(b"no newline"), 0);
    }

    #[test]
    fn test_compose_terminal() {
        assert_eq!(compose_terminal(false, None), "");
        assert_eq!(compose_terminal(true, None), "Windows Terminal");
        assert_eq!(compose_terminal(false, Some("WezTerm")), "WezTerm");
        assert_eq!(
            compose_terminal(true, Some("vscode")),
            "Windows Terminal (vscode)"
        );
    }
}
