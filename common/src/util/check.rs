use crate::db::core::Verdict;
use crate::db::parser::route_log::{self, ScanReport};
use crate::util::config::Config;
use anyhow::Context;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Outcome of checking one route log.
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: ScanReport,
    pub verdict: Verdict,
    pub verdict_path: PathBuf,
}

/// Removes the first occurrence of `pattern` from `log_path`, wherever it sits.
pub fn verdict_path(log_path: &Path, pattern: &str) -> PathBuf {
    PathBuf::from(strip_first(log_path.as_os_str(), pattern))
}

#[cfg(unix)]
fn strip_first(path: &OsStr, pattern: &str) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = path.as_bytes();
    let needle = pattern.as_bytes();
    if needle.is_empty() {
        return path.to_os_string();
    }

    match bytes.windows(needle.len()).position(|w| w == needle) {
        Some(at) => {
            let mut stripped = Vec::with_capacity(bytes.len() - needle.len());
            stripped.extend_from_slice(&bytes[..at]);
            stripped.extend_from_slice(&bytes[at + needle.len()..]);
            OsString::from_vec(stripped)
        }
        None => path.to_os_string(),
    }
}

#[cfg(not(unix))]
fn strip_first(path: &OsStr, pattern: &str) -> OsString {
    match path.to_str() {
        Some(s) => OsString::from(s.replacen(pattern, "", 1)),
        None => path.to_os_string(),
    }
}

pub fn write_verdict(path: &Path, verdict: Verdict) -> anyhow::Result<()> {
    std::fs::write(path, verdict.as_str())
        .with_context(|| format!("Failed to write verdict to {:?}", path))
}

/// Scans `log_path` for the net summary.
///
/// Problems reading the log never fail the check; they are logged and the
/// report keeps whatever counters were collected before them.
pub fn inspect(log_path: &Path, config: &Config) -> ScanReport {
    log::info!("Checking route log: {}", log_path.display());

    let report = route_log::scan_file(log_path, config);
    match &report.failure {
        Some(e) if e.is_unreadable() => log::debug!("Route log unavailable: {}", e),
        Some(e) => log::debug!(
            "Route log scan stopped after {} lines: {}",
            report.lines_scanned,
            e
        ),
        None => log::debug!("Scanned {} lines", report.lines_scanned),
    }
    report
}

/// Writes the verdict for `report` next to the log (or to `output`).
///
/// Only a failed verdict write is returned as an error.
pub fn record(
    log_path: &Path,
    output: Option<&Path>,
    config: &Config,
    report: ScanReport,
) -> anyhow::Result<CheckOutcome> {
    let verdict = report.verdict();

    let verdict_path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let path = verdict_path(log_path, &config.output.strip_pattern);
            if path == log_path {
                log::warn!(
                    "'{}' not found in {}; the verdict will overwrite the log itself",
                    config.output.strip_pattern,
                    log_path.display()
                );
            }
            path
        }
    };

    write_verdict(&verdict_path, verdict)?;

    match verdict {
        Verdict::Pass => log::info!("\x1b[32mPASS\x1b[0m: {}", report.summary),
        Verdict::Fail => log::info!("\x1b[31mFAIL\x1b[0m: {}", report.summary),
    }
    log::info!("Verdict written to {:?}", verdict_path);

    Ok(CheckOutcome {
        report,
        verdict,
        verdict_path,
    })
}
