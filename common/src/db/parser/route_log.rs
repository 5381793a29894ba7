use crate::db::core::{RouteSummary, Verdict};
use crate::error::ScanError;
use crate::util::config::{Config, MalformedPolicy};
use crate::util::profiler::ScopedTimer;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Result of one pass over a route log.
///
/// `summary` always holds the counters collected before the scan ended, so
/// a verdict can be produced even when `failure` is set.
#[derive(Debug)]
pub struct ScanReport {
    pub summary: RouteSummary,
    pub lines_scanned: usize,
    pub failure: Option<ScanError>,
}

impl ScanReport {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    pub fn verdict(&self) -> Verdict {
        self.summary.verdict()
    }
}

#[derive(Clone, Copy)]
enum Counter {
    Routable,
    Routed,
    Errors,
}

impl Counter {
    fn slot<'a>(&self, summary: &'a mut RouteSummary) -> &'a mut i64 {
        match self {
            Counter::Routable => &mut summary.routable_nets,
            Counter::Routed => &mut summary.routed_nets,
            Counter::Errors => &mut summary.error_nets,
        }
    }
}

/// Splits a reader into lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// Routers that rewrite progress lines in place emit bare carriage returns,
/// so each of them has to end a line too.
pub struct LogLines<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    done: bool,
}

pub fn log_lines<R: BufRead>(reader: R) -> LogLines<R> {
    LogLines {
        reader,
        pending: VecDeque::new(),
        done: false,
    }
}

impl<R: BufRead> LogLines<R> {
    fn fill(&mut self) -> io::Result<()> {
        let mut chunk = Vec::new();
        if self.reader.read_until(b'\n', &mut chunk)? == 0 {
            self.done = true;
            return Ok(());
        }

        if chunk.last() == Some(&b'\n') {
            chunk.pop();
            if chunk.last() == Some(&b'\r') {
                chunk.pop();
            }
        } else if chunk.last() == Some(&b'\r') {
            chunk.pop();
        }

        self.pending
            .extend(chunk.split(|&b| b == b'\r').map(|line| line.to_vec()));
        Ok(())
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            if self.done {
                return None;
            }
            if let Err(e) = self.fill() {
                self.done = true;
                return Some(Err(e));
            }
        }

        let line = self.pending.pop_front()?;
        let decoded =
            String::from_utf8(line).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e));
        Some(decoded)
    }
}

pub fn scan_file(path: &Path, config: &Config) -> ScanReport {
    let mut timer = ScopedTimer::new("Route log scan");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            return ScanReport {
                summary: RouteSummary::default(),
                lines_scanned: 0,
                failure: Some(ScanError::Open {
                    path: path.to_path_buf(),
                    source,
                }),
            };
        }
    };

    let report = scan_lines(log_lines(BufReader::new(file)), config);
    timer.record(report.lines_scanned);
    report
}

/// Scans log lines for the router's summary counters.
///
/// Every matching line overwrites its counter, so the last summary in the
/// log wins. The three markers are tested independently on each line.
pub fn scan_lines<I, S>(lines: I, config: &Config) -> ScanReport
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let markers = [
        (config.markers.routable_nets.as_str(), Counter::Routable),
        (config.markers.routed_nets.as_str(), Counter::Routed),
        (config.markers.error_nets.as_str(), Counter::Errors),
    ];

    let mut summary = RouteSummary::default();
    let mut lines_scanned = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                return ScanReport {
                    summary,
                    lines_scanned,
                    failure: Some(ScanError::Read {
                        line: line_no,
                        source,
                    }),
                };
            }
        };
        let line: &str = line.as_ref();
        lines_scanned = line_no;

        for &(marker, counter) in &markers {
            if !line.contains(marker) {
                continue;
            }

            match counter_value(line) {
                Ok(value) => {
                    log::debug!("line {}: '{}' = {}", line_no, marker, value);
                    *counter.slot(&mut summary) = value;
                }
                Err(reason) => match config.scan.malformed_marker {
                    MalformedPolicy::Abort => {
                        return ScanReport {
                            summary,
                            lines_scanned,
                            failure: Some(ScanError::MalformedCounter {
                                line: line_no,
                                marker: marker.to_string(),
                                reason,
                            }),
                        };
                    }
                    MalformedPolicy::Skip => {
                        log::debug!(
                            "line {}: ignoring malformed '{}' counter: {}",
                            line_no,
                            marker,
                            reason
                        );
                    }
                },
            }
        }
    }

    ScanReport {
        summary,
        lines_scanned,
        failure: None,
    }
}

// Summary lines end in "<value> <unit>", so the value is the second-to-last token.
fn counter_value(line: &str) -> Result<i64, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(format!("expected at least 2 tokens, found {}", parts.len()));
    }
    let token = parts[parts.len() - 2];
    token
        .parse::<i64>()
        .map_err(|e| format!("'{}' is not an integer ({})", token, e))
}
