use std::fmt::Display;
use std::time::Duration;

use crate::driver::Summary;

/// Measurements taken around a run. Logged, never printed with the report.
#[derive(Clone, PartialEq, Debug)]
pub struct RunStats {
    pub elapsed: Duration,
    pub nodes_built: u64,
    pub peak_rss_kb: Option<u64>,
}

impl RunStats {
    pub fn collect(elapsed: Duration, summary: &Summary) -> Self {
        RunStats {
            elapsed,
            nodes_built: summary.nodes_built,
            peak_rss_kb: peak_rss_kb(),
        }
    }

    /// Nodes built per second of wall time.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }

        self.nodes_built as f64 / secs
    }
}

impl Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes in {:.3}s ({:.0} nodes/s)",
            self.nodes_built,
            self.elapsed.as_secs_f64(),
            self.throughput()
        )?;

        match self.peak_rss_kb {
            Some(kb) => write!(f, ", peak rss {kb} kB"),
            None => write!(f, ", peak rss unavailable"),
        }
    }
}

/// Peak resident set size of this process, from `/proc/self/status`.
/// Returns None off Linux or if the file cannot be parsed.
pub fn peak_rss_kb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        status_kb(&status, "VmHWM:")
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Value of a `Key:   123 kB` line in a proc status file.
fn status_kb(status: &str, key: &str) -> Option<u64> {
    let line = status.lines().find(|line| line.starts_with(key))?;

    line[key.len()..].split_whitespace().next()?.parse().ok()
}
