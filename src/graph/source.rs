//! src/graph/source.rs
//!
//! The watched graph file: decides when a reload is due (timer elapsed or
//! modification time changed) and performs it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use crate::graph::data::Format;
use crate::parse::{self, ParseError, Parsed};

pub struct GraphSource {
    path: PathBuf,
    format: Format,
    interval: Duration,
    last_refresh: Instant,
    /// `None` while the file does not exist.
    last_mtime: Option<SystemTime>,
}

impl GraphSource {
    /// Create a source and record the file's current modification time, so the
    /// first `poll` only reloads once the interval has passed or the file changes.
    pub fn new(path: impl Into<PathBuf>, format: Format, interval: Duration, now: Instant) -> Self {
        let path = path.into();
        let last_mtime = modified(&path);
        Self {
            path,
            format,
            interval,
            last_refresh: now,
            last_mtime,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Parse the file now, without touching the refresh bookkeeping.
    pub fn load(&self) -> Result<Parsed, ParseError> {
        parse::parse_file(self.format, &self.path)
    }

    /// Reload if due. `None` means nothing to do this frame.
    ///
    /// The timer and mtime are updated before parsing, so a failing file is
    /// retried on the next trigger rather than every frame.
    pub fn poll(&mut self, now: Instant) -> Option<Result<Parsed, ParseError>> {
        let mtime = modified(&self.path);
        let elapsed = now.saturating_duration_since(self.last_refresh);
        if elapsed <= self.interval && mtime == self.last_mtime {
            return None;
        }
        log::trace!(
            "refresh {}: elapsed={:?} mtime_changed={}",
            self.path.display(),
            elapsed,
            mtime != self.last_mtime
        );
        self.last_refresh = now;
        self.last_mtime = mtime;
        Some(self.load())
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    const TOPOLOGY: &str = "N r1 10.0.0.1 0 100\nN r2 10.0.0.2 1 10\nA r1 r2 1 1 1.0 1\n";

    fn write(path: &Path, content: &str) {
        let mut f = File::create(path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    fn touch(path: &Path, mtime: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();
    }

    #[test]
    fn idle_until_interval_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topologia.txt");
        write(&path, TOPOLOGY);

        let t0 = Instant::now();
        let mut src = GraphSource::new(&path, Format::Topology, Duration::from_secs(1), t0);
        assert!(src.poll(t0 + Duration::from_millis(500)).is_none());
        assert!(src.poll(t0 + Duration::from_secs(1)).is_none());

        let parsed = src.poll(t0 + Duration::from_millis(1001)).unwrap().unwrap();
        assert_eq!(parsed.graph.vertices.len(), 2);
        // timer restarted
        assert!(src.poll(t0 + Duration::from_millis(1500)).is_none());
    }

    #[test]
    fn mtime_change_reloads_before_interval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topologia.txt");
        write(&path, "N r1 10.0.0.1 0 100\n");
        touch(&path, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000));

        let t0 = Instant::now();
        let mut src = GraphSource::new(&path, Format::Topology, Duration::from_secs(60), t0);
        assert!(src.poll(t0).is_none());

        write(&path, TOPOLOGY);
        touch(&path, SystemTime::UNIX_EPOCH + Duration::from_secs(2_000));

        let parsed = src.poll(t0 + Duration::from_millis(10)).unwrap().unwrap();
        assert_eq!(parsed.graph.vertices.len(), 2);
        assert!(src.poll(t0 + Duration::from_millis(20)).is_none());
    }

    #[test]
    fn file_appearing_counts_as_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topologia.txt");

        let t0 = Instant::now();
        let mut src = GraphSource::new(&path, Format::Topology, Duration::from_secs(60), t0);
        assert!(src.poll(t0).is_none());
        assert!(src.load().unwrap().graph.vertices.is_empty());

        write(&path, TOPOLOGY);
        let parsed = src.poll(t0 + Duration::from_millis(1)).unwrap().unwrap();
        assert_eq!(parsed.graph.edges.len(), 1);
    }

    #[test]
    fn weighted_failure_is_reported_once_per_trigger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrixGrafoL.txt");

        let t0 = Instant::now();
        let mut src = GraphSource::new(&path, Format::Weighted, Duration::from_secs(1), t0);
        assert!(src.load().unwrap_err().is_not_found());

        let t1 = t0 + Duration::from_secs(2);
        assert!(src.poll(t1).unwrap().is_err());
        assert!(src.poll(t1 + Duration::from_millis(100)).is_none());
    }
}
