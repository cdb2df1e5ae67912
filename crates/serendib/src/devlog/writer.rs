//! Size-bounded sink writer.
//!
//! Entries are appended one per line as `[<ISO-8601 timestamp>] <JSON>`,
//! then the sink is trimmed back to the newest lines whenever it outgrows
//! the configured byte cap. Storage failures never reach the caller: the
//! logging path stays available even when a sink is broken, and suppressed
//! errors are observable through an optional diagnostic callback.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::LogSource;

/// Default per-sink size cap: 1 MiB.
pub const DEFAULT_MAX_SINK_BYTES: u64 = 1024 * 1024;

/// Default fraction of the cap retained after a trim.
pub const DEFAULT_RETENTION_FRACTION: f64 = 0.6;

/// Callback observing errors the writer swallowed.
type DiagnosticFn = dyn Fn(&Error) + Send + Sync;

/// Construction-time settings for a [`LogWriter`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogWriterConfig {
    /// Directory holding the per-source sink files.
    pub dir: PathBuf,
    /// Maximum size of one sink file in bytes before it is trimmed.
    pub max_sink_bytes: u64,
    /// Fraction of `max_sink_bytes` retained after a trim.
    pub retention_fraction: f64,
}

impl LogWriterConfig {
    /// Create a config for the given sink directory with default cap and
    /// retention.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_sink_bytes: DEFAULT_MAX_SINK_BYTES,
            retention_fraction: DEFAULT_RETENTION_FRACTION,
        }
    }
}

/// Append-only writer for the development log sinks.
///
/// One instance is created per process and shared by every log producer.
/// Writes to the same source serialize on a per-sink mutex, so concurrent
/// producers can never interleave lines or race the trim step; different
/// sources are fully independent.
pub struct LogWriter {
    config: LogWriterConfig,
    locks: [Mutex<()>; LogSource::ALL.len()],
    diagnostics: Option<Box<DiagnosticFn>>,
}

impl LogWriter {
    /// Create a writer with the given settings.
    #[must_use]
    pub fn new(config: LogWriterConfig) -> Self {
        Self {
            config,
            locks: std::array::from_fn(|_| Mutex::new(())),
            diagnostics: None,
        }
    }

    /// Create a writer that reports suppressed errors to `diagnostics`.
    ///
    /// The callback only observes failures; `write` and `trim` still never
    /// return errors.
    #[must_use]
    pub fn with_diagnostics(
        config: LogWriterConfig,
        diagnostics: impl Fn(&Error) + Send + Sync + 'static,
    ) -> Self {
        Self {
            config,
            locks: std::array::from_fn(|_| Mutex::new(())),
            diagnostics: Some(Box::new(diagnostics)),
        }
    }

    /// Get the writer's settings.
    #[must_use]
    pub fn config(&self) -> &LogWriterConfig {
        &self.config
    }

    /// Path of the sink file backing `source`.
    #[must_use]
    pub fn sink_path(&self, source: LogSource) -> PathBuf {
        self.config.dir.join(format!("{}.log", source.file_stem()))
    }

    /// Append `entries` to the sink for `source`, then trim it.
    ///
    /// No-op if `entries` is empty. Each entry is stamped at the moment of
    /// this call and written as one `[<timestamp>] <JSON>` line; an entry
    /// that fails to serialize is skipped without aborting the batch. All
    /// storage failures are swallowed: callers must not assume any
    /// particular write or trim succeeded.
    pub fn write<T: Serialize>(&self, source: LogSource, entries: &[T]) {
        if entries.is_empty() {
            return;
        }

        let _guard = self.locks[source.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Err(err) = self.append_locked(source, entries) {
            self.report(&err);
        }
        if let Err(err) = self.trim_locked(source) {
            self.report(&err);
        }
    }

    /// Trim the sink for `source` if it exceeds the configured cap.
    ///
    /// Keeps the newest contiguous suffix of lines fitting within the
    /// retention budget. No-op when the sink is missing or under the cap;
    /// idempotent once the sink is under budget. Failures are swallowed
    /// like in [`write`](Self::write).
    pub fn trim(&self, source: LogSource) {
        let _guard = self.locks[source.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Err(err) = self.trim_locked(source) {
            self.report(&err);
        }
    }

    /// Point-in-time stats for one sink.
    #[must_use]
    pub fn status(&self, source: LogSource) -> SinkStatus {
        let path = self.sink_path(source);
        let size_bytes = fs::metadata(&path).map_or(0, |meta| meta.len());
        let line_count = fs::read_to_string(&path).map_or(0, |content| content.lines().count());
        SinkStatus {
            source,
            path,
            size_bytes,
            line_count,
            over_cap: size_bytes > self.config.max_sink_bytes,
        }
    }

    /// Stats for every recognized sink.
    #[must_use]
    pub fn status_all(&self) -> Vec<SinkStatus> {
        LogSource::ALL.iter().map(|&s| self.status(s)).collect()
    }

    /// Append formatted entries; caller must hold the sink's lock.
    fn append_locked<T: Serialize>(&self, source: LogSource, entries: &[T]) -> Result<()> {
        fs::create_dir_all(&self.config.dir).map_err(|err| Error::DirectoryCreate {
            path: self.config.dir.clone(),
            source: err,
        })?;

        let path = self.sink_path(source);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|err| Error::sink_write(&path, err))?;

        for entry in entries {
            let json = match serde_json::to_string(entry) {
                Ok(json) => json,
                Err(err) => {
                    // One bad entry must not block the rest of the batch.
                    self.report(&Error::Json(err));
                    continue;
                }
            };
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            writeln!(file, "[{timestamp}] {json}").map_err(|err| Error::sink_write(&path, err))?;
        }

        Ok(())
    }

    /// Trim if over the cap; caller must hold the sink's lock.
    fn trim_locked(&self, source: LogSource) -> Result<()> {
        let path = self.sink_path(source);
        let Ok(meta) = fs::metadata(&path) else {
            return Ok(()); // missing sink: nothing to trim
        };
        if meta.len() <= self.config.max_sink_bytes {
            return Ok(());
        }

        let content = fs::read_to_string(&path).map_err(|err| Error::sink_read(&path, err))?;
        let kept = newest_suffix(&content, self.retained_budget());
        fs::write(&path, &kept).map_err(|err| Error::sink_write(&path, err))?;

        debug!(
            source = %source,
            before = meta.len(),
            after = kept.len(),
            "trimmed log sink"
        );
        Ok(())
    }

    /// Byte budget for the lines kept by a trim.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn retained_budget(&self) -> u64 {
        (self.config.retention_fraction * self.config.max_sink_bytes as f64) as u64
    }

    /// Record a suppressed error without surfacing it to the caller.
    fn report(&self, err: &Error) {
        warn!(error = %err, "dev-log operation failed; continuing");
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics(err);
        }
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogWriter")
            .field("config", &self.config)
            .field("has_diagnostics", &self.diagnostics.is_some())
            .finish_non_exhaustive()
    }
}

/// Point-in-time stats for one sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinkStatus {
    /// The source this sink backs.
    pub source: LogSource,
    /// Path of the sink file.
    pub path: PathBuf,
    /// Current size in bytes (0 if the sink does not exist).
    pub size_bytes: u64,
    /// Number of lines currently in the sink.
    pub line_count: usize,
    /// Whether the sink currently exceeds the configured cap.
    pub over_cap: bool,
}

/// Select the newest contiguous suffix of `content`'s lines whose total
/// size fits within `budget` bytes.
///
/// Each line is charged its byte length plus the newline terminator.
/// Selection scans from the last line backward and stops before the first
/// line that would exceed the budget, so the result may be empty when even
/// the newest line is larger than the budget. Kept lines come out in their
/// original order, newline-terminated.
fn newest_suffix(content: &str, budget: u64) -> String {
    let lines: Vec<&str> = content.lines().collect();

    let mut kept = 0;
    let mut total: u64 = 0;
    for line in lines.iter().rev() {
        let cost = u64::try_from(line.len()).unwrap_or(u64::MAX).saturating_add(1);
        if total.saturating_add(cost) > budget {
            break;
        }
        total += cost;
        kept += 1;
    }

    let mut out = String::new();
    for line in &lines[lines.len() - kept..] {
        out.push_str(line);
        out.push('\n');
    }
    out
}
