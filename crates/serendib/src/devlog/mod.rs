//! Bounded development log sinks.
//!
//! The dev server captures browser debug traffic into one file per source,
//! trimmed back to the newest entries whenever a sink outgrows its byte cap.

pub mod writer;

use serde::{Deserialize, Serialize};

pub use writer::{
    LogWriter, LogWriterConfig, SinkStatus, DEFAULT_MAX_SINK_BYTES, DEFAULT_RETENTION_FRACTION,
};

/// A named source of development log entries.
///
/// Each source is backed by its own sink file; sources never share storage
/// and are written independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogSource {
    /// Captured browser console output.
    BrowserConsole,
    /// Captured network request/response summaries.
    NetworkRequests,
    /// Captured session replay events.
    SessionReplay,
}

impl LogSource {
    /// All recognized sources.
    pub const ALL: [Self; 3] = [Self::BrowserConsole, Self::NetworkRequests, Self::SessionReplay];

    /// File stem of the sink backing this source (`<stem>.log`).
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::BrowserConsole => "browserConsole",
            Self::NetworkRequests => "networkRequests",
            Self::SessionReplay => "sessionReplay",
        }
    }

    /// Stable index of this source, for per-sink lock tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::BrowserConsole => 0,
            Self::NetworkRequests => 1,
            Self::SessionReplay => 2,
        }
    }
}

impl std::fmt::Display for LogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_source_display() {
        assert_eq!(LogSource::BrowserConsole.to_string(), "browserConsole");
        assert_eq!(LogSource::NetworkRequests.to_string(), "networkRequests");
        assert_eq!(LogSource::SessionReplay.to_string(), "sessionReplay");
    }

    #[test]
    fn test_log_source_serde_camel_case() {
        let json = serde_json::to_string(&LogSource::NetworkRequests).unwrap();
        assert_eq!(json, "\"networkRequests\"");

        let source: LogSource = serde_json::from_str("\"sessionReplay\"").unwrap();
        assert_eq!(source, LogSource::SessionReplay);
    }

    #[test]
    fn test_log_source_all_covers_every_variant() {
        assert_eq!(LogSource::ALL.len(), 3);
        for (i, source) in LogSource::ALL.iter().enumerate() {
            assert_eq!(source.index(), i);
        }
    }
}
