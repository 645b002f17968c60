// ── Debug log ──
//
// Bounded, filterable record of every request, response and failure.
// The HTTP client writes into it through the `LogSink` trait; front ends
// read the filtered view and subscribe to the revision counter to redraw.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tokio::sync::watch;
use tracing::debug;

use netcfg_api::{LogKind, LogSink};

/// Entries retained before the oldest are evicted.
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

/// One immutable debug-log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub message: String,
    /// Free-form detail, usually pretty-printed JSON. May be empty.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: LogKind,
}

/// Which entries the filtered view shows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFilter {
    #[default]
    All,
    Error,
    Success,
    Info,
}

impl LogFilter {
    pub fn matches(self, kind: LogKind) -> bool {
        match self {
            Self::All => true,
            Self::Error => kind == LogKind::Error,
            Self::Success => kind == LogKind::Success,
            Self::Info => kind == LogKind::Info,
        }
    }
}

impl From<LogKind> for LogFilter {
    fn from(kind: LogKind) -> Self {
        match kind {
            LogKind::Info => Self::Info,
            LogKind::Success => Self::Success,
            LogKind::Error => Self::Error,
        }
    }
}

struct LogState {
    entries: VecDeque<Arc<LogEntry>>,
    filter: LogFilter,
}

/// Capacity-bounded FIFO of [`LogEntry`] values plus the selected filter.
///
/// Appending past capacity evicts from the front, so the buffer always
/// holds the most recent `capacity` entries in insertion order. The
/// filtered view is computed on every read and never cached.
pub struct DebugLog {
    state: Mutex<LogState>,
    capacity: usize,
    revision: watch::Sender<u64>,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DebugLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("DebugLog")
            .field("len", &state.entries.len())
            .field("capacity", &self.capacity)
            .field("filter", &state.filter)
            .finish()
    }
}

impl DebugLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Mutex::new(LogState {
                entries: VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)),
                filter: LogFilter::All,
            }),
            capacity,
            revision,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    // ── Mutation ─────────────────────────────────────────────────────

    /// Record an entry stamped with the current time.
    pub fn append(
        &self,
        message: impl Into<String>,
        content: impl Into<String>,
        kind: LogKind,
    ) -> Arc<LogEntry> {
        let entry = Arc::new(LogEntry {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message: message.into(),
            content: content.into(),
            kind,
        });
        debug!(kind = %entry.kind, "{}", entry.message);

        {
            let mut state = self.lock();
            state.entries.push_back(Arc::clone(&entry));
            while state.entries.len() > self.capacity {
                state.entries.pop_front();
            }
        }
        self.bump();
        entry
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
        self.bump();
    }

    /// Select the filter for [`filtered_view`](Self::filtered_view).
    /// The stored entries are untouched.
    pub fn set_filter(&self, filter: LogFilter) {
        self.lock().filter = filter;
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn filter(&self) -> LogFilter {
        self.lock().filter
    }

    /// Entries matching the current filter, oldest first.
    pub fn filtered_view(&self) -> Vec<Arc<LogEntry>> {
        let state = self.lock();
        let filter = state.filter;
        state
            .entries
            .iter()
            .filter(|e| filter.matches(e.kind))
            .cloned()
            .collect()
    }

    /// Every retained entry regardless of filter, oldest first.
    pub fn entries(&self) -> Vec<Arc<LogEntry>> {
        self.lock().entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Revision counter, bumped on every append and clear.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl LogSink for DebugLog {
    fn record(&self, kind: LogKind, message: &str, content: &str) {
        self.append(message, content, kind);
    }
}
