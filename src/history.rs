//! Frame history tracking for debugging and diagnostics.

use std::collections::VecDeque;
use std::time::Instant;

use serde::Serialize;

use crate::command::{Command, to_hex};

/// A recorded frame in the history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub command: String,
    /// Frame bytes as lowercase hex
    pub frame: String,
    /// Seconds since history creation
    pub timestamp: f64,
}

/// Tracks the most recent frames handed to the transport.
#[derive(Debug, Clone)]
pub struct FrameHistory {
    entries: VecDeque<HistoryEntry>,
    frames_sent: usize,
    last_error: Option<String>,
    start_time: Instant,
    max_entries: usize,
}

impl Default for FrameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHistory {
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    pub fn new() -> Self {
        Self::with_max_entries(Self::DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            frames_sent: 0,
            last_error: None,
            start_time: Instant::now(),
            max_entries,
        }
    }

    pub fn record(&mut self, command: &Command, frame: &[u8]) {
        self.frames_sent += 1;
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            command: command.to_string(),
            frame: to_hex(frame),
            timestamp: self.start_time.elapsed().as_secs_f64(),
        });
    }

    pub fn record_error(&mut self, error: &str) {
        self.last_error = Some(error.to_string());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.frames_sent = 0;
        self.last_error = None;
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            frames_sent: self.frames_sent,
            total_entries: self.entries.len(),
            last_frame: self.entries.back().map(|e| e.frame.clone()),
            last_error: self.last_error.clone(),
        }
    }
}

/// Summary of frame history for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct HistorySummary {
    pub frames_sent: usize,
    pub total_entries: usize,
    pub last_frame: Option<String>,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_frame() {
        let mut history = FrameHistory::new();
        let command = Command::OnOff(true);
        history.record(&command, &command.encode());

        assert_eq!(history.len(), 1);
        let entry = history.entries().next().unwrap();
        assert_eq!(entry.command, "on_off(true)");
        assert_eq!(entry.frame, "5a0102ff");
    }

    #[test]
    fn test_record_error() {
        let mut history = FrameHistory::new();
        history.record_error("frame queue closed");
        assert_eq!(history.last_error(), Some("frame queue closed"));
    }

    #[test]
    fn test_max_entries() {
        let mut history = FrameHistory::with_max_entries(2);
        for on in [true, false, true, false, true] {
            let command = Command::OnOff(on);
            history.record(&command, &command.encode());
        }
        assert_eq!(history.len(), 2);

        let summary = history.summary();
        assert_eq!(summary.frames_sent, 5);
        assert_eq!(summary.last_frame.as_deref(), Some("5a0102ff"));
    }

    #[test]
    fn test_disabled_history_still_counts() {
        let mut history = FrameHistory::with_max_entries(0);
        let command = Command::OnOff(false);
        history.record(&command, &command.encode());
        assert!(history.is_empty());
        assert_eq!(history.summary().frames_sent, 1);
    }
}
