use crate::pipeline::PositionRecord;
use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One persisted detection run: when it ran, what kind of source it was, and
/// every ball center found across the sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub time: String,
    pub source: String,
    pub balls_detected: usize,
    pub positions: Vec<(i32, i32)>,
}

/// Appends timestamped records to a JSON history log. The log is an array of
/// entries; a missing or unparsable file is treated as an empty starting log
/// rather than an error.
pub struct HistoryRecorder {
    path: PathBuf,
}

impl HistoryRecorder {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Appends one entry for a finished run and rewrites the log.
    pub fn record(&self, source: &str, positions: &PositionRecord) -> Result<()> {
        let mut entries = self.load_entries();

        entries.push(HistoryEntry {
            time: Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
            source: source.to_string(),
            balls_detected: positions.len(),
            positions: positions.as_slice().to_vec(),
        });

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write history log {}", self.path.display()))?;
        Ok(())
    }

    /// Reads the existing log, falling back to empty on a missing file or
    /// corrupt content.
    fn load_entries(&self) -> Vec<HistoryEntry> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }
}
