//! Append-only activity logger
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};

use super::entry::ActivityEntry;

/// Writes activity entries to a JSONL file
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry to the log
    pub fn log(&self, entry: &ActivityEntry) -> BudgetResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| BudgetError::Io(format!("Failed to open activity log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| BudgetError::Json(format!("Failed to serialize activity entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| BudgetError::Io(format!("Failed to write activity entry: {}", e)))?;

        file.flush()
            .map_err(|e| BudgetError::Io(format!("Failed to flush activity log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> BudgetResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| BudgetError::Io(format!("Failed to open activity log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                BudgetError::Io(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                BudgetError::Json(format!(
                    "Failed to parse activity entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries
    pub fn read_recent(&self, count: usize) -> BudgetResult<Vec<ActivityEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Number of non-empty lines in the log
    pub fn entry_count(&self) -> BudgetResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| BudgetError::Io(format!("Failed to open activity log: {}", e)))?;

        Ok(BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::entry::ActivityKind;
    use tempfile::TempDir;

    fn create_test_logger() -> (ActivityLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = ActivityLogger::new(temp_dir.path().join("activity.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&ActivityEntry::sample_generated("budget_data.csv", 100))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, ActivityKind::SampleGenerated);
    }

    #[test]
    fn test_read_recent_and_count() {
        let (logger, _temp) = create_test_logger();
        for rows in 0..5 {
            logger
                .log(&ActivityEntry::sample_generated("memory", rows))
                .unwrap();
        }

        assert_eq!(logger.entry_count().unwrap(), 5);
        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].details["rows"], 3);
        assert_eq!(recent[1].details["rows"], 4);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert_eq!(logger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_skips_blank_lines() {
        let (logger, _temp) = create_test_logger();
        logger.log(&ActivityEntry::sample_generated("memory", 1)).unwrap();
        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        writeln!(file).unwrap();
        logger.log(&ActivityEntry::sample_generated("memory", 2)).unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 2);
        assert_eq!(logger.entry_count().unwrap(), 2);
    }
}
