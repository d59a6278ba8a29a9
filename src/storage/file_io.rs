//! CSV file I/O with atomic writes
//!
//! Both data files are small enough to be rewritten in full on every save.
//! Writes go to a temp file in the same directory and are renamed into place,
//! so a crash mid-write never leaves a truncated file behind.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// A row type with a fixed CSV header
pub trait CsvRecord {
    /// Column names, in serialization order
    const HEADERS: &'static [&'static str];
}

/// Read all rows from a CSV file, or `None` if the file does not exist
pub fn read_csv<T, P>(path: P) -> Result<Option<Vec<T>>, BudgetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let row: T = record.map_err(|e| {
            BudgetError::Csv(format!(
                "Failed to parse {} row {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        rows.push(row);
    }

    Ok(Some(rows))
}

/// Write rows to a CSV file atomically (write to temp, then rename)
///
/// The header row is always written, even for an empty collection.
pub fn write_csv_atomic<T, P>(path: P, rows: &[T]) -> Result<(), BudgetError>
where
    T: Serialize + CsvRecord,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(T::HEADERS)
        .map_err(|e| BudgetError::Storage(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| BudgetError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Value")]
        value: i32,
    }

    impl CsvRecord for Row {
        const HEADERS: &'static [&'static str] = &["Name", "Value"];
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let rows: Option<Vec<Row>> = read_csv(temp_dir.path().join("missing.csv")).unwrap();
        assert!(rows.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        let rows = vec![
            Row { name: "a, with comma".into(), value: 1 },
            Row { name: "b".into(), value: 2 },
        ];

        write_csv_atomic(&path, &rows).unwrap();

        let loaded: Vec<Row> = read_csv(&path).unwrap().unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_empty_write_keeps_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        write_csv_atomic::<Row, _>(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Value\n");
        let loaded: Vec<Row> = read_csv(&path).unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        write_csv_atomic(&path, &[Row { name: "x".into(), value: 0 }]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("rows.csv.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("rows.csv");

        write_csv_atomic::<Row, _>(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "Name,Value\nok,1\nbad,not-a-number\n").unwrap();

        let err = read_csv::<Row, _>(&path).unwrap_err();
        assert!(matches!(err, BudgetError::Csv(ref msg) if msg.contains("row 2")));
    }
}
