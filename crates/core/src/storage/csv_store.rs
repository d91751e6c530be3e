use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::errors::CoreError;

use super::traits::HistoryStore;

/// Name of the single CSV column.
pub const PNL_COLUMN: &str = "PnL";

/// PnL history kept in a one-column CSV file.
///
/// Layout:
/// ```text
/// PnL
/// 0
/// 100
/// 60
/// ```
#[derive(Debug, Clone)]
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole numbers are written without a fractional part, matching files
    /// produced by earlier versions of the dashboard.
    fn format_value(pnl: f64) -> String {
        pnl.to_string()
    }
}

impl HistoryStore for CsvHistoryStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn reset_history(&mut self) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record([PNL_COLUMN])?;
        writer.write_record([Self::format_value(0.0)])?;
        writer.flush()?;
        Ok(())
    }

    fn append(&mut self, pnl: f64) -> Result<(), CoreError> {
        // No `create`: appending to a missing file would produce a history
        // without header or baseline.
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record([Self::format_value(pnl)])?;
        writer.flush()?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<f64>>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)?;
        read_history(file).map(Some)
    }
}

/// Parse a PnL history from any CSV source with a `PnL` header.
pub fn read_history<R: std::io::Read>(source: R) -> Result<Vec<f64>, CoreError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(source);

    let column = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == PNL_COLUMN)
        .ok_or_else(|| CoreError::InvalidFileFormat(format!("missing '{PNL_COLUMN}' column")))?;

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let raw = record.get(column).unwrap_or("").trim();
        let value = raw.parse::<f64>().map_err(|_| {
            CoreError::InvalidFileFormat(format!("row {row}: '{raw}' is not a number"))
        })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(CsvHistoryStore::format_value(0.0), "0");
        assert_eq!(CsvHistoryStore::format_value(-40.0), "-40");
        assert_eq!(CsvHistoryStore::format_value(12.5), "12.5");
    }

    #[test]
    fn reads_pandas_style_file() {
        let data = "PnL\n0\n100\n60.5\n";
        let values = read_history(data.as_bytes()).unwrap();
        assert_eq!(values, vec![0.0, 100.0, 60.5]);
    }
}
