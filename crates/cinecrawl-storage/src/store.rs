use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cinecrawl_models::MovieRecord;
use tracing::debug;

/// Writes the whole record table to one CSV file, overwriting prior
/// contents on every save.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `records` in table order: header row, then one row per
    /// record. The parent directory is created if absent.
    pub fn save(&self, records: &[MovieRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        writer.write_record(MovieRecord::COLUMNS)?;
        for record in records {
            writer.write_record(record.to_row())?;
        }
        writer.flush()?;

        debug!("wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
