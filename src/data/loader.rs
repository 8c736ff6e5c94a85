use std::cell::OnceCell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::StringRecord;

use super::model::{Dataset, Record, REQUIRED_COLUMNS};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the health dataset from a delimited file.
///
/// Layout: header row, then one row per individual. The first column is a
/// row index and is dropped; the remaining columns are matched to
/// [`Record`] fields by header name, so their order does not matter and
/// extra columns are ignored. Every column in [`REQUIRED_COLUMNS`] must be
/// present before any row is decoded.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    // Headers and cells are taken verbatim; a padded header does not
    // satisfy a required column.
    let mut reader = csv::ReaderBuilder::new().from_reader(file);

    let raw_headers = reader
        .headers()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let headers = attribute_headers(&raw_headers, path)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row_no = i + 1;
        let raw = result.map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            row: row_no,
            source,
        })?;
        let row: StringRecord = raw.iter().skip(1).collect();
        let record: Record =
            row.deserialize(Some(&headers))
                .map_err(|source| LoadError::Malformed {
                    path: path.to_path_buf(),
                    row: row_no,
                    source,
                })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(LoadError::NoRecords {
            path: path.to_path_buf(),
        });
    }

    Ok(Dataset::from_records(records))
}

/// Strip the index column and check the schema.
fn attribute_headers(raw: &StringRecord, path: &Path) -> Result<StringRecord, LoadError> {
    if raw.is_empty() {
        return Err(LoadError::MissingIndexColumn {
            path: path.to_path_buf(),
        });
    }
    let headers: StringRecord = raw.iter().skip(1).collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(headers)
}

// ---------------------------------------------------------------------------
// DatasetStore – load once, share for the process lifetime
// ---------------------------------------------------------------------------

/// Owns the dataset path and the single cached copy of its contents.
///
/// The first successful [`get_or_load`](Self::get_or_load) parses the file;
/// later calls hand out the same `Arc` without touching disk. A failed load
/// caches nothing. [`invalidate`](Self::invalidate) drops the cached copy so
/// the next call re-reads the file.
#[derive(Debug)]
pub struct DatasetStore {
    path: PathBuf,
    cached: OnceCell<Arc<Dataset>>,
}

impl DatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.cached.get().is_some()
    }

    pub fn get_or_load(&self) -> Result<Arc<Dataset>, LoadError> {
        if let Some(dataset) = self.cached.get() {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_csv(&self.path)?);
        log::info!(
            "Loaded {} records from {} (age groups {:?}, genders {:?})",
            dataset.len(),
            self.path.display(),
            dataset.options().age_groups,
            dataset.options().genders
        );
        Ok(Arc::clone(self.cached.get_or_init(|| dataset)))
    }

    /// Forget the cached dataset.
    #[cfg(test)]
    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            log::debug!("Dropped cached dataset for {}", self.path.display());
        }
    }
}
