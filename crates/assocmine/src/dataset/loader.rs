use crate::dataset::columns::ColumnFilter;
use crate::error::{AssocError, Result};
use crate::transaction::{Record, DEFAULT_ITEM_SEPARATOR};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads a headed CSV file into records. Values are kept raw; deciding
/// what counts as missing is left to the transaction builder.
///
/// Selected column names must not contain the item separator, otherwise
/// `a=b` + `c` and `a` + `b=c` would encode to the same item.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    path: PathBuf,
    delimiter: u8,
    item_separator: String,
    columns: ColumnFilter,
}

impl CsvLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
            item_separator: DEFAULT_ITEM_SEPARATOR.to_string(),
            columns: ColumnFilter::all(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_item_separator(mut self, separator: impl Into<String>) -> Self {
        self.item_separator = separator.into();
        self
    }

    pub fn with_columns(mut self, columns: ColumnFilter) -> Self {
        self.columns = columns;
        self
    }

    pub fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Err(AssocError::DatasetNotFound(self.path.clone()));
        }
        let file = std::fs::File::open(&self.path)?;
        let records = self.load_from_reader(file)?;
        log::info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Vec<Record>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let selected: Vec<(usize, String)> = reader
            .headers()?
            .iter()
            .enumerate()
            .filter(|(_, column)| self.columns.allows(column))
            .map(|(index, column)| (index, column.to_string()))
            .collect();
        if let Some((_, column)) = selected
            .iter()
            .find(|(_, column)| column.contains(self.item_separator.as_str()))
        {
            return Err(AssocError::AmbiguousColumn {
                column: column.clone(),
                separator: self.item_separator.clone(),
            });
        }
        log::debug!(
            "Using {} columns: {}",
            selected.len(),
            selected
                .iter()
                .map(|(_, column)| column.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut record = Record::new();
            for (index, column) in &selected {
                record.push(column.clone(), row.get(*index).map(str::to_string));
            }
            records.push(record);
        }

        Ok(records)
    }
}
