use crate::error::{LoaderError, MappingError};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One row of the cemetery table, keyed by column name.
///
/// Values are trimmed and missing cells are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Returns the value of `column`.
    ///
    /// A column that is not part of the table is a mismatch between the mapping and the input
    /// and results in [`MappingError::MissingColumn`].
    pub fn value(&self, column: &str) -> Result<&str, MappingError> {
        self.get(column)
            .ok_or_else(|| MappingError::MissingColumn(column.to_owned()))
    }

    /// Returns the value of `column`, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

/// The cemetery table, fully buffered in file order.
#[derive(Clone, Debug, Default)]
pub struct CemeteryTable {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl CemeteryTable {
    /// The delimiter of the cemetery export.
    pub const DEFAULT_DELIMITER: u8 = b';';

    /// Reads a delimited table with a header row.
    ///
    /// Headers and cells are trimmed, so whitespace-only cells become empty strings.
    pub fn from_reader(reader: impl Read, delimiter: u8) -> Result<Self, LoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(b'"')
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(
                headers
                    .iter()
                    .map(String::as_str)
                    .zip(record.iter())
                    .collect::<Row>(),
            );
        }
        Ok(Self { headers, rows })
    }

    /// Reads the table from a file.
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self, LoaderError> {
        let table = Self::from_reader(File::open(path)?, delimiter)?;
        info!("Data read from CSV {}", path.display());
        Ok(table)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
