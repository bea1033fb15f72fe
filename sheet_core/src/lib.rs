use serde::{Deserialize, Serialize};

pub mod dataset;
pub mod filter;
pub mod sort;

pub use dataset::{Stats, TabularDataset};
pub use filter::RowFilter;
pub use sort::{SortDirection, SortState};

/// Number of rows shown on one page of a view.
pub const PAGE_SIZE: usize = 50;

/// One record of a loaded sheet. Cells are aligned with the owning
/// dataset's column order; absent trailing cells are stored as `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Builds a row of exactly `width` cells: surplus raw cells are
    /// dropped, missing trailing cells become empty strings.
    pub fn sized(mut cells: Vec<String>, width: usize) -> Self {
        cells.truncate(width);
        cells.resize(width, String::new());
        Row { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).map(|s| s.as_str())
    }

    /// Cell by column name, resolved against the first matching column.
    pub fn get<'a>(&'a self, columns: &[String], name: &str) -> Option<&'a str> {
        columns
            .iter()
            .position(|c| c == name)
            .and_then(|idx| self.cell(idx))
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// Synthetic name substituted for a blank header cell (1-based position).
pub fn fallback_column_name(position: usize) -> String {
    format!("Column{position}")
}

#[derive(
    strum::EnumIter, strum::Display, PartialEq, Copy, Clone, Default, Serialize, Deserialize,
)]
pub enum Separator {
    #[default]
    Auto,
    Comma,
    Tab,
    Semicolon,
}

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct CsvImportConfig {
    pub separator: Separator,
    pub separator_u8: u8,
    pub skip_first_rows: usize,
    pub has_headers: bool,
}

impl Default for CsvImportConfig {
    fn default() -> Self {
        CsvImportConfig {
            separator: Default::default(),
            separator_u8: b',',
            skip_first_rows: 0,
            has_headers: true,
        }
    }
}

impl CsvImportConfig {
    pub fn separator(&self) -> u8 {
        self.separator_u8
    }

    pub fn skip_first_rows(&self) -> usize {
        self.skip_first_rows
    }

    pub fn has_headers(&self) -> bool {
        self.has_headers
    }
}

/// Export was requested while the current view holds no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("nothing to export: the current view is empty")]
pub struct EmptyExport;
