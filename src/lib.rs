//! Headless core of a spreadsheet viewer: import a file into raw
//! sheets, load one into a [`TabularDataset`], then filter, sort and
//! paginate the view and export it as CSV.

pub mod debounce;
pub mod error;
pub mod export;
pub mod importers;
pub mod util;
pub mod workbook;

pub use error::{Error, Result};
pub use importers::{CsvImporter, SheetImporter, open_workbook};
pub use workbook::{RawRows, Workbook};

pub use sheet_core;
pub use sheet_core::{Stats, TabularDataset};
