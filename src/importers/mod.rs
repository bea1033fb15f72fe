mod csv;

pub use csv::CsvImporter;

use crate::error::{Error, Result};
use crate::workbook::Workbook;
use log::trace;
use sheet_core::CsvImportConfig;
use std::path::Path;

/// Turns a container on disk into named sheets of raw cells.
///
/// The crate ships a delimited-text importer; binary spreadsheet
/// containers (xlsx, ods, ...) are supplied by collaborators
/// implementing this trait and feeding the resulting [`Workbook`] to
/// the dataset.
pub trait SheetImporter {
    fn import(&mut self, path: &Path) -> Result<Workbook>;
}

/// Opens a file with the built-in importers, dispatching on the file
/// extension. Unknown extensions are rejected before any bytes are
/// read.
pub fn open_workbook(path: &Path, config: CsvImportConfig) -> Result<Workbook> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    trace!("open_workbook: {} (.{extension})", path.display());
    match extension.as_str() {
        "csv" | "tsv" | "txt" => CsvImporter::with_config(config).import(path),
        _ => Err(Error::unsupported(extension)),
    }
}
