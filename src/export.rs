use crate::error::{Error, Result};
use log::trace;
use sheet_core::TabularDataset;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// UTF-8 byte order mark. Spreadsheet tools need it to keep non-ASCII
/// text intact when opening the exported file.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Fixed download name used by the viewer.
pub const EXPORT_FILE_NAME: &str = "export.csv";

/// Writes the current view (filtered and sorted, all pages) as
/// BOM-prefixed CSV bytes. An empty view fails with
/// [`sheet_core::EmptyExport`] before anything is written.
pub fn write_csv<W: Write>(dataset: &TabularDataset, writer: &mut W) -> Result<()> {
    let csv = dataset.export_csv()?;
    writer.write_all(&UTF8_BOM).map_err(Error::io_no_path)?;
    writer.write_all(csv.as_bytes()).map_err(Error::io_no_path)?;
    Ok(())
}

/// Saves the view under [`EXPORT_FILE_NAME`] in `dir` and returns the
/// full path of the written file. An empty view is refused before the
/// file is created.
pub fn save_csv(dataset: &TabularDataset, dir: &Path) -> Result<PathBuf> {
    let csv = dataset.export_csv()?;
    let path = dir.join(EXPORT_FILE_NAME);
    trace!("exporting view to {}", path.display());
    let file = File::create(&path).map_err(|e| Error::io(e, &path))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&UTF8_BOM).map_err(|e| Error::io(e, &path))?;
    writer.write_all(csv.as_bytes()).map_err(|e| Error::io(e, &path))?;
    writer.flush().map_err(|e| Error::io(e, &path))?;
    Ok(path)
}
