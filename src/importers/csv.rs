use super::SheetImporter;
use crate::error::{Error, Result};
use crate::util::detect_encoding;
use crate::workbook::{RawRows, Workbook};
use encoding_rs_io::DecodeReaderBytesBuilder;
use log::{trace, warn};
use sheet_core::{CsvImportConfig, Separator};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

// How much of the file the separator and encoding sniffers look at.
const SNIFF_LIMIT: usize = 1024 * 1024;

/// Importer for delimited text files (csv, tsv, txt).
///
/// The separator can be fixed or auto-detected by counting candidate
/// bytes; the text encoding is always detected and decoded on the fly,
/// so Shift_JIS or Windows-125x exports from other tools load as-is.
pub struct CsvImporter {
    config: CsvImportConfig,
}

impl CsvImporter {
    pub fn new() -> Self {
        CsvImporter {
            config: CsvImportConfig::default(),
        }
    }

    pub fn with_config(config: CsvImportConfig) -> Self {
        CsvImporter { config }
    }

    pub fn set_separator(&mut self, separator: Separator) {
        self.config.separator = separator;
    }

    pub fn skip_rows_on_load(&mut self, count: usize) {
        self.config.skip_first_rows = count;
    }

    pub fn config(&self) -> &CsvImportConfig {
        &self.config
    }

    fn resolve_separator<R: Read + Seek>(
        &self,
        rdr: &mut BufReader<R>,
    ) -> std::io::Result<u8> {
        Ok(match self.config.separator {
            Separator::Auto => {
                rdr.seek(SeekFrom::Start(0))?;
                let mut counts: [(usize, u8); 3] = [(0, b','), (0, b'\t'), (0, b';')];
                for b in rdr.by_ref().bytes().take(SNIFF_LIMIT) {
                    let Ok(b) = b else {
                        break;
                    };
                    match b {
                        b',' => counts[0].0 += 1,
                        b'\t' => counts[1].0 += 1,
                        b';' => counts[2].0 += 1,
                        _ => {}
                    }
                }
                counts.sort_by(|a, b| a.0.cmp(&b.0));
                if counts[2].0 == 0 {
                    warn!("no separator candidate found, assuming comma");
                    b','
                } else {
                    counts[2].1
                }
            }
            Separator::Comma => b',',
            Separator::Tab => b'\t',
            Separator::Semicolon => b';',
        })
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        CsvImporter::new()
    }
}

impl SheetImporter for CsvImporter {
    fn import(&mut self, path: &Path) -> Result<Workbook> {
        trace!("CsvImporter: loading {}", path.display());

        let file = File::open(path).map_err(|e| Error::io(e, path))?;
        let mut rdr = BufReader::new(file);

        let separator = self.resolve_separator(&mut rdr).map_err(|e| Error::io(e, path))?;
        self.config.separator_u8 = separator;

        let encoding =
            detect_encoding(&mut rdr, Some(SNIFF_LIMIT)).map_err(|e| Error::io(e, path))?;
        rdr.seek(SeekFrom::Start(0)).map_err(|e| Error::io(e, path))?;
        // A BOM is definitive and must not leak into the first cell, so
        // it overrides the sniffed encoding and gets stripped.
        let decoded = DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding))
            .bom_override(true)
            .strip_bom(true)
            .build(rdr);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(separator)
            .has_headers(false) // the header row is interpreted at dataset load
            .flexible(true)
            .from_reader(decoded);

        let mut rows: RawRows = Vec::new();
        let mut records = reader.records();
        for _ in 0..self.config.skip_first_rows {
            records.next();
        }
        for (row_idx, record) in records.enumerate() {
            let record = record.map_err(|e| {
                Error::unreadable(
                    path,
                    format!(
                        "CSV error at line {}: {e}",
                        row_idx + 1 + self.config.skip_first_rows
                    ),
                )
            })?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Sheet1".to_string());
        let mut workbook = Workbook::new();
        workbook.insert_sheet(name, rows);
        Ok(workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str, bytes: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        (dir, path)
    }

    fn imported(path: &Path) -> RawRows {
        let mut importer = CsvImporter::new();
        let workbook = importer.import(path).unwrap();
        workbook.first_sheet().unwrap().1.clone()
    }

    #[test]
    fn imports_comma_separated_rows() {
        let (_dir, path) = fixture("data.csv", b"Name,Qty\nalice,5\nbob,3\n");
        let rows = imported(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Name", "Qty"]);
        assert_eq!(rows[2], ["bob", "3"]);
    }

    #[test]
    fn sheet_is_named_after_the_file_stem() {
        let (_dir, path) = fixture("inventory.csv", b"A\n1\n");
        let mut importer = CsvImporter::new();
        let workbook = importer.import(&path).unwrap();
        assert_eq!(workbook.sheet_names().collect::<Vec<_>>(), ["inventory"]);
    }

    #[test]
    fn auto_detects_semicolons_and_tabs() {
        let (_dir, path) = fixture("semi.csv", b"a;b\n1;2\n3;4\n");
        assert_eq!(imported(&path)[0], ["a", "b"]);

        let (_dir, path) = fixture("tabbed.tsv", b"a\tb\n1\t2\n");
        assert_eq!(imported(&path)[1], ["1", "2"]);
    }

    #[test]
    fn fixed_separator_overrides_detection() {
        let (_dir, path) = fixture("odd.csv", b"a;b,c\n");
        let mut importer = CsvImporter::new();
        importer.set_separator(Separator::Semicolon);
        let workbook = importer.import(&path).unwrap();
        let rows = workbook.first_sheet().unwrap().1;
        assert_eq!(rows[0], ["a", "b,c"]);
    }

    #[test]
    fn skips_leading_junk_rows() {
        let (_dir, path) = fixture("junk.csv", b"generated by tool\nexported 2024-05-01\nName,Qty\nalice,5\n");
        let mut importer = CsvImporter::new();
        importer.skip_rows_on_load(2);
        let workbook = importer.import(&path).unwrap();
        let rows = workbook.first_sheet().unwrap().1;
        assert_eq!(rows[0], ["Name", "Qty"]);
    }

    #[test]
    fn ragged_rows_survive_unpadded() {
        let (_dir, path) = fixture("ragged.csv", b"A,B,C\nonly-one\nx,y\n");
        let rows = imported(&path);
        assert_eq!(rows[1], ["only-one"]);
        assert_eq!(rows[2], ["x", "y"]);
    }

    #[test]
    fn decodes_shift_jis_files() {
        let text = "名前,数量\n東京駅,五\n大阪城,三\n京都御所,八\n名古屋港,二\n横浜中華街,九\n";
        let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(text);
        let (_dir, path) = fixture("jp.csv", &encoded);
        let rows = imported(&path);
        assert_eq!(rows[0], ["名前", "数量"]);
        assert_eq!(rows[1], ["東京駅", "五"]);
    }

    #[test]
    fn utf8_bom_is_not_part_of_the_first_cell() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"Name,Qty\nalice,5\n");
        let (_dir, path) = fixture("bom.csv", &bytes);
        let rows = imported(&path);
        assert_eq!(rows[0][0], "Name");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut importer = CsvImporter::new();
        let err = importer.import(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn empty_file_imports_an_empty_sheet() {
        let (_dir, path) = fixture("empty.csv", b"");
        let rows = imported(&path);
        assert!(rows.is_empty());
    }
}
