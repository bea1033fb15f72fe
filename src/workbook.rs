use indexmap::IndexMap;
use log::warn;
use sheet_core::TabularDataset;

/// Raw rows of one sheet, as handed over by a file parser.
pub type RawRows = Vec<Vec<String>>;

/// A parsed spreadsheet container: named sheets in file order.
///
/// Importers produce one of these; the hosting UI then loads a sheet
/// into a [`TabularDataset`] and switches sheets by loading another.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: IndexMap<String, RawRows>,
}

impl Workbook {
    pub fn new() -> Self {
        Workbook::default()
    }

    pub fn insert_sheet(&mut self, name: impl Into<String>, rows: RawRows) {
        self.sheets.insert(name.into(), rows);
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sheets.keys().map(|name| name.as_str())
    }

    pub fn sheet(&self, name: &str) -> Option<&RawRows> {
        self.sheets.get(name)
    }

    pub fn first_sheet(&self) -> Option<(&str, &RawRows)> {
        self.sheets
            .first()
            .map(|(name, rows)| (name.as_str(), rows))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Replaces the dataset's contents with the named sheet.
    /// Returns false (and leaves the dataset untouched) when no sheet
    /// has that name.
    pub fn load_sheet(
        &self,
        name: &str,
        dataset: &mut TabularDataset,
        first_row_is_header: bool,
    ) -> bool {
        let Some(rows) = self.sheet(name) else {
            warn!("no sheet named {name:?}");
            return false;
        };
        dataset.load(rows.clone(), first_row_is_header);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&[&str]]) -> RawRows {
        values
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn sheets_keep_insertion_order() {
        let mut workbook = Workbook::new();
        workbook.insert_sheet("Zebra", rows(&[&["A"]]));
        workbook.insert_sheet("Alpha", rows(&[&["B"]]));
        let names: Vec<_> = workbook.sheet_names().collect();
        assert_eq!(names, ["Zebra", "Alpha"]);
        assert_eq!(workbook.first_sheet().unwrap().0, "Zebra");
    }

    #[test]
    fn load_sheet_replaces_the_dataset() {
        let mut workbook = Workbook::new();
        workbook.insert_sheet("Data", rows(&[&["Name"], &["alice"], &["bob"]]));
        let mut dataset = TabularDataset::new();
        assert!(workbook.load_sheet("Data", &mut dataset, true));
        assert_eq!(dataset.stats().total, 2);
    }

    #[test]
    fn loading_a_missing_sheet_is_a_noop() {
        let workbook = Workbook::new();
        let mut dataset = TabularDataset::new();
        assert!(!workbook.load_sheet("Nope", &mut dataset, true));
        assert!(dataset.is_empty());
    }
}
