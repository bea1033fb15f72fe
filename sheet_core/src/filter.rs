use crate::Row;
use serde::{Deserialize, Serialize};

/// Case-insensitive substring filter over every cell of a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    // Lower-cased once at construction, matched against lower-cased cells.
    term: String,
}

impl RowFilter {
    pub fn new(term: &str) -> Self {
        RowFilter {
            term: term.to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// An empty term retains every row.
    pub fn matches(&self, row: &Row) -> bool {
        if self.term.is_empty() {
            return true;
        }
        row.cells()
            .iter()
            .any(|cell| cell.to_lowercase().contains(&self.term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row::sized(cells.iter().map(|c| c.to_string()).collect(), cells.len())
    }

    #[test]
    fn empty_term_matches_everything() {
        let filter = RowFilter::new("");
        assert!(filter.matches(&row(&["a", "b"])));
        assert!(filter.matches(&row(&[])));
    }

    #[test]
    fn match_is_case_insensitive_on_both_sides() {
        let filter = RowFilter::new("TOKYO");
        assert!(filter.matches(&row(&["1", "tokyo station"])));
        let filter = RowFilter::new("tokyo");
        assert!(filter.matches(&row(&["1", "Tokyo Station"])));
    }

    #[test]
    fn substring_must_appear_in_some_cell() {
        let filter = RowFilter::new("yo st");
        assert!(filter.matches(&row(&["Tokyo Station"])));
        assert!(!filter.matches(&row(&["Tokyo", "Station"])));
    }
}
