use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Active sort column and direction of a view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Selecting the active column again flips direction; a new column
    /// resets to ascending.
    pub fn toggle(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.direction = self.direction.flip();
        } else {
            self.column = Some(column.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn clear(&mut self) {
        *self = SortState::default();
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }
}

/// Precomputed comparison key for one cell.
///
/// A pair of cells compares numerically only when both sides parse as a
/// finite number; any other pair falls back to the collated text key.
#[derive(Debug, Clone)]
pub struct SortKey {
    number: Option<f64>,
    collated: String,
    raw: String,
}

impl SortKey {
    pub fn new(cell: &str) -> Self {
        SortKey {
            number: parse_number(cell),
            collated: collation_key(cell),
            raw: cell.to_string(),
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.number, other.number) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => self
                .collated
                .cmp(&other.collated)
                .then_with(|| self.raw.cmp(&other.raw)),
        }
    }
}

/// Compare two cell values directly. Convenience over [`SortKey`] for
/// one-off comparisons.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    SortKey::new(a).compare(&SortKey::new(b))
}

fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

// Approximates language-sensitive collation: compatibility-normalized,
// case-folded, with raw byte order as the final tiebreak so the total
// order stays deterministic.
fn collation_key(cell: &str) -> String {
    cell.nfkc().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_direction_on_same_column() {
        let mut state = SortState::default();
        state.toggle("Qty");
        assert_eq!(state.column.as_deref(), Some("Qty"));
        assert_eq!(state.direction, SortDirection::Ascending);
        state.toggle("Qty");
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle("Qty");
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_resets_to_ascending_on_new_column() {
        let mut state = SortState::default();
        state.toggle("Qty");
        state.toggle("Qty");
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle("Name");
        assert_eq!(state.column.as_deref(), Some("Name"));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn numeric_pairs_compare_numerically() {
        assert_eq!(compare_cells("2", "10"), Ordering::Less);
        assert_eq!(compare_cells("10", "2"), Ordering::Greater);
        assert_eq!(compare_cells(" 3.5 ", "3.50"), Ordering::Equal);
    }

    #[test]
    fn mixed_pairs_fall_back_to_text() {
        // "10" vs "a": only one side is numeric, so text order applies.
        assert_eq!(compare_cells("10", "a"), Ordering::Less);
        assert_eq!(compare_cells("b", "10"), Ordering::Greater);
    }

    #[test]
    fn text_comparison_folds_case() {
        assert_eq!(compare_cells("apple", "Apple"), Ordering::Greater);
        assert_eq!(compare_cells("Apple", "banana"), Ordering::Less);
        assert_eq!(compare_cells("BANANA", "apple"), Ordering::Greater);
    }

    #[test]
    fn empty_and_nan_cells_are_not_numbers() {
        assert_eq!(compare_cells("", "0"), Ordering::Less);
        assert_eq!(compare_cells("NaN", "NaN"), Ordering::Equal);
        assert_eq!(compare_cells("nan", "1"), Ordering::Greater);
    }

    #[test]
    fn full_width_digits_collate_with_ascii() {
        // NFKC maps full-width "１０" to "10".
        assert_eq!(compare_cells("\u{ff11}\u{ff10}", "10x"), Ordering::Less);
    }
}
