//! In-memory dataset of one loaded sheet and its filtered/sorted view.

use itertools::Itertools;

use crate::filter::RowFilter;
use crate::sort::{SortKey, SortState};
use crate::{EmptyExport, PAGE_SIZE, Row, fallback_column_name};

/// Aggregate row counts for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Rows in the loaded dataset.
    pub total: usize,
    /// Rows surviving the current filter.
    pub filtered: usize,
}

/// Rows of one sheet plus the view state a table UI drives: filter term,
/// sort column/direction and a 1-based page cursor.
///
/// The view is a vector of dataset indices, recomputed as
/// `sort(filter(dataset))` whenever the filter or sort changes; the
/// dataset itself only changes through a full [`TabularDataset::load`].
#[derive(Debug, Clone)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Row>,
    view: Vec<usize>,
    filter: RowFilter,
    sort: SortState,
    current_page: usize,
}

impl Default for TabularDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl TabularDataset {
    pub fn new() -> Self {
        TabularDataset {
            columns: Vec::new(),
            rows: Vec::new(),
            view: Vec::new(),
            filter: RowFilter::default(),
            sort: SortState::default(),
            current_page: 1,
        }
    }

    /// Replaces the dataset with freshly parsed raw rows.
    ///
    /// With `first_row_is_header`, leading fully-blank rows are skipped
    /// and the first remaining row names the columns; a blank header
    /// cell gets a synthetic `Column<N>` name. Without a header row,
    /// every row is data and columns are synthesized up to the widest
    /// row. Data rows are padded/truncated to the column count. Empty
    /// input yields an empty dataset, not an error.
    ///
    /// Filter, sort and page state are reset.
    pub fn load(&mut self, raw_rows: Vec<Vec<String>>, first_row_is_header: bool) {
        self.columns.clear();
        self.rows.clear();
        self.filter = RowFilter::default();
        self.sort = SortState::default();

        if first_row_is_header {
            let mut raw = raw_rows
                .into_iter()
                .skip_while(|row| row.iter().all(|c| c.is_empty()));
            if let Some(header) = raw.next() {
                self.columns = header
                    .into_iter()
                    .enumerate()
                    .map(|(idx, name)| {
                        if name.is_empty() {
                            fallback_column_name(idx + 1)
                        } else {
                            name
                        }
                    })
                    .collect();
                let width = self.columns.len();
                self.rows = raw.map(|cells| Row::sized(cells, width)).collect();
            }
        } else {
            let width = raw_rows.iter().map(|row| row.len()).max().unwrap_or(0);
            self.columns = (1..=width).map(fallback_column_name).collect();
            self.rows = raw_rows
                .into_iter()
                .map(|cells| Row::sized(cells, width))
                .collect();
        }

        self.rebuild_view();
    }

    /// Keeps rows where any cell contains `term`, case-insensitively.
    /// The active sort persists; the page cursor resets to 1.
    ///
    /// Runs on every call. Callers reacting to keystrokes should
    /// debounce upstream.
    pub fn filter(&mut self, term: &str) {
        self.filter = RowFilter::new(term);
        self.rebuild_view();
    }

    /// Sorts the view by `column`, toggling direction when the column is
    /// already active. A name that matches no column is ignored.
    pub fn sort(&mut self, column: &str) {
        if !self.columns.iter().any(|c| c == column) {
            return;
        }
        self.sort.toggle(column);
        self.rebuild_view();
    }

    /// Clamps `page` into `[1, page_count]`; an out-of-range request
    /// lands on the nearest valid page and is never an error.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count().max(1));
    }

    /// Moves the page cursor by `delta`, clamped at both ends.
    pub fn page_delta(&mut self, delta: isize) {
        self.set_page(self.current_page.saturating_add_signed(delta));
    }

    /// Rows of the current page, in view order. Empty when the view is.
    pub fn current_page_rows(&self) -> impl Iterator<Item = &Row> {
        let start = (self.current_page - 1) * PAGE_SIZE;
        self.view
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|&idx| &self.rows[idx])
    }

    /// All rows of the view (filtered and sorted), not just the page.
    pub fn view_rows(&self) -> impl Iterator<Item = &Row> {
        self.view.iter().map(|&idx| &self.rows[idx])
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.rows.len(),
            filtered: self.view.len(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn filter_term(&self) -> &str {
        self.filter.term()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.view.len().div_ceil(PAGE_SIZE)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop all rows and columns, returning to the unloaded state.
    pub fn clear(&mut self) {
        self.load(Vec::new(), true);
    }

    /// Serializes the full view (not just the current page) as CSV:
    /// a raw header line, then one line per row.
    ///
    /// Cell encoding is deliberately not RFC 4180: embedded quotes are
    /// always doubled, but only a comma triggers wrapping the cell in
    /// quotes, and newlines never do. Consumers of the viewer's exports
    /// expect this exact shape.
    ///
    /// The string carries no byte order mark; byte-oriented sinks
    /// prepend one.
    pub fn export_csv(&self) -> Result<String, EmptyExport> {
        if self.view.is_empty() {
            return Err(EmptyExport);
        }
        let header = self.columns.iter().join(",");
        let body = self
            .view_rows()
            .map(|row| row.cells().iter().map(|cell| encode_cell(cell)).join(","));
        Ok(std::iter::once(header).chain(body).join("\n"))
    }

    // View derivation: filter in dataset order, then one stable sort by
    // the active column. Page cursor always restarts at 1.
    fn rebuild_view(&mut self) {
        self.view = (0..self.rows.len())
            .filter(|&idx| self.filter.matches(&self.rows[idx]))
            .collect();
        self.apply_sort();
        self.current_page = 1;
    }

    fn apply_sort(&mut self) {
        let Some(column) = self.sort.column.as_deref() else {
            return;
        };
        let Some(col_idx) = self.columns.iter().position(|c| c == column) else {
            return;
        };
        let direction = self.sort.direction;
        let mut keyed: Vec<(usize, SortKey)> = self
            .view
            .iter()
            .map(|&idx| {
                let cell = self.rows[idx].cell(col_idx).unwrap_or("");
                (idx, SortKey::new(cell))
            })
            .collect();
        keyed.sort_by(|(_, a), (_, b)| direction.apply(a.compare(b)));
        self.view = keyed.into_iter().map(|(idx, _)| idx).collect();
    }
}

fn encode_cell(cell: &str) -> String {
    let escaped = cell.replace('"', "\"\"");
    if escaped.contains(',') {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}
