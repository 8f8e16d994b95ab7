//! Generic table widget state: key-column filtering, sorting, selection.
//!
//! Filtering toggles a per-row visibility flag and nothing else: rows are
//! never created, destroyed, or rewritten here. The match target is a single
//! configured key column, compared case-insensitively as a substring.

/// Sort key types for table columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Integer(i64),
    Float(f64),
    String(String),
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.partial_cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Trait for table row items.
pub trait TableRow: Clone {
    /// Stable identity of the row.
    fn id(&self) -> u64;

    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// Cell values as strings.
    fn cells(&self) -> Vec<String>;

    /// Sort key for the specified column.
    fn sort_key(&self, column: usize) -> SortKey;
}

/// State for one table widget. Each instance owns its rows, its key column
/// and its filter; instances on different tabs never interfere.
#[derive(Debug, Clone)]
pub struct TableState<T: TableRow> {
    /// All rows, in display order.
    pub items: Vec<T>,
    /// Visibility flag per row, parallel to `items`.
    visible: Vec<bool>,
    /// Column matched by the filter.
    pub key_column: usize,
    /// Current filter query.
    pub filter: Option<String>,
    /// Selected index within the visible view.
    pub selected: usize,
    /// Sort column index.
    pub sort_column: usize,
    /// Sort direction (true = ascending).
    pub sort_ascending: bool,
}

impl<T: TableRow> TableState<T> {
    pub fn new(key_column: usize) -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            key_column,
            filter: None,
            selected: 0,
            sort_column: 0,
            sort_ascending: true,
        }
    }

    /// Replaces the rows. New rows start visible, then the current filter is
    /// reapplied.
    pub fn update(&mut self, new_items: Vec<T>) {
        self.visible = vec![true; new_items.len()];
        self.items = new_items;
        self.apply_sort();
        self.apply_filter();
        self.clamp_selection();
    }

    /// Sets the filter query and recomputes visibility immediately.
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter;
        self.selected = 0;
        self.apply_filter();
    }

    /// Recomputes the visibility flags from the current query.
    ///
    /// The query is matched as a case-insensitive substring of the key
    /// column's text, untrimmed. A row without a key cell keeps its previous
    /// flag. The empty query matches everything, so re-running with the same
    /// query and unchanged rows is a no-op.
    fn apply_filter(&mut self) {
        let query = self
            .filter
            .as_deref()
            .unwrap_or("")
            .to_uppercase();
        for (item, shown) in self.items.iter().zip(self.visible.iter_mut()) {
            if let Some(cell) = item.cells().get(self.key_column) {
                *shown = cell.to_uppercase().contains(&query);
            }
        }
    }

    /// Rows currently shown, in display order.
    pub fn visible_items(&self) -> Vec<&T> {
        self.items
            .iter()
            .zip(self.visible.iter())
            .filter(|(_, shown)| **shown)
            .map(|(item, _)| item)
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.iter().filter(|shown| **shown).count()
    }

    /// The selected row of the visible view, if any.
    pub fn selected_item(&self) -> Option<&T> {
        self.visible_items().get(self.selected).copied()
    }

    /// Applies the current sort, keeping each visibility flag attached to
    /// its row.
    fn apply_sort(&mut self) {
        let col = self.sort_column;
        let asc = self.sort_ascending;

        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|&a, &b| {
            let key_a = self.items[a].sort_key(col);
            let key_b = self.items[b].sort_key(col);
            let cmp = key_a
                .partial_cmp(&key_b)
                .unwrap_or(std::cmp::Ordering::Equal);
            if asc { cmp } else { cmp.reverse() }
        });

        self.items = order.iter().map(|&i| self.items[i].clone()).collect();
        self.visible = order.iter().map(|&i| self.visible[i]).collect();
    }

    /// Cycles to next sort column.
    pub fn next_sort_column(&mut self) {
        let columns = T::headers().len();
        if columns > 0 {
            self.sort_column = (self.sort_column + 1) % columns;
            self.apply_sort();
        }
    }

    /// Toggles sort direction.
    pub fn toggle_sort_direction(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        self.apply_sort();
    }

    /// Moves selection up.
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves selection down.
    pub fn select_down(&mut self) {
        let max = self.visible_len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize) {
        let max = self.visible_len().saturating_sub(1);
        self.selected = (self.selected + page_size).min(max);
    }

    pub fn home(&mut self) {
        self.selected = 0;
    }

    pub fn end(&mut self) {
        self.selected = self.visible_len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct TestRow {
        id: u64,
        cells: Vec<String>,
    }

    impl TestRow {
        fn new(id: u64, cells: &[&str]) -> Self {
            Self {
                id,
                cells: cells.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl TableRow for TestRow {
        fn id(&self) -> u64 {
            self.id
        }

        fn headers() -> Vec<&'static str> {
            vec!["ID", "NAME"]
        }

        fn cells(&self) -> Vec<String> {
            self.cells.clone()
        }

        fn sort_key(&self, column: usize) -> SortKey {
            SortKey::String(self.cells.get(column).cloned().unwrap_or_default())
        }
    }

    fn table() -> TableState<TestRow> {
        let mut t = TableState::new(0);
        t.update(vec![
            TestRow::new(1, &["E001", "Jane"]),
            TestRow::new(2, &["E002", "Ruwan"]),
            TestRow::new(3, &["X900", "Amali"]),
        ]);
        t
    }

    fn shown_ids<T: TableRow>(t: &TableState<T>) -> Vec<u64> {
        t.visible_items().iter().map(|r| r.id()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_key_column() {
        let mut t = table();
        t.set_filter(Some("e00".to_string()));
        assert_eq!(shown_ids(&t), vec![1, 2]);

        t.set_filter(Some("X9".to_string()));
        assert_eq!(shown_ids(&t), vec![3]);

        // Matches the key column only, not other cells.
        t.set_filter(Some("Jane".to_string()));
        assert!(shown_ids(&t).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let mut t = table();
        t.set_filter(Some("E001".to_string()));
        let first = shown_ids(&t);
        t.set_filter(Some("E001".to_string()));
        assert_eq!(shown_ids(&t), first);
    }

    #[test]
    fn empty_query_shows_all_rows() {
        let mut t = table();
        t.set_filter(Some("ZZZ".to_string()));
        assert!(shown_ids(&t).is_empty());

        t.set_filter(Some(String::new()));
        assert_eq!(shown_ids(&t), vec![1, 2, 3]);

        t.set_filter(Some("ZZZ".to_string()));
        t.set_filter(None);
        assert_eq!(shown_ids(&t), vec![1, 2, 3]);
    }

    #[test]
    fn whitespace_query_filters_literally() {
        let mut t = TableState::new(0);
        t.update(vec![
            TestRow::new(1, &["A B", "x"]),
            TestRow::new(2, &["AB", "y"]),
        ]);
        t.set_filter(Some(" ".to_string()));
        assert_eq!(shown_ids(&t), vec![1]);
    }

    #[test]
    fn row_without_key_cell_keeps_prior_visibility() {
        let mut t = TableState::new(1);
        t.update(vec![
            TestRow::new(1, &["a", "match"]),
            TestRow::new(2, &["b"]), // no key cell
        ]);
        // Both start visible; the short row is untouched by filtering.
        t.set_filter(Some("NOPE".to_string()));
        assert_eq!(shown_ids(&t), vec![2]);

        // Still untouched once the query matches the other row again.
        t.set_filter(Some("match".to_string()));
        assert_eq!(shown_ids(&t), vec![1, 2]);
    }

    #[test]
    fn instances_do_not_interfere() {
        let mut employees = table();
        let mut claims: TableState<TestRow> = TableState::new(1);
        claims.update(vec![
            TestRow::new(10, &["c1", "Fuel"]),
            TestRow::new(11, &["c2", "OPD"]),
        ]);

        employees.set_filter(Some("E002".to_string()));
        claims.set_filter(Some("fu".to_string()));

        assert_eq!(shown_ids(&employees), vec![2]);
        assert_eq!(shown_ids(&claims), vec![10]);
    }

    #[test]
    fn sort_keeps_visibility_attached_to_rows() {
        let mut t = table();
        t.set_filter(Some("E00".to_string()));
        t.sort_ascending = false;
        t.toggle_sort_direction(); // back to ascending, resorts
        assert_eq!(shown_ids(&t), vec![1, 2]);

        t.toggle_sort_direction(); // descending
        assert_eq!(shown_ids(&t), vec![2, 1]);
    }

    #[test]
    fn update_reapplies_current_filter() {
        let mut t = table();
        t.set_filter(Some("E0".to_string()));
        t.update(vec![
            TestRow::new(4, &["E004", "Kasun"]),
            TestRow::new(5, &["Q777", "Nadee"]),
        ]);
        assert_eq!(shown_ids(&t), vec![4]);
    }

    #[test]
    fn selection_clamps_to_visible_view() {
        let mut t = table();
        t.selected = 2;
        t.set_filter(Some("E00".to_string()));
        assert_eq!(t.selected, 0);
        t.select_down();
        t.select_down();
        assert_eq!(t.selected, 1);
        assert_eq!(t.selected_item().map(|r| r.id()), Some(2));
    }
}
