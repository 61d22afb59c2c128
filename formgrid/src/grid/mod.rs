//! DataGrid widget - a sortable, selectable table over caller records.
//!
//! The grid never reorders or edits the rows it is given. Sorting yields a
//! permutation of dataset positions, and selection is a set of [`RowKey`]s
//! projected back onto the dataset when reported.

mod column;
mod events;
mod render;

use std::collections::HashMap;

use termdom::CheckState;

pub use column::{CellRenderer, Column};
pub use events::GridAction;

use crate::error::GridError;
use crate::events::EventResult;
use crate::ids::{GlobalIds, IdSource};
use crate::options::{GridOptions, DEFAULT_EMPTY_MESSAGE};
use crate::record::{KeyPolicy, KeySource, Record, RowKey};
use crate::selection::Selection;
use crate::sort::{sort_indices, SortDirection, SortState};
use crate::theme::Theme;

/// Called with the selected records, in dataset order.
pub type SelectionCallback<T> = Box<dyn FnMut(&[&T])>;

/// Called with the new sort field and direction.
pub type SortCallback<F> = Box<dyn FnMut(F, SortDirection)>;

/// Which of the three mutually exclusive views the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Empty,
    Populated,
}

pub struct DataGrid<T: Record> {
    id: String,
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    loading: bool,
    selectable: bool,
    multi_select: bool,
    empty_message: String,
    class: Option<String>,
    key_source: KeySource<T>,
    key_policy: KeyPolicy,
    external_sort_only: bool,
    theme: Theme,

    sort: SortState<T::Field>,
    selection: Selection,

    on_selection_change: Option<SelectionCallback<T>>,
    on_sort: Option<SortCallback<T::Field>>,
}

impl<T: Record> DataGrid<T> {
    /// Create an empty grid with the given columns.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self::with_element_id(GlobalIds.next_id("grid"), columns)
    }

    fn with_element_id(id: String, columns: Vec<Column<T>>) -> Self {
        Self {
            id,
            rows: Vec::new(),
            columns,
            loading: false,
            selectable: false,
            multi_select: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            class: None,
            key_source: KeySource::default(),
            key_policy: KeyPolicy::default(),
            external_sort_only: false,
            theme: Theme::default(),
            sort: SortState::default(),
            selection: Selection::new(),
            on_selection_change: None,
            on_sort: None,
        }
    }

    /// Create a grid configured from plain options.
    pub fn from_options(columns: Vec<Column<T>>, options: GridOptions) -> Self {
        Self::from_options_with_ids(columns, options, &mut GlobalIds)
    }

    /// Like [`from_options`](Self::from_options), drawing an id from `ids`
    /// only when the options carry none.
    pub fn from_options_with_ids(
        columns: Vec<Column<T>>,
        options: GridOptions,
        ids: &mut dyn IdSource,
    ) -> Self {
        let id = options.id.unwrap_or_else(|| ids.next_id("grid"));
        let mut grid = Self::with_element_id(id, columns);
        grid.loading = options.loading;
        grid.selectable = options.selectable;
        grid.multi_select = options.multi_select;
        grid.empty_message = options.empty_message;
        grid.class = options.class;
        grid.key_policy = options.key_policy;
        grid.external_sort_only = options.external_sort_only;
        grid
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// Set the initial rows. Keys are not validated here; use
    /// [`set_rows`](Self::set_rows) for that.
    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Draw the grid id from `ids` instead of the process-wide counter.
    pub fn with_ids(mut self, ids: &mut dyn IdSource) -> Self {
        self.id = ids.next_id("grid");
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn key_source(mut self, source: KeySource<T>) -> Self {
        self.key_source = source;
        self
    }

    /// Shorthand for `key_source(KeySource::custom(f))`.
    pub fn row_key_fn(self, f: impl Fn(&T) -> RowKey + 'static) -> Self {
        self.key_source(KeySource::custom(f))
    }

    pub fn key_policy(mut self, policy: KeyPolicy) -> Self {
        self.key_policy = policy;
        self
    }

    pub fn external_sort_only(mut self, external: bool) -> Self {
        self.external_sort_only = external;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn on_selection_change(mut self, callback: impl FnMut(&[&T]) + 'static) -> Self {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    pub fn on_sort(mut self, callback: impl FnMut(T::Field, SortDirection) + 'static) -> Self {
        self.on_sort = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rows in the order they were supplied.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Replace the dataset.
    ///
    /// Under [`KeyPolicy::Strict`] a dataset with a missing or duplicate key
    /// is rejected and the previous rows stay in place. Otherwise problems
    /// are logged and the rows are accepted. The selection is kept as is,
    /// including keys that no longer match any row.
    pub fn set_rows(&mut self, rows: Vec<T>) -> Result<(), GridError> {
        if let Err(err) = check_keys(&self.key_source, &rows) {
            match self.key_policy {
                KeyPolicy::Strict => {
                    log::debug!("[grid] {} rejected dataset: {err}", self.id);
                    return Err(err);
                }
                KeyPolicy::BestEffort => {
                    if matches!(err, GridError::DuplicateKey { .. }) {
                        log::warn!("[grid] {}: {err}", self.id);
                    }
                }
            }
        }
        log::debug!("[grid] {} now has {} rows", self.id, rows.len());
        self.rows = rows;
        Ok(())
    }

    /// Check that every row has its own, unique key.
    pub fn validate_keys(&self) -> Result<(), GridError> {
        check_keys(&self.key_source, &self.rows)
    }

    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    /// Switching to single-select drops a selection of more than one row.
    pub fn set_multi_select(&mut self, multi_select: bool) {
        self.multi_select = multi_select;
        if !multi_select && self.selection.len() > 1 {
            log::debug!("[grid] {} single-select, clearing selection", self.id);
            self.selection.clear();
            self.notify_selection();
        }
    }

    pub fn set_empty_message(&mut self, message: impl Into<String>) {
        self.empty_message = message.into();
    }

    pub fn render_state(&self) -> RenderState {
        if self.loading {
            RenderState::Loading
        } else if self.rows.is_empty() {
            RenderState::Empty
        } else {
            RenderState::Populated
        }
    }

    // -------------------------------------------------------------------------
    // Keys
    // -------------------------------------------------------------------------

    /// Key of `record`, which sits at `index` in the dataset.
    pub fn row_key(&self, record: &T, index: usize) -> RowKey {
        self.key_source.key(record, index)
    }

    fn keys_in_dataset_order(&self) -> impl Iterator<Item = RowKey> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.key_source.key(row, i))
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    pub fn sort_state(&self) -> SortState<T::Field> {
        self.sort
    }

    /// Activate the header of `column_key`.
    ///
    /// Non-sortable and unknown columns are ignored. Otherwise the sort state
    /// advances and the sort callback hears about it.
    pub fn sort_by(&mut self, column_key: &str) -> EventResult {
        let Some(column) = self.columns.iter().find(|c| c.key == column_key) else {
            log::debug!("[grid] {} has no column '{column_key}'", self.id);
            return EventResult::Ignored;
        };
        if !column.sortable {
            return EventResult::Ignored;
        }

        let field = column.field;
        self.apply_sort(self.sort.cycle(field));
        EventResult::Consumed
    }

    /// Sort by `column_key` in a given direction without going through the
    /// header cycle.
    pub fn set_sort(&mut self, column_key: &str, direction: SortDirection) -> Result<(), GridError> {
        let column = self
            .columns
            .iter()
            .find(|c| c.key == column_key)
            .ok_or_else(|| GridError::UnknownColumn(column_key.to_string()))?;
        if !column.sortable {
            return Err(GridError::NotSortable(column_key.to_string()));
        }
        let field = column.field;
        self.apply_sort(SortState::new(field, direction));
        Ok(())
    }

    /// Back to supplied order. The sort callback is not called.
    pub fn clear_sort(&mut self) {
        self.sort = SortState::default();
    }

    fn apply_sort(&mut self, state: SortState<T::Field>) {
        self.sort = state;
        let Some((field, direction)) = state.active() else {
            return;
        };
        log::debug!("[grid] {} sort {field:?} {direction:?}", self.id);
        if let Some(callback) = self.on_sort.as_mut() {
            callback(field, direction);
        }
    }

    /// Dataset positions in display order.
    pub fn display_order(&self) -> Vec<usize> {
        match self.sort.active() {
            Some((field, direction)) if !self.external_sort_only => {
                sort_indices(&self.rows, field, direction)
            }
            _ => (0..self.rows.len()).collect(),
        }
    }

    /// Rows in display order.
    pub fn sorted_rows(&self) -> Vec<&T> {
        self.display_order()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Check or uncheck the row shown at `display_index`.
    pub fn toggle_row(&mut self, display_index: usize, checked: bool) -> EventResult {
        if !self.selectable {
            return EventResult::Ignored;
        }
        let Some(&index) = self.display_order().get(display_index) else {
            return EventResult::Ignored;
        };

        let key = self.row_key(&self.rows[index], index);
        log::debug!("[grid] {} row {key} checked={checked}", self.id);
        self.selection.toggle(key, checked, self.multi_select);
        self.notify_selection();
        EventResult::Consumed
    }

    /// Select every row, or none. Only available in multi-select mode.
    pub fn toggle_all(&mut self, checked: bool) -> EventResult {
        if !self.selectable || !self.multi_select {
            return EventResult::Ignored;
        }

        if checked {
            let keys: Vec<RowKey> = self.keys_in_dataset_order().collect();
            self.selection.select_all(keys);
        } else {
            self.selection.clear();
        }
        log::debug!("[grid] {} select all={checked}", self.id);
        self.notify_selection();
        EventResult::Consumed
    }

    /// Deselect everything. The selection callback fires if anything was
    /// selected.
    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.notify_selection();
        }
    }

    /// Selected keys, sorted. May include keys of rows no longer present.
    pub fn selected_keys(&self) -> Vec<RowKey> {
        self.selection.keys()
    }

    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selection.contains(key)
    }

    /// Selected records in dataset order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.selected_indices()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    /// Dataset positions of the selected rows.
    fn selected_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(i, row)| self.selection.contains(&self.key_source.key(row, *i)))
            .map(|(i, _)| i)
            .collect()
    }

    /// State of the select-all checkbox.
    pub fn select_all_state(&self) -> CheckState {
        self.selection.check_state(self.rows.len())
    }

    fn notify_selection(&mut self) {
        if self.on_selection_change.is_none() {
            return;
        }
        let indices = self.selected_indices();
        let selected: Vec<&T> = indices.iter().map(|&i| &self.rows[i]).collect();
        if let Some(callback) = self.on_selection_change.as_mut() {
            callback(&selected);
        }
    }
}

/// Every row must have its own key, and no two rows may share one.
fn check_keys<T: Record>(source: &KeySource<T>, rows: &[T]) -> Result<(), GridError> {
    let mut seen: HashMap<RowKey, usize> = HashMap::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let key = source
            .exact_key(row)
            .ok_or(GridError::MissingKey { index })?;
        if let Some(&first) = seen.get(&key) {
            return Err(GridError::DuplicateKey {
                key,
                first,
                second: index,
            });
        }
        seen.insert(key, index);
    }
    Ok(())
}
