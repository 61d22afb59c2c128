//! Mapping activated elements back to grid actions.

use termdom::{Element, Key, Modifiers};

use crate::events::{is_activation_key, Component, EventResult};
use crate::record::Record;

use super::DataGrid;

/// Something the user can do to a grid by activating one of its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// Header of the column with this key.
    Sort(String),
    /// The select-all checkbox.
    ToggleAll,
    /// Checkbox of the row at this display index.
    ToggleRow(usize),
}

impl GridAction {
    /// Id of the element that triggers this action in grid `grid_id`.
    pub fn target_id(&self, grid_id: &str) -> String {
        match self {
            GridAction::Sort(column) => format!("{grid_id}-sort-{column}"),
            GridAction::ToggleAll => format!("{grid_id}-select-all"),
            GridAction::ToggleRow(index) => format!("{grid_id}-row-{index}-select"),
        }
    }

    /// Inverse of [`target_id`](Self::target_id).
    pub fn parse(grid_id: &str, target: &str) -> Option<Self> {
        let rest = target.strip_prefix(grid_id)?.strip_prefix('-')?;
        if rest == "select-all" {
            return Some(GridAction::ToggleAll);
        }
        if let Some(column) = rest.strip_prefix("sort-") {
            return Some(GridAction::Sort(column.to_string()));
        }
        rest.strip_prefix("row-")?
            .strip_suffix("-select")?
            .parse()
            .ok()
            .map(GridAction::ToggleRow)
    }
}

impl<T: Record> DataGrid<T> {
    /// Perform `action` as if its element had been activated.
    pub fn dispatch(&mut self, action: GridAction) -> EventResult {
        match action {
            GridAction::Sort(column) => self.sort_by(&column),
            GridAction::ToggleAll => {
                let checked = !self.select_all_state().is_checked();
                self.toggle_all(checked)
            }
            GridAction::ToggleRow(display_index) => {
                let Some(&index) = self.display_order().get(display_index) else {
                    return EventResult::Ignored;
                };
                let key = self.row_key(&self.rows[index], index);
                let checked = !self.is_selected(&key);
                self.toggle_row(display_index, checked)
            }
        }
    }
}

impl<T: Record> Component for DataGrid<T> {
    fn element(&self) -> Element {
        self.render()
    }

    fn on_activate(&mut self, target: &str) -> EventResult {
        if self.loading {
            return EventResult::Ignored;
        }
        match GridAction::parse(&self.id, target) {
            Some(action) => self.dispatch(action),
            None => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        if is_activation_key(key, modifiers) {
            self.on_activate(target)
        } else {
            EventResult::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_ids_round_trip() {
        for action in [
            GridAction::Sort("created-at".to_string()),
            GridAction::ToggleAll,
            GridAction::ToggleRow(12),
        ] {
            let id = action.target_id("grid-3");
            assert_eq!(GridAction::parse("grid-3", &id), Some(action));
        }
    }

    #[test]
    fn foreign_ids_are_not_actions() {
        assert_eq!(GridAction::parse("grid-3", "grid-30-select-all"), None);
        assert_eq!(GridAction::parse("grid-3", "input-1"), None);
        assert_eq!(GridAction::parse("grid-3", "grid-3-row-x-select"), None);
    }
}
