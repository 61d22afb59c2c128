//! Row selection state.
//!
//! Selection is tracked by [`RowKey`] so it survives sorting. Every change
//! builds the next key set and swaps it in.

use std::collections::HashSet;

use termdom::CheckState;

use crate::record::RowKey;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<RowKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// All selected keys (sorted for deterministic ordering).
    pub fn keys(&self) -> Vec<RowKey> {
        let mut keys: Vec<_> = self.selected.iter().cloned().collect();
        keys.sort();
        keys
    }

    pub fn contains(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check or uncheck one row.
    ///
    /// With `multi` off, checking a row leaves it as the only selected key.
    /// Unchecking only ever removes `key`.
    pub fn toggle(&mut self, key: RowKey, checked: bool, multi: bool) {
        let mut next = if checked && !multi {
            HashSet::new()
        } else {
            self.selected.clone()
        };
        if checked {
            next.insert(key);
        } else {
            next.remove(&key);
        }
        self.selected = next;
    }

    /// Replace the selection with `keys`.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = RowKey>) {
        self.selected = keys.into_iter().collect();
    }

    /// Clear all selection.
    /// Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected = HashSet::new();
        had_any
    }

    /// Header checkbox state for a dataset of `row_count` rows.
    pub fn check_state(&self, row_count: usize) -> CheckState {
        let len = self.selected.len();
        if row_count > 0 && len == row_count {
            CheckState::Checked
        } else if len > 0 && len < row_count {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mode_keeps_one_key() {
        let mut selection = Selection::new();
        selection.toggle(RowKey::Int(1), true, false);
        selection.toggle(RowKey::Int(2), true, false);
        assert_eq!(selection.keys(), vec![RowKey::Int(2)]);

        selection.toggle(RowKey::Int(2), false, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn single_mode_uncheck_of_other_row_keeps_selection() {
        let mut selection = Selection::new();
        selection.toggle(RowKey::Int(1), true, false);
        selection.toggle(RowKey::Int(2), false, false);
        assert_eq!(selection.keys(), vec![RowKey::Int(1)]);
    }

    #[test]
    fn check_state_tracks_partial_selection() {
        let mut selection = Selection::new();
        assert_eq!(selection.check_state(0), CheckState::Unchecked);
        assert_eq!(selection.check_state(3), CheckState::Unchecked);

        selection.toggle(RowKey::Int(1), true, true);
        assert_eq!(selection.check_state(3), CheckState::Indeterminate);

        selection.select_all([1, 2, 3].map(RowKey::Int));
        assert_eq!(selection.check_state(3), CheckState::Checked);

        // Stale keys can outnumber the rows
        assert_eq!(selection.check_state(2), CheckState::Unchecked);
    }
}
