//! Sort state and the comparison used to order rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use termdom::SortOrder;

use crate::record::Record;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl From<SortDirection> for SortOrder {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => SortOrder::Ascending,
            SortDirection::Descending => SortOrder::Descending,
        }
    }
}

/// The field rows are ordered by, and in which direction.
///
/// Both parts are `None` until a sortable header is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: Option<F>,
    pub direction: Option<SortDirection>,
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        Self {
            field: None,
            direction: None,
        }
    }
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction: Some(direction),
        }
    }

    pub fn is_active(&self) -> bool {
        self.field.is_some() && self.direction.is_some()
    }

    /// Active `(field, direction)` pair.
    pub fn active(&self) -> Option<(F, SortDirection)> {
        self.field.zip(self.direction)
    }

    /// Direction applied to `field`, if it is the active sort field.
    pub fn direction_for(&self, field: F) -> Option<SortDirection> {
        match self.active() {
            Some((active, direction)) if active == field => Some(direction),
            _ => None,
        }
    }

    /// State after activating the header of `field`.
    ///
    /// The same field flips direction; any other field starts ascending.
    pub fn cycle(&self, field: F) -> Self {
        let direction = match self.direction_for(field) {
            Some(direction) => direction.reversed(),
            None => SortDirection::Ascending,
        };
        Self::new(field, direction)
    }
}

/// Ascending comparison of two field values.
///
/// Null behaves as the largest value. Values of types that cannot be
/// compared with each other are grouped by type so the ordering stays total.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .compare(b)
            .unwrap_or_else(|| a.type_rank().cmp(&b.type_rank())),
    }
}

/// Dataset positions of `rows` in sorted order. `rows` itself is untouched.
pub fn sort_indices<T: Record>(rows: &[T], field: T::Field, direction: SortDirection) -> Vec<usize> {
    let values: Vec<Value> = rows.iter().map(|row| row.value(field)).collect();
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| {
        let ordering = compare_values(&values[a], &values[b]);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    order
}
