//! Form and table widgets for terminal interfaces.
//!
//! [`DataGrid`] shows caller records as a sortable, selectable table;
//! [`TextInput`] is a controlled text field with clear, password-reveal and
//! loading decorations. Both render to a [`termdom::Element`] tree that can
//! be queried in tests or painted by [`termdom::Terminal`].

pub mod error;
pub mod events;
pub mod grid;
pub mod ids;
pub mod input;
pub mod options;
pub mod record;
pub mod selection;
pub mod sort;
pub mod theme;
pub mod value;

pub use error::GridError;
pub use events::{Component, EventResult};
pub use grid::{CellRenderer, Column, DataGrid, GridAction, RenderState};
pub use ids::{GlobalIds, IdSource, SequentialIds};
pub use input::TextInput;
pub use options::{GridOptions, InputKind, InputOptions, InputSize, Variant};
pub use record::{KeyPolicy, KeySource, Record, RowKey};
pub use selection::Selection;
pub use sort::{SortDirection, SortState};
pub use theme::Theme;
pub use value::Value;

pub mod prelude {
    pub use crate::{
        Column, Component, DataGrid, EventResult, GridOptions, InputKind, InputOptions,
        InputSize, KeyPolicy, KeySource, Record, RowKey, SortDirection, TextInput, Value,
        Variant,
    };
    pub use termdom::{CheckState, Element, Event, Key, Modifiers, Role};
}
