//! Accessibility metadata carried by elements.
//!
//! Assistive tooling and tests read these instead of scraping painted cells:
//! the role says what an element is, [`Aria`] says what state it is in and
//! which other elements describe it.

/// What an element represents to assistive tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Generic,
    /// Visible caption for a control. Pair with [`Aria::label_for`].
    Label,
    TextBox,
    Button,
    Checkbox,
    Table,
    Row,
    ColumnHeader,
    Cell,
    /// Live region announced as soon as it appears (error messages).
    Alert,
    /// Polite live region (progress, loading).
    Status,
}

/// Three-state checkbox value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    pub fn is_checked(&self) -> bool {
        *self == CheckState::Checked
    }

    /// Glyph used when painting the checkbox.
    pub fn glyph(&self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Checked => "[x]",
            CheckState::Indeterminate => "[-]",
        }
    }
}

/// Sort direction exposed on a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aria {
    /// Accessible name when there is no visible label.
    pub label: Option<String>,
    /// Id of the control this label element names.
    pub label_for: Option<String>,
    /// Id of the element holding the description (helper or error text).
    pub described_by: Option<String>,
    pub invalid: bool,
    pub checked: Option<CheckState>,
    pub sort: Option<SortOrder>,
    pub placeholder: Option<String>,
}
