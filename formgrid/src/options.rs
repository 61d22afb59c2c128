//! Plain-data widget configuration.
//!
//! Hosts that keep widget settings in their own config files can
//! deserialize these and hand them to `from_options`. Every field is
//! optional; missing ones take the widget defaults.
//!
//! ```
//! use formgrid::options::{InputKind, InputOptions, Variant};
//!
//! let options: InputOptions = serde_json::from_str(
//!     r#"{ "label": "Password", "kind": "password", "variant": "filled" }"#,
//! ).unwrap();
//!
//! assert_eq!(options.kind, InputKind::Password);
//! assert_eq!(options.variant, Variant::Filled);
//! assert!(!options.disabled);
//! ```

use serde::{Deserialize, Serialize};

use crate::record::KeyPolicy;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Visual treatment of the input field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Solid background, no border.
    Filled,
    /// Rounded border.
    #[default]
    Outlined,
    /// Neither border nor background until focused.
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    /// Horizontal padding inside the field.
    pub fn padding(self) -> u16 {
        match self {
            InputSize::Small => 0,
            InputSize::Medium => 1,
            InputSize::Large => 2,
        }
    }

    /// Minimum width of the text area.
    pub fn min_width(self) -> u16 {
        match self {
            InputSize::Small => 16,
            InputSize::Medium => 24,
            InputSize::Large => 32,
        }
    }
}

/// What the input accepts and how it presents the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
            InputKind::Email => "email",
            InputKind::Number => "number",
        }
    }

    /// Whether typing `c` is allowed.
    pub fn accepts(self, c: char) -> bool {
        match self {
            InputKind::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            _ => !c.is_control(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub id: Option<String>,
    pub value: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub loading: bool,
    pub variant: Variant,
    pub size: InputSize,
    pub kind: InputKind,
    pub show_clear_button: bool,
    pub show_password_toggle: bool,
    pub class: Option<String>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            id: None,
            value: String::new(),
            label: None,
            placeholder: None,
            helper_text: None,
            error: None,
            disabled: false,
            invalid: false,
            loading: false,
            variant: Variant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            show_clear_button: false,
            show_password_toggle: false,
            class: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub id: Option<String>,
    pub loading: bool,
    pub selectable: bool,
    /// Only meaningful with `selectable`.
    pub multi_select: bool,
    pub empty_message: String,
    pub class: Option<String>,
    pub key_policy: KeyPolicy,
    /// Record sort state and notify, but keep rows in supplied order.
    pub external_sort_only: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            id: None,
            loading: false,
            selectable: false,
            multi_select: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            class: None,
            key_policy: KeyPolicy::default(),
            external_sort_only: false,
        }
    }
}
