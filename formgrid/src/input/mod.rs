//! TextInput widget - a controlled, single-line text field.
//!
//! The caller owns the value. Typing and the clear button only report the
//! value the field *would* have through the change callback; the field shows
//! whatever was last passed to [`TextInput::set_value`].

mod events;
mod render;

use crate::events::EventResult;
use crate::ids::{GlobalIds, IdSource};
use crate::options::{InputKind, InputOptions, InputSize, Variant};
use crate::theme::Theme;

/// Called with the value the user asked for.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct TextInput {
    id: String,
    value: String,
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error: Option<String>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    variant: Variant,
    size: InputSize,
    kind: InputKind,
    show_clear_button: bool,
    show_password_toggle: bool,
    class: Option<String>,
    theme: Theme,

    focused: bool,
    password_visible: bool,

    on_change: Option<ChangeCallback>,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    /// Create an input whose id comes from the process-wide counter.
    pub fn new() -> Self {
        Self::with_ids(&mut GlobalIds)
    }

    /// Create an input whose id is drawn from `ids`.
    pub fn with_ids(ids: &mut dyn IdSource) -> Self {
        Self::with_element_id(ids.next_id("input"))
    }

    fn with_element_id(id: String) -> Self {
        Self {
            id,
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
            theme: Theme::default(),
            focused: false,
            password_visible: false,
            on_change: None,
        }
    }

    pub fn from_options(options: InputOptions) -> Self {
        Self::from_options_with_ids(options, &mut GlobalIds)
    }

    /// Like [`from_options`](Self::from_options), drawing an id from `ids`
    /// only when the options carry none.
    pub fn from_options_with_ids(options: InputOptions, ids: &mut dyn IdSource) -> Self {
        let id = options.id.unwrap_or_else(|| ids.next_id("input"));
        let mut input = Self::with_element_id(id);
        input.value = options.value;
        input.label = options.label;
        input.placeholder = options.placeholder;
        input.helper_text = options.helper_text;
        input.error = options.error;
        input.disabled = options.disabled;
        input.invalid = options.invalid;
        input.loading = options.loading;
        input.variant = options.variant;
        input.size = options.size;
        input.kind = options.kind;
        input.show_clear_button = options.show_clear_button;
        input.show_password_toggle = options.show_password_toggle;
        input.class = options.class;
        input
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn show_password_toggle(mut self, show: bool) -> Self {
        self.show_password_toggle = show;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Caller-owned state
    // -------------------------------------------------------------------------

    /// Feed the value back in after a change callback.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Explicitly flagged, or carrying a non-empty error message.
    pub fn is_invalid(&self) -> bool {
        self.invalid || self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    // -------------------------------------------------------------------------
    // Local state
    // -------------------------------------------------------------------------

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    /// Kind the field presents as: a revealed password shows as text.
    pub fn effective_kind(&self) -> InputKind {
        if self.kind == InputKind::Password && self.password_visible {
            InputKind::Text
        } else {
            self.kind
        }
    }

    /// Give the field keyboard focus. Disabled fields stay unfocused.
    pub fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    // -------------------------------------------------------------------------
    // Affordances
    // -------------------------------------------------------------------------

    pub fn shows_clear_button(&self) -> bool {
        self.show_clear_button && !self.disabled && !self.value.is_empty() && !self.loading
    }

    pub fn shows_password_toggle(&self) -> bool {
        self.kind == InputKind::Password && self.show_password_toggle && !self.loading
    }

    pub fn shows_loading(&self) -> bool {
        self.loading
    }

    /// Ask the caller to empty the field. The current value is left alone.
    pub fn clear(&mut self) -> EventResult {
        if !self.shows_clear_button() {
            return EventResult::Ignored;
        }
        log::debug!("[input] {} clear", self.id);
        self.emit_change(String::new());
        EventResult::Consumed
    }

    pub fn toggle_password_visibility(&mut self) -> EventResult {
        if self.disabled || !self.shows_password_toggle() {
            return EventResult::Ignored;
        }
        self.password_visible = !self.password_visible;
        log::debug!(
            "[input] {} password visible={}",
            self.id,
            self.password_visible
        );
        EventResult::Consumed
    }

    fn emit_change(&mut self, value: String) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&value);
        }
    }
}
