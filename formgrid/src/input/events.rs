//! Event handling for the TextInput widget.

use termdom::{Element, Key, Modifiers};

use crate::events::{is_activation_key, Component, EventResult};

use super::TextInput;

impl TextInput {
    pub(super) fn clear_button_id(&self) -> String {
        format!("{}-clear", self.id)
    }

    pub(super) fn toggle_button_id(&self) -> String {
        format!("{}-toggle", self.id)
    }

    /// Report the value after typing `key` into the field.
    fn type_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.disabled || modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(c) => {
                if self.kind.accepts(c) {
                    let mut next = self.value.clone();
                    next.push(c);
                    self.emit_change(next);
                }
                EventResult::Consumed
            }
            Key::Backspace => {
                let mut next = self.value.clone();
                if next.pop().is_some() {
                    self.emit_change(next);
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

impl Component for TextInput {
    fn element(&self) -> Element {
        self.render()
    }

    fn on_activate(&mut self, target: &str) -> EventResult {
        if target == self.clear_button_id() {
            self.clear()
        } else if target == self.toggle_button_id() {
            self.toggle_password_visibility()
        } else if target == self.id && !self.disabled {
            // Focus itself arrives as a separate focus event
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn on_key(&mut self, target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        if target == self.id {
            return self.type_key(key, modifiers);
        }
        if is_activation_key(key, modifiers) {
            return self.on_activate(target);
        }
        EventResult::Ignored
    }

    fn on_focus_change(&mut self, target: &str, focused: bool) -> EventResult {
        if target != self.id {
            return EventResult::Ignored;
        }
        if focused {
            self.focus();
        } else {
            self.blur();
        }
        log::debug!("[input] {} focused={}", self.id, self.focused);
        EventResult::Consumed
    }
}
