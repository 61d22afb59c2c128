//! Event routing between the terminal layer and widgets.

use termdom::{Element, Event, Key, Modifiers};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// A widget that renders to an element tree and reacts to events aimed at
/// the elements it rendered.
///
/// All handlers default to `EventResult::Ignored`, so widgets only implement
/// the ones they care about.
pub trait Component {
    /// Render the current state.
    fn element(&self) -> Element;

    /// Element `target` was clicked or activated from the keyboard.
    fn on_activate(&mut self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// A key was pressed while `target` had focus.
    fn on_key(&mut self, _target: &str, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }

    /// `target` gained (`true`) or lost (`false`) focus.
    fn on_focus_change(&mut self, _target: &str, _focused: bool) -> EventResult {
        EventResult::Ignored
    }

    /// Route a terminal event to the matching handler.
    fn handle(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
                ..
            } => self.on_activate(target),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } => self.on_key(target, *key, *modifiers),
            Event::Focus { target } => self.on_focus_change(target, true),
            Event::Blur { target } => self.on_focus_change(target, false),
            _ => EventResult::Ignored,
        }
    }
}

/// Enter and Space activate buttons and checkboxes.
pub(crate) fn is_activation_key(key: Key, modifiers: Modifiers) -> bool {
    modifiers.none() && matches!(key, Key::Enter | Key::Char(' '))
}
