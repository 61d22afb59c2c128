use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let last = focusable.len().checked_sub(1)?;

        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, new_focus);
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }

    /// Drop focus when the focused element left the tree or became disabled.
    /// Returns the blur event to deliver, if any.
    pub fn revalidate(&mut self, root: &Element) -> Option<Event> {
        let current = self.focused.as_deref()?;
        let still_focusable = find_element(root, current)
            .map(|el| el.focusable && !el.disabled)
            .unwrap_or(false);
        if still_focusable {
            return None;
        }
        self.focused
            .take()
            .map(|target| Event::Blur { target })
    }

    /// Translate raw terminal events into targeted events, moving focus on
    /// Tab, Shift+Tab, Escape and clicks along the way.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    let Ok(key) = Key::try_from(key_event.code) else {
                        continue;
                    };
                    let modifiers: Modifiers = key_event.modifiers.into();

                    match key {
                        Key::Tab | Key::BackTab => {
                            let old = self.focused.clone();
                            let moved = if key == Key::Tab {
                                self.focus_next(root)
                            } else {
                                self.focus_prev(root)
                            };
                            if let Some(new) = moved {
                                if let Some(old) = old {
                                    events.push(Event::Blur { target: old });
                                }
                                events.push(Event::Focus { target: new });
                            }
                        }
                        // Escape blurs; only reaches the app when nothing is focused
                        Key::Escape if self.focused.is_some() => {
                            if let Some(old) = self.focused.take() {
                                events.push(Event::Blur { target: old });
                            }
                        }
                        _ => events.push(Event::Key {
                            target: self.focused.clone(),
                            key,
                            modifiers,
                        }),
                    }
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    if let MouseEventKind::Down(button) = mouse_event.kind {
                        let (x, y) = (mouse_event.column, mouse_event.row);
                        let target = hit_test(layout, root, x, y);

                        let focusable_target = target
                            .as_deref()
                            .and_then(|id| find_element(root, id))
                            .filter(|el| el.focusable)
                            .map(|el| el.id.clone());
                        if let Some(new) = focusable_target {
                            let old = self.focused.clone();
                            if self.move_to(new.clone()).is_some() {
                                if let Some(old) = old {
                                    events.push(Event::Blur { target: old });
                                }
                                events.push(Event::Focus { target: new });
                            }
                        }

                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// Collect all focusable, enabled element IDs in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
