use termdom::text::display_width;
use termdom::{Border, Edges, Element, Role, Size, Style};

use crate::options::{InputKind, Variant};

use super::TextInput;

const MASK: char = '•';
const SPINNER: &str = "⠋";

impl TextInput {
    pub(super) fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    pub(super) fn helper_id(&self) -> String {
        format!("{}-helper", self.id)
    }

    /// Error text, if there is a non-empty one.
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// What the text area shows: the value, masked for a hidden password.
    pub fn display_text(&self) -> String {
        if self.effective_kind() == InputKind::Password {
            std::iter::repeat_n(MASK, self.value.chars().count()).collect()
        } else {
            self.value.clone()
        }
    }

    pub(super) fn render(&self) -> Element {
        let mut container = Element::col().id(format!("{}-container", self.id));
        if let Some(class) = &self.class {
            container = container.class(class.clone());
        }

        if let Some(label) = &self.label {
            let color = if self.disabled {
                self.theme.disabled
            } else {
                self.theme.text
            };
            container = container.child(
                Element::text(label.clone())
                    .id(format!("{}-label", self.id))
                    .role(Role::Label)
                    .label_for(self.id.clone())
                    .style(Style::new().foreground(color).bold()),
            );
        }

        container = container.child(self.field());

        if let Some(error) = self.error_message() {
            container = container.child(
                Element::text(error)
                    .id(self.error_id())
                    .role(Role::Alert)
                    .style(Style::new().foreground(self.theme.error)),
            );
        } else if let Some(helper) = &self.helper_text {
            container = container.child(
                Element::text(helper.clone())
                    .id(self.helper_id())
                    .style(Style::new().foreground(self.theme.text_muted)),
            );
        }

        container
    }

    fn field(&self) -> Element {
        let (idle, focused, disabled) = self.field_styles();
        let mut field = Element::row()
            .id(format!("{}-field", self.id))
            .gap(1)
            .padding(Edges::horizontal(self.size.padding()))
            .style(idle)
            .style_focused(focused)
            .style_disabled(disabled)
            .focused(self.focused)
            .disabled(self.disabled)
            .data("variant", format!("{:?}", self.variant).to_lowercase())
            .data("size", format!("{:?}", self.size).to_lowercase());

        field = field.child(self.control());

        if self.shows_loading() {
            return field.child(
                Element::text(SPINNER)
                    .id(format!("{}-loading", self.id))
                    .role(Role::Status)
                    .aria_label("Loading")
                    .style(Style::new().foreground(self.theme.primary)),
            );
        }

        let button_style = Style::new().foreground(self.theme.text_muted);
        let button_focused = Style::new().foreground(self.theme.primary).reversed();
        if self.shows_clear_button() {
            field = field.child(
                Element::button("×")
                    .id(self.clear_button_id())
                    .aria_label("Clear input")
                    .style(button_style)
                    .style_focused(button_focused),
            );
        }
        if self.shows_password_toggle() {
            let (text, label) = if self.password_visible {
                ("hide", "Hide password")
            } else {
                ("show", "Show password")
            };
            field = field.child(
                Element::button(text)
                    .id(self.toggle_button_id())
                    .aria_label(label)
                    .disabled(self.disabled)
                    .style(button_style)
                    .style_focused(button_focused),
            );
        }
        field
    }

    /// The text box itself.
    fn control(&self) -> Element {
        let shown = self.display_text();
        let (content, color) = match (&self.placeholder, shown.is_empty()) {
            (Some(placeholder), true) => (placeholder.clone(), self.theme.text_muted),
            _ => (shown, self.theme.text),
        };
        let width = (display_width(&content) as u16)
            .saturating_add(1)
            .max(self.size.min_width());

        let mut control = Element::text(content)
            .id(self.id.clone())
            .role(Role::TextBox)
            .width(Size::Fixed(width))
            .focusable(true)
            .clickable(true)
            .captures_input(true)
            .focused(self.focused)
            .disabled(self.disabled)
            .invalid(self.is_invalid())
            .style(Style::new().foreground(color))
            .style_disabled(Style::new().foreground(self.theme.disabled).dim())
            .data("type", self.effective_kind().as_str());

        if let Some(placeholder) = &self.placeholder {
            control = control.placeholder(placeholder.clone());
        }
        if self.error_message().is_some() {
            control = control.described_by(self.error_id());
        } else if self.helper_text.is_some() {
            control = control.described_by(self.helper_id());
        }
        control
    }

    /// Idle, focused and disabled field styles. Disabled ignores error
    /// colors.
    fn field_styles(&self) -> (Style, Style, Style) {
        let accent = if self.is_invalid() {
            self.theme.error
        } else {
            self.theme.border
        };
        let focus_accent = if self.is_invalid() {
            self.theme.error
        } else {
            self.theme.primary
        };

        let base = Style::new().foreground(self.theme.text);
        let (idle, focused) = match self.variant {
            Variant::Outlined => (
                base.border(Border::Rounded).border_color(accent),
                base.border(Border::Rounded).border_color(focus_accent),
            ),
            Variant::Filled => (
                base.background(self.theme.surface)
                    .border(Border::Bottom)
                    .border_color(accent),
                base.background(self.theme.surface)
                    .border(Border::Bottom)
                    .border_color(focus_accent),
            ),
            Variant::Ghost => {
                // Layout measures the idle style, so every state keeps the rule
                let rule = if self.is_invalid() {
                    self.theme.error
                } else {
                    self.theme.surface
                };
                (
                    base.border(Border::Bottom).border_color(rule),
                    base.border(Border::Bottom).border_color(focus_accent),
                )
            }
        };

        let disabled = Style {
            background: idle.background,
            foreground: Some(self.theme.disabled),
            border: idle.border,
            border_color: Some(self.theme.disabled),
            text_style: idle.text_style,
        }
        .dim();

        (idle, focused, disabled)
    }
}
