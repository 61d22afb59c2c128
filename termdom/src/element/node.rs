use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Aria, CheckState, Direction, Edges, Role, Size, SortOrder, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub role: Role,
    /// Free-form styling hook supplied by the host (never interpreted here).
    pub class: Option<String>,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,
    pub gap: u16,
    pub width: Size,
    pub padding: Edges,

    // Visual
    pub style: Style,
    pub style_focused: Option<Style>,
    pub style_disabled: Option<Style>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// When true, the element wants printable keys (text fields).
    pub captures_input: bool,

    // State
    pub focused: bool,
    pub disabled: bool,

    // Accessibility
    pub aria: Aria,

    // Custom data storage (actions, input type, ...)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            role: Role::Generic,
            class: None,
            content: Content::None,
            direction: Direction::Column,
            gap: 0,
            width: Size::Auto,
            padding: Edges::default(),
            style: Style::default(),
            style_focused: None,
            style_disabled: None,
            focusable: false,
            clickable: false,
            captures_input: false,
            focused: false,
            disabled: false,
            aria: Aria::default(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// A clickable, focusable element showing `label`.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            role: Role::Button,
            content: Content::Text(label.into()),
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    /// A checkbox painted as `[ ]`, `[x]` or `[-]`.
    pub fn checkbox(state: CheckState) -> Self {
        Self {
            id: generate_id("checkbox"),
            role: Role::Checkbox,
            content: Content::Text(state.glyph().to_string()),
            focusable: true,
            clickable: true,
            aria: Aria {
                checked: Some(state),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    // Layout
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn style_disabled(mut self, style: Style) -> Self {
        self.style_disabled = Some(style);
        self
    }

    /// The style that applies given the element's current state.
    /// Disabled wins over focused.
    pub fn effective_style(&self) -> Style {
        if self.disabled {
            if let Some(style) = self.style_disabled {
                return style;
            }
        }
        if self.focused {
            if let Some(style) = self.style_focused {
                return style;
            }
        }
        self.style
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn captures_input(mut self, captures: bool) -> Self {
        self.captures_input = captures;
        self
    }

    // State
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Accessibility
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria.label = Some(label.into());
        self
    }

    pub fn label_for(mut self, id: impl Into<String>) -> Self {
        self.aria.label_for = Some(id.into());
        self
    }

    pub fn described_by(mut self, id: impl Into<String>) -> Self {
        self.aria.described_by = Some(id.into());
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.aria.invalid = invalid;
        self
    }

    pub fn sort(mut self, order: Option<SortOrder>) -> Self {
        self.aria.sort = order;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.aria.placeholder = Some(text.into());
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text and empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Set the `focused` flag on the element with `id`.
    /// Returns true if it was found.
    pub fn mark_focused(&mut self, id: &str) -> bool {
        if self.id == id {
            self.focused = true;
            return true;
        }
        match &mut self.content {
            Content::Children(children) => children.iter_mut().any(|child| child.mark_focused(id)),
            _ => false,
        }
    }

    /// All text in this subtree, in tree order, joined without separators.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
