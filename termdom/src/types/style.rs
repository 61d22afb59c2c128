use super::{Border, Color, TextStyle};

/// How an element is painted. Unset colors are inherited from the parent
/// (foreground) or left as painted underneath (background).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    /// Falls back to the foreground color.
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(self, color: Color) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    pub fn foreground(self, color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..self
        }
    }

    pub fn border(self, border: Border) -> Self {
        Self { border, ..self }
    }

    pub fn border_color(self, color: Color) -> Self {
        Self {
            border_color: Some(color),
            ..self
        }
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.text_style.reversed = true;
        self
    }
}
