//! Colors the widgets paint with.

use termdom::Color;

/// Named colors shared by [`DataGrid`](crate::DataGrid) and
/// [`TextInput`](crate::TextInput).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub error: Color,
    pub success: Color,
    pub selected: Color,
    pub disabled: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::oklch(0.65, 0.15, 250.0),
            surface: Color::oklch(0.25, 0.02, 250.0),
            border: Color::oklch(0.45, 0.02, 250.0),
            text: Color::oklch(0.92, 0.01, 250.0),
            text_muted: Color::oklch(0.62, 0.02, 250.0),
            error: Color::oklch(0.62, 0.2, 25.0),
            success: Color::oklch(0.68, 0.15, 145.0),
            selected: Color::oklch(0.32, 0.06, 250.0),
            disabled: Color::oklch(0.45, 0.0, 0.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
