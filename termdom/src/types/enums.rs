/// Main-axis size of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Shrink to the measured content.
    #[default]
    Auto,
    /// Exactly this many terminal columns (border and padding included).
    Fixed(u16),
    /// Take all space the parent offers.
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
    Thick,
    /// A single rule under the content, no sides.
    Bottom,
}

impl Border {
    /// Cells consumed on each edge as (top, right, bottom, left).
    pub const fn thickness(&self) -> (u16, u16, u16, u16) {
        match self {
            Border::None => (0, 0, 0, 0),
            Border::Bottom => (0, 0, 1, 0),
            Border::Single | Border::Rounded | Border::Thick => (1, 1, 1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub underline: bool,
    pub dim: bool,
    pub reversed: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            underline: false,
            dim: false,
            reversed: false,
        }
    }

    /// Combine with a parent style; any flag set on either side stays set.
    pub const fn merge(self, parent: TextStyle) -> Self {
        Self {
            bold: self.bold || parent.bold,
            underline: self.underline || parent.underline,
            dim: self.dim || parent.dim,
            reversed: self.reversed || parent.reversed,
        }
    }
}
