/// Space inside an element's border, in cells per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn all(n: u16) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Left and right only.
    pub const fn horizontal(n: u16) -> Self {
        Self {
            top: 0,
            right: n,
            bottom: 0,
            left: n,
        }
    }

    /// Columns taken up by the left and right sides together.
    pub const fn width(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Rows taken up by the top and bottom sides together.
    pub const fn height(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}
