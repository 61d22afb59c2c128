//! Off-screen frame of terminal cells.
//!
//! The renderer paints into a [`Buffer`]; the terminal then writes only the
//! cells that changed since the previous frame.

use crate::layout::Rect;
use crate::types::{Rgb, TextStyle};

/// One column of one terminal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width character drawn in the cell to the left.
    /// Never written to the terminal itself.
    pub wide_continuation: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        char: ' ',
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        style: TextStyle::new(),
        wide_continuation: false,
    };

    /// Draw `ch` on top of the background already in the cell.
    pub fn paint(&mut self, ch: char, fg: Rgb, style: TextStyle) {
        self.char = ch;
        self.fg = fg;
        self.style = style;
        self.wide_continuation = false;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Row-major position of `(x, y)`, or `None` off the frame.
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.offset(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the background of every cell in `rect` that lies on the frame.
    pub fn fill_background(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.bg = bg;
                }
            }
        }
    }

    /// Blank the whole frame.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cells that differ from `previous`, with their coordinates.
    /// Both frames must have the same size.
    pub fn changes_since<'a>(
        &'a self,
        previous: &'a Buffer,
    ) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
        let width = usize::from(self.width.max(1));
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    /// Text of row `y` with trailing blanks trimmed.
    pub fn line(&self, y: u16) -> String {
        let Some(start) = self.offset(0, y) else {
            return String::new();
        };
        let row = &self.cells[start..start + usize::from(self.width)];
        let text: String = row
            .iter()
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect();
        text.trim_end().to_string()
    }

    /// Every row as text, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.line(y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_frame_is_none() {
        let mut buf = Buffer::new(2, 2);
        assert!(buf.get(2, 0).is_none());
        assert!(buf.get_mut(0, 2).is_none());
        assert_eq!(buf.line(5), "");
    }

    #[test]
    fn changes_report_coordinates() {
        let before = Buffer::new(3, 2);
        let mut now = before.clone();
        if let Some(cell) = now.get_mut(1, 1) {
            cell.paint('x', Rgb::WHITE, TextStyle::new());
        }
        let changed: Vec<(u16, u16, char)> = now
            .changes_since(&before)
            .map(|(x, y, cell)| (x, y, cell.char))
            .collect();
        assert_eq!(changed, vec![(1, 1, 'x')]);
    }

    #[test]
    fn paint_keeps_background() {
        let mut buf = Buffer::new(4, 1);
        buf.fill_background(Rect::new(0, 0, 4, 1), Rgb::new(1, 2, 3));
        if let Some(cell) = buf.get_mut(0, 0) {
            cell.paint('a', Rgb::WHITE, TextStyle::new());
        }
        assert_eq!(buf.get(0, 0).map(|c| c.bg), Some(Rgb::new(1, 2, 3)));
        assert_eq!(buf.line(0), "a");
    }
}
