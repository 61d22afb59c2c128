use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode, alternate-screen terminal that repaints only changed cells.
///
/// The terminal is restored when this value is dropped.
pub struct Terminal {
    stdout: io::Stdout,
    frame: Buffer,
    shown: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("[terminal] opened {width}x{height}");

        Ok(Self {
            stdout,
            frame: Buffer::new(width, height),
            shown: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.frame.width(), self.frame.height())
    }

    /// Wait for input. `None` blocks until something arrives; a timeout
    /// that passes quietly yields an empty list.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        if let Some(timeout) = timeout {
            if !event::poll(timeout)? {
                return Ok(Vec::new());
            }
        }

        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Lay out and paint `root`, then write the cells that changed.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("[terminal] resized to {width}x{height}");
            self.frame = Buffer::new(width, height);
            self.shown = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.frame.reset();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.frame);

        self.flush_changes()?;
        std::mem::swap(&mut self.frame, &mut self.shown);

        Ok(&self.last_layout)
    }

    /// Layout of the last rendered frame, for hit testing.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_changes(&mut self) -> io::Result<()> {
        let mut pen = Pen::reset(&mut self.stdout)?;
        let mut cursor_at = None;

        for (x, y, cell) in self.frame.changes_since(&self.shown) {
            if cell.wide_continuation {
                continue;
            }
            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            pen.apply(&mut self.stdout, cell)?;
            write!(self.stdout, "{}", cell.char)?;

            let advance = char_width(cell.char).max(1) as u16;
            cursor_at = Some((x.saturating_add(advance), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

/// Colors and attributes most recently sent, so unchanged ones are not
/// sent again.
struct Pen {
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
}

impl Pen {
    fn reset(out: &mut impl Write) -> io::Result<Self> {
        let pen = Self {
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            style: TextStyle::new(),
        };
        queue!(
            out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_ct(pen.fg)),
            SetBackgroundColor(to_ct(pen.bg))
        )?;
        Ok(pen)
    }

    fn apply(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if cell.style != self.style {
            // Not every terminal can switch a single attribute off
            *self = Self::reset(out)?;
            queue_attributes(out, cell.style)?;
            self.style = cell.style;
        }
        if cell.fg != self.fg {
            queue!(out, SetForegroundColor(to_ct(cell.fg)))?;
            self.fg = cell.fg;
        }
        if cell.bg != self.bg {
            queue!(out, SetBackgroundColor(to_ct(cell.bg)))?;
            self.bg = cell.bg;
        }
        Ok(())
    }
}

fn to_ct(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn queue_attributes(out: &mut impl Write, style: TextStyle) -> io::Result<()> {
    let attributes = [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.underline, Attribute::Underlined),
        (style.reversed, Attribute::Reverse),
    ];
    for (_, attribute) in attributes.into_iter().filter(|(on, _)| *on) {
        queue!(out, SetAttribute(attribute))?;
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("[terminal] restored");
    }
}
