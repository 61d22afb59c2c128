use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, TextStyle};

/// Foreground and text attributes flowing from parent to child.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    fg: Rgb,
    text_style: TextStyle,
}

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    log::trace!("[render] painting tree rooted at {}", element.id);
    let root = Inherited {
        fg: Rgb::WHITE,
        text_style: TextStyle::new(),
    };
    render_element(element, layout, buf, root);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer, inherited: Inherited) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    let style = element.effective_style();

    if let Some(bg) = &style.background {
        buf.fill_background(*rect, bg.to_rgb());
    }

    let current = Inherited {
        fg: style
            .foreground
            .as_ref()
            .map(|c| c.to_rgb())
            .unwrap_or(inherited.fg),
        text_style: style.text_style.merge(inherited.text_style),
    };

    let border_fg = style
        .border_color
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(current.fg);
    render_border(style.border, *rect, border_fg, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let (bt, br, bb, bl) = style.border.thickness();
            let inner = rect.shrink(
                bt + element.padding.top,
                br + element.padding.right,
                bb + element.padding.bottom,
                bl + element.padding.left,
            );
            render_text(text, inner, current, buf);
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, current);
            }
        }
    }
}

fn render_text(text: &str, inner: Rect, current: Inherited, buf: &mut Buffer) {
    for (row, line) in text.split('\n').enumerate() {
        let y = inner.y.saturating_add(row as u16);
        if y >= inner.bottom() {
            break;
        }

        let visible = truncate_to_width(line, inner.width as usize);
        let mut x = inner.x;
        for ch in visible.chars() {
            let width = char_width(ch) as u16;
            if x.saturating_add(width) > inner.right() {
                break;
            }

            if let Some(cell) = buf.get_mut(x, y) {
                cell.paint(ch, current.fg, current.text_style);
            }
            if width == 2 {
                if let Some(cell) = buf.get_mut(x + 1, y) {
                    cell.wide_continuation = true;
                }
            }
            x = x.saturating_add(width.max(1));
        }
    }
}

fn render_border(border: Border, rect: Rect, fg: Rgb, buf: &mut Buffer) {
    if border == Border::Bottom {
        if rect.height == 0 {
            return;
        }
        for x in rect.x..rect.right() {
            set_char(buf, x, rect.bottom() - 1, '─', fg);
        }
        return;
    }

    let (tl, tr, bl, br, h, v) = match border {
        Border::None | Border::Bottom => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
    }
}
