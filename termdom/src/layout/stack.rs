//! Stacking layout: columns place children top to bottom, rows left to
//! right. Sizes come from content unless an element asks for a fixed width
//! or to fill its parent.

use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{line_count, max_line_width};
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let (width, height) = measure(element);
    let width = match element.width {
        Size::Fill => available.width,
        _ => width.min(available.width),
    };
    let rect = Rect::new(available.x, available.y, width, height.min(available.height));
    layout_element(element, rect, &mut result);
    result
}

/// Natural (width, height) of an element including border and padding.
pub fn measure(element: &Element) -> (u16, u16) {
    let (bt, br, bb, bl) = element.style.border.thickness();
    let chrome_w = bl + br + element.padding.width();
    let chrome_h = bt + bb + element.padding.height();

    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (clamp(max_line_width(text)), clamp(line_count(text))),
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children.iter().map(measure).collect();
            let gaps = element
                .gap
                .saturating_mul(children.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Row => (
                    sizes
                        .iter()
                        .fold(0u16, |acc, (w, _)| acc.saturating_add(*w))
                        .saturating_add(gaps),
                    sizes.iter().map(|(_, h)| *h).max().unwrap_or(0),
                ),
                Direction::Column => (
                    sizes.iter().map(|(w, _)| *w).max().unwrap_or(0),
                    sizes
                        .iter()
                        .fold(0u16, |acc, (_, h)| acc.saturating_add(*h))
                        .saturating_add(gaps),
                ),
            }
        }
    };

    let width = match element.width {
        Size::Fixed(n) => n,
        Size::Auto | Size::Fill => content_w.saturating_add(chrome_w),
    };
    (width, content_h.saturating_add(chrome_h))
}

fn clamp(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}

fn layout_element(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let (bt, br, bb, bl) = element.style.border.thickness();
    let inner = rect.shrink(
        bt + element.padding.top,
        br + element.padding.right,
        bb + element.padding.bottom,
        bl + element.padding.left,
    );

    match element.direction {
        Direction::Column => layout_column(element, children, inner, result),
        Direction::Row => layout_row(element, children, inner, result),
    }
}

fn layout_column(element: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let mut y = inner.y;
    for child in children {
        let (w, h) = measure(child);
        let width = match child.width {
            Size::Fill => inner.width,
            Size::Fixed(_) | Size::Auto => w.min(inner.width),
        };
        let height = h.min(inner.bottom().saturating_sub(y));
        layout_element(child, Rect::new(inner.x, y, width, height), result);
        y = y.saturating_add(h).saturating_add(element.gap);
    }
}

fn layout_row(element: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let sizes: Vec<(u16, u16)> = children.iter().map(measure).collect();
    let gaps = element
        .gap
        .saturating_mul(children.len().saturating_sub(1) as u16);

    let fill_count = children.iter().filter(|c| c.width == Size::Fill).count() as u16;
    let fixed_total = children
        .iter()
        .zip(&sizes)
        .filter(|(c, _)| c.width != Size::Fill)
        .fold(0u16, |acc, (_, (w, _))| acc.saturating_add(*w));
    let fill_share = if fill_count > 0 {
        inner
            .width
            .saturating_sub(fixed_total.saturating_add(gaps))
            / fill_count
    } else {
        0
    };

    let mut x = inner.x;
    for (child, (w, _)) in children.iter().zip(&sizes) {
        let wanted = if child.width == Size::Fill { fill_share } else { *w };
        let width = wanted.min(inner.right().saturating_sub(x));
        layout_element(child, Rect::new(x, inner.y, width, inner.height), result);
        x = x.saturating_add(wanted).saturating_add(element.gap);
    }
}
