use termdom::{layout, render_to_buffer, Border, Buffer, Color, Element, Rect, Rgb, Style};

fn paint(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf);
    buf
}

#[test]
fn test_text_is_painted() {
    let root = Element::col()
        .child(Element::text("hello"))
        .child(Element::text("world"));

    let buf = paint(&root, 10, 3);

    assert_eq!(buf.line(0), "hello");
    assert_eq!(buf.line(1), "world");
    assert_eq!(buf.line(2), "");
}

#[test]
fn test_long_text_is_truncated_with_ellipsis() {
    let root = Element::text("abcdefgh");
    let buf = paint(&root, 5, 1);
    assert_eq!(buf.line(0), "abcd…");
}

#[test]
fn test_rounded_border_is_drawn() {
    let root = Element::text("ok").style(Style::new().border(Border::Rounded));
    let buf = paint(&root, 4, 3);
    assert_eq!(buf.lines(), vec!["╭──╮", "│ok│", "╰──╯"]);
}

#[test]
fn test_bottom_border_draws_rule() {
    let root = Element::text("abc").style(Style::new().border(Border::Bottom));
    let buf = paint(&root, 3, 2);
    assert_eq!(buf.lines(), vec!["abc", "───"]);
}

#[test]
fn test_foreground_is_inherited_by_children() {
    let root = Element::col()
        .style(Style::new().foreground(Color::rgb(255, 0, 0)))
        .child(Element::text("x"));

    let buf = paint(&root, 1, 1);

    assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(Rgb::new(255, 0, 0)));
}

#[test]
fn test_background_fills_rect_and_survives_text() {
    let root = Element::text("ab").style(Style::new().background(Color::rgb(0, 0, 200)));
    let buf = paint(&root, 4, 1);

    assert_eq!(buf.get(1, 0).map(|c| c.bg), Some(Rgb::new(0, 0, 200)));
    assert_eq!(buf.get(3, 0).map(|c| c.bg), Some(Rgb::BLACK));
}

#[test]
fn test_disabled_style_wins_over_focused_style() {
    let root = Element::text("x")
        .style_focused(Style::new().foreground(Color::rgb(0, 255, 0)))
        .style_disabled(Style::new().foreground(Color::rgb(90, 90, 90)))
        .focused(true)
        .disabled(true);

    let buf = paint(&root, 1, 1);

    assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(Rgb::new(90, 90, 90)));
}

#[test]
fn test_wide_characters_mark_continuation() {
    let root = Element::text("日");
    let buf = paint(&root, 2, 1);

    assert_eq!(buf.get(0, 0).map(|c| c.char), Some('日'));
    assert_eq!(buf.get(1, 0).map(|c| c.wide_continuation), Some(true));
    assert_eq!(buf.line(0), "日");
}
