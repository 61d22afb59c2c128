use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton, MouseEvent,
    MouseEventKind,
};
use termdom::{
    collect_focusable, hit_test, hit_test_any, Element, Event, FocusState, Key, LayoutResult,
    Modifiers, MouseButton, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(x: u16, y: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn three_buttons() -> Element {
    Element::col()
        .id("root")
        .child(Element::button("A").id("a"))
        .child(Element::button("B").id("b").disabled(true))
        .child(Element::button("C").id("c"))
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_skips_disabled_and_plain_elements() {
    let root = Element::col()
        .id("root")
        .child(Element::button("off").id("off").disabled(true))
        .child(Element::text("plain").id("plain"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 2)),
        ("off", Rect::new(0, 0, 3, 1)),
        ("plain", Rect::new(0, 1, 5, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 1, 0), None);
    assert_eq!(hit_test(&layout, &root, 1, 1), None);
    assert_eq!(hit_test_any(&layout, &root, 1, 1), Some("plain".to_string()));
}

// ============================================================================
// Focus navigation
// ============================================================================

#[test]
fn test_collect_focusable_skips_disabled() {
    assert_eq!(collect_focusable(&three_buttons()), vec!["a", "c"]);
}

#[test]
fn test_focus_next_wraps_around() {
    let root = three_buttons();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("c".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
}

#[test]
fn test_focus_prev_from_nothing_goes_to_last() {
    let root = three_buttons();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&root), Some("c".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("a".to_string()));
}

#[test]
fn test_revalidate_blurs_disabled_element() {
    let mut focus = FocusState::new();
    focus.focus("b");

    let event = focus.revalidate(&three_buttons());

    assert_eq!(event, Some(Event::Blur { target: "b".to_string() }));
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Event processing
// ============================================================================

#[test]
fn test_tab_emits_blur_then_focus() {
    let root = three_buttons();
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();
    focus.focus("a");

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);

    assert_eq!(
        events,
        vec![
            Event::Blur { target: "a".to_string() },
            Event::Focus { target: "c".to_string() },
        ]
    );
}

#[test]
fn test_keys_target_focused_element() {
    let root = three_buttons();
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();
    focus.focus("c");

    let events = focus.process_events(&[key(KeyCode::Enter)], &root, &layout);

    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("c".to_string()),
            key: Key::Enter,
            modifiers: Modifiers::new(),
        }]
    );
}

#[test]
fn test_escape_blurs_before_reaching_app() {
    let root = three_buttons();
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();
    focus.focus("a");

    let first = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    let second = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);

    assert_eq!(first, vec![Event::Blur { target: "a".to_string() }]);
    assert!(matches!(
        second.as_slice(),
        [Event::Key { target: None, key: Key::Escape, .. }]
    ));
}

#[test]
fn test_click_focuses_and_targets_button() {
    let root = three_buttons();
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 3)),
        ("a", Rect::new(0, 0, 1, 1)),
        ("b", Rect::new(0, 1, 1, 1)),
        ("c", Rect::new(0, 2, 1, 1)),
    ]);
    let mut focus = FocusState::new();

    let events = focus.process_events(&[click(0, 2)], &root, &layout);

    assert_eq!(
        events,
        vec![
            Event::Focus { target: "c".to_string() },
            Event::Click {
                target: Some("c".to_string()),
                x: 0,
                y: 2,
                button: MouseButton::Left,
            },
        ]
    );
    assert_eq!(focus.focused(), Some("c"));
}
