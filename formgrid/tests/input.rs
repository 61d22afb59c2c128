use std::cell::RefCell;
use std::rc::Rc;

use formgrid::prelude::*;
use formgrid::{SequentialIds, Theme};
use termdom::element::{find_by_label, find_by_role};
use termdom::{collect_focusable, find_element, Border};

fn input() -> TextInput {
    TextInput::with_ids(&mut SequentialIds::new())
}

/// Records every value passed to the change callback.
fn recorded(input: TextInput) -> (TextInput, Rc<RefCell<Vec<String>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let input = input.on_change(move |value: &str| sink.borrow_mut().push(value.to_string()));
    (input, changes)
}

fn control_text(input: &TextInput) -> String {
    let root = input.element();
    find_element(&root, input.id())
        .map(|el| el.text_content())
        .unwrap_or_default()
}

fn key(input: &mut TextInput, key: Key) -> EventResult {
    let id = input.id().to_string();
    input.on_key(&id, key, Modifiers::new())
}

// ============================================================================
// Identity and labels
// ============================================================================

#[test]
fn test_ids_come_from_the_id_source() {
    let mut ids = SequentialIds::new();
    let first = TextInput::with_ids(&mut ids);
    let second = TextInput::with_ids(&mut ids);

    assert_eq!(first.id(), "input-0");
    assert_eq!(second.id(), "input-1");
    assert_eq!(input().with_id("email").id(), "email");
}

#[test]
fn test_default_ids_are_unique() {
    assert_ne!(TextInput::new().id(), TextInput::new().id());
}

#[test]
fn test_label_is_associated_with_control() {
    let input = input().label("Email").with_kind(InputKind::Email);
    let root = input.element();

    let control = find_by_label(&root, "Email");
    assert_eq!(control.map(|el| el.id.as_str()), Some("input-0"));
    assert_eq!(control.map(|el| el.role), Some(Role::TextBox));
    assert_eq!(
        control.and_then(|el| el.get_data("type")).map(String::as_str),
        Some("email")
    );
}

#[test]
fn test_placeholder_shows_until_value_arrives() {
    let mut input = input().placeholder("Enter text...");
    assert_eq!(control_text(&input), "Enter text...");

    input.set_value("typed");
    assert_eq!(control_text(&input), "typed");

    let root = input.element();
    let placeholder = find_element(&root, "input-0").and_then(|el| el.aria.placeholder.clone());
    assert_eq!(placeholder.as_deref(), Some("Enter text..."));
}

// ============================================================================
// Helper and error text
// ============================================================================

#[test]
fn test_helper_text_describes_control() {
    let input = input().helper_text("This is helper text");
    let root = input.element();

    let helper = find_element(&root, "input-0-helper");
    assert_eq!(helper.map(|el| el.text_content()).as_deref(), Some("This is helper text"));
    let control = find_element(&root, "input-0");
    assert_eq!(
        control.and_then(|el| el.aria.described_by.as_deref()),
        Some("input-0-helper")
    );
    assert!(!input.is_invalid());
}

#[test]
fn test_error_is_an_alert_and_hides_helper() {
    let input = input()
        .helper_text("This is helper text")
        .error("This field is required");
    let root = input.element();

    let alerts = find_by_role(&root, Role::Alert);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, "input-0-error");
    assert_eq!(alerts[0].text_content(), "This field is required");
    assert!(find_element(&root, "input-0-helper").is_none());

    let control = find_element(&root, "input-0");
    assert!(control.is_some_and(|el| el.aria.invalid));
    assert_eq!(
        control.and_then(|el| el.aria.described_by.as_deref()),
        Some("input-0-error")
    );
}

#[test]
fn test_invalid_flag_or_error_message() {
    assert!(input().invalid(true).is_invalid());
    assert!(input().error("bad").is_invalid());
    assert!(!input().error("").is_invalid());
    assert!(!input().is_invalid());
}

#[test]
fn test_empty_error_keeps_helper() {
    let root = input().helper_text("help").error("").element();
    assert!(find_by_role(&root, Role::Alert).is_empty());
    assert!(find_element(&root, "input-0-helper").is_some());
}

// ============================================================================
// Clear button
// ============================================================================

#[test]
fn test_clear_reports_empty_value_once_and_keeps_value() {
    let (mut input, changes) = recorded(input().show_clear_button(true).with_value("hello"));
    assert!(input.shows_clear_button());

    let root = input.element();
    let clear = find_by_label(&root, "Clear input").map(|el| el.id.clone());
    assert_eq!(clear.as_deref(), Some("input-0-clear"));

    assert_eq!(input.on_activate("input-0-clear"), EventResult::Consumed);

    assert_eq!(*changes.borrow(), vec![String::new()]);
    assert_eq!(input.value(), "hello");
}

#[test]
fn test_clear_button_hidden_without_value() {
    let (mut input, changes) = recorded(input().show_clear_button(true));

    assert!(!input.shows_clear_button());
    assert!(find_by_label(&input.element(), "Clear input").is_none());
    assert_eq!(input.clear(), EventResult::Ignored);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_clear_button_hidden_when_disabled() {
    let input = input().show_clear_button(true).with_value("x").disabled(true);
    assert!(!input.shows_clear_button());
}

#[test]
fn test_clear_needs_the_flag() {
    let input = input().with_value("x");
    assert!(!input.shows_clear_button());
}

// ============================================================================
// Password toggle
// ============================================================================

#[test]
fn test_password_toggle_reveals_and_hides() {
    let mut input = input()
        .with_kind(InputKind::Password)
        .show_password_toggle(true)
        .with_value("secret");

    let root = input.element();
    assert_eq!(control_text(&input), "••••••");
    assert!(find_by_label(&root, "Show password").is_some());
    assert!(find_by_label(&root, "Hide password").is_none());

    assert_eq!(input.on_activate("input-0-toggle"), EventResult::Consumed);

    let root = input.element();
    assert_eq!(control_text(&input), "secret");
    assert!(find_by_label(&root, "Hide password").is_some());
    assert_eq!(input.effective_kind(), InputKind::Text);
    assert_eq!(input.kind(), InputKind::Password);
    assert_eq!(input.value(), "secret");

    input.toggle_password_visibility();
    assert_eq!(control_text(&input), "••••••");
}

#[test]
fn test_password_without_toggle_stays_hidden() {
    let mut input = input().with_kind(InputKind::Password).with_value("pw");

    assert!(!input.shows_password_toggle());
    assert_eq!(input.toggle_password_visibility(), EventResult::Ignored);
    assert_eq!(control_text(&input), "••");
}

#[test]
fn test_toggle_only_for_password_kind() {
    let input = input().show_password_toggle(true);
    assert!(!input.shows_password_toggle());
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_loading_suppresses_other_affordances() {
    let input = input()
        .with_kind(InputKind::Password)
        .show_password_toggle(true)
        .show_clear_button(true)
        .with_value("secret")
        .loading(true);
    let root = input.element();

    assert!(input.shows_loading());
    assert!(!input.shows_clear_button());
    assert!(!input.shows_password_toggle());
    assert_eq!(find_by_role(&root, Role::Status).len(), 1);
    assert!(find_by_role(&root, Role::Button).is_empty());
}

// ============================================================================
// Typing
// ============================================================================

#[test]
fn test_typing_reports_next_value_without_storing_it() {
    let (mut input, changes) = recorded(input().with_value("he"));

    assert_eq!(key(&mut input, Key::Char('y')), EventResult::Consumed);
    assert_eq!(key(&mut input, Key::Backspace), EventResult::Consumed);

    assert_eq!(*changes.borrow(), vec!["hey".to_string(), "h".to_string()]);
    assert_eq!(input.value(), "he");
}

#[test]
fn test_backspace_on_empty_reports_nothing() {
    let (mut input, changes) = recorded(input());
    key(&mut input, Key::Backspace);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_controlled_round_trip() {
    let (mut input, changes) = recorded(input());
    for c in "abc".chars() {
        key(&mut input, Key::Char(c));
        let next = changes.borrow().last().cloned().unwrap_or_default();
        input.set_value(next);
    }
    assert_eq!(input.value(), "abc");
}

#[test]
fn test_number_input_rejects_letters() {
    let (mut input, changes) = recorded(input().with_kind(InputKind::Number).with_value("4"));

    assert_eq!(key(&mut input, Key::Char('x')), EventResult::Consumed);
    key(&mut input, Key::Char('2'));

    assert_eq!(*changes.borrow(), vec!["42".to_string()]);
}

#[test]
fn test_shortcuts_pass_through() {
    let (mut input, changes) = recorded(input());
    let id = input.id().to_string();

    assert_eq!(
        input.on_key(&id, Key::Char('q'), Modifiers::ctrl()),
        EventResult::Ignored
    );
    assert_eq!(key(&mut input, Key::Enter), EventResult::Ignored);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_keys_for_other_targets_are_ignored() {
    let (mut input, changes) = recorded(input());
    assert_eq!(
        input.on_key("input-9", Key::Char('a'), Modifiers::new()),
        EventResult::Ignored
    );
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_enter_activates_focused_clear_button() {
    let (mut input, changes) = recorded(input().show_clear_button(true).with_value("x"));
    input.on_key("input-0-clear", Key::Enter, Modifiers::new());
    assert_eq!(*changes.borrow(), vec![String::new()]);
}

// ============================================================================
// Disabled and focus
// ============================================================================

#[test]
fn test_disabled_suppresses_interaction() {
    let (mut input, changes) = recorded(
        input()
            .with_kind(InputKind::Password)
            .show_password_toggle(true)
            .with_value("pw")
            .disabled(true),
    );

    assert_eq!(key(&mut input, Key::Char('a')), EventResult::Ignored);
    assert_eq!(input.toggle_password_visibility(), EventResult::Ignored);
    input.focus();

    assert!(!input.is_focused());
    assert!(!input.is_password_visible());
    assert!(changes.borrow().is_empty());
    assert!(collect_focusable(&input.element()).is_empty());
}

#[test]
fn test_disabled_style_wins_over_error() {
    let theme = Theme::default();
    let input = input().error("broken").disabled(true);
    let root = input.element();

    let field = find_element(&root, "input-0-field");
    let border = field.map(|el| el.effective_style().border_color);
    assert_eq!(border, Some(Some(theme.disabled)));
}

#[test]
fn test_error_colors_border_when_enabled() {
    let theme = Theme::default();
    let root = input().error("broken").element();

    let field = find_element(&root, "input-0-field");
    assert_eq!(
        field.map(|el| el.effective_style().border_color),
        Some(Some(theme.error))
    );
}

#[test]
fn test_focus_and_blur() {
    let mut input = input();
    input.focus();
    assert!(input.is_focused());
    assert!(find_element(&input.element(), "input-0").is_some_and(|el| el.focused));

    input.blur();
    assert!(!input.is_focused());
}

#[test]
fn test_focus_events_sync_focus() {
    let mut input = input();

    let focus = Event::Focus {
        target: "input-0".to_string(),
    };
    assert_eq!(input.handle(&focus), EventResult::Consumed);
    assert!(input.is_focused());

    let blur = Event::Blur {
        target: "input-0".to_string(),
    };
    input.handle(&blur);
    assert!(!input.is_focused());

    let other = Event::Focus {
        target: "grid-1-select-all".to_string(),
    };
    assert_eq!(input.handle(&other), EventResult::Ignored);
}

// ============================================================================
// Variants and sizes
// ============================================================================

#[test]
fn test_variant_borders() {
    let border = |variant: Variant| {
        let root = input().variant(variant).element();
        find_element(&root, "input-0-field").map(|el| el.style.border)
    };

    assert_eq!(border(Variant::Outlined), Some(Border::Rounded));
    assert_eq!(border(Variant::Filled), Some(Border::Bottom));
    assert_eq!(border(Variant::Ghost), Some(Border::Bottom));
}

#[test]
fn test_filled_variant_has_background() {
    let root = input().variant(Variant::Filled).element();
    let field = find_element(&root, "input-0-field");
    assert_eq!(
        field.and_then(|el| el.style.background),
        Some(Theme::default().surface)
    );
}

#[test]
fn test_size_sets_padding() {
    let padding = |size: InputSize| {
        let root = input().size(size).element();
        find_element(&root, "input-0-field").map(|el| el.padding.left)
    };

    assert_eq!(padding(InputSize::Small), Some(0));
    assert_eq!(padding(InputSize::Medium), Some(1));
    assert_eq!(padding(InputSize::Large), Some(2));
}

#[test]
fn test_class_hook_lands_on_container() {
    let root = input().class("search").element();
    assert_eq!(root.class.as_deref(), Some("search"));
}

#[test]
fn test_outlined_input_paints_a_box() {
    let input = input().with_value("hi");
    let root = input.element();
    let layout = termdom::layout(&root, termdom::Rect::new(0, 0, 40, 5));
    let mut buf = termdom::Buffer::new(40, 5);
    termdom::render_to_buffer(&root, &layout, &mut buf);

    assert!(buf.line(0).starts_with('╭'));
    assert!(buf.line(1).starts_with("│ hi"));
    assert!(buf.line(2).starts_with('╰'));
}
