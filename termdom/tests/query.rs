use termdom::element::{find_by_label, find_by_role, find_by_text};
use termdom::{find_element, CheckState, Element, Role};

fn form() -> Element {
    Element::col()
        .id("form")
        .child(Element::text("Email").role(Role::Label).label_for("email"))
        .child(Element::text("").id("email").role(Role::TextBox))
        .child(Element::checkbox(CheckState::Checked).id("remember").aria_label("Remember me"))
        .child(Element::text("Required").role(Role::Alert))
}

#[test]
fn test_find_element_by_id() {
    let root = form();
    assert_eq!(find_element(&root, "email").map(|el| el.role), Some(Role::TextBox));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_by_label_follows_label_for() {
    let root = form();
    assert_eq!(find_by_label(&root, "Email").map(|el| el.id.as_str()), Some("email"));
}

#[test]
fn test_find_by_label_prefers_aria_label() {
    let root = form();
    let checkbox = find_by_label(&root, "Remember me");
    assert_eq!(checkbox.and_then(|el| el.aria.checked), Some(CheckState::Checked));
}

#[test]
fn test_find_by_role_and_text() {
    let root = form();
    assert_eq!(find_by_role(&root, Role::Alert).len(), 1);
    assert!(find_by_text(&root, "Required").is_some());
    assert!(find_by_text(&root, "Require").is_none());
}

#[test]
fn test_text_content_concatenates_subtree() {
    let root = Element::row()
        .child(Element::text("a"))
        .child(Element::col().child(Element::text("b")).child(Element::text("c")));
    assert_eq!(root.text_content(), "abc");
}

#[test]
fn test_mark_focused_sets_flag_on_target() {
    let mut root = form();
    assert!(root.mark_focused("remember"));
    assert!(find_element(&root, "remember").is_some_and(|el| el.focused));
    assert!(find_element(&root, "email").is_some_and(|el| !el.focused));

    assert!(!root.mark_focused("missing"));
}
