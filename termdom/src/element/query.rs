//! Tree queries modelled on how a person finds things on screen:
//! by role, by visible text, by label.

use super::{find_element, Content, Element};
use crate::types::Role;

/// Collect every element in tree order matching `predicate`.
pub fn find_all<'a>(root: &'a Element, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut result = Vec::new();
    find_all_recursive(root, &predicate, &mut result);
    result
}

fn find_all_recursive<'a>(
    element: &'a Element,
    predicate: &dyn Fn(&Element) -> bool,
    result: &mut Vec<&'a Element>,
) {
    if predicate(element) {
        result.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            find_all_recursive(child, predicate, result);
        }
    }
}

/// All elements with the given role, in tree order.
pub fn find_by_role(root: &Element, role: Role) -> Vec<&Element> {
    find_all(root, |el| el.role == role)
}

/// First element whose own text is exactly `text`.
pub fn find_by_text<'a>(root: &'a Element, text: &str) -> Option<&'a Element> {
    find_all(root, |el| matches!(&el.content, Content::Text(t) if t == text))
        .into_iter()
        .next()
}

/// Find the control named `label`.
///
/// An `aria.label` match wins; otherwise a [`Role::Label`] element whose text
/// is `label` resolves to the element its `label_for` points at.
pub fn find_by_label<'a>(root: &'a Element, label: &str) -> Option<&'a Element> {
    if let Some(el) = find_all(root, |el| el.aria.label.as_deref() == Some(label))
        .into_iter()
        .next()
    {
        return Some(el);
    }

    find_by_role(root, Role::Label)
        .into_iter()
        .filter(|el| el.text_content() == label)
        .find_map(|el| {
            el.aria
                .label_for
                .as_deref()
                .and_then(|target| find_element(root, target))
        })
}
