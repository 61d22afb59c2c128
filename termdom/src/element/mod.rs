mod content;
mod node;
mod query;

pub use content::Content;
pub use node::Element;
pub use query::{find_all, find_by_label, find_by_role, find_by_text};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}
