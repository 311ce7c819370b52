mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::types::Tag;

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

/// Collect every element with the given tag, in document order.
pub fn find_by_tag(root: &Element, tag: Tag) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_by_tag(root, tag, &mut found);
    found
}

fn collect_by_tag<'a>(element: &'a Element, tag: Tag, found: &mut Vec<&'a Element>) {
    if element.tag == tag {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_by_tag(child, tag, found);
    }
}
