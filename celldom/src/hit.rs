use crate::element::{find_element, Content, Element};

/// Find the clickable, enabled element with the given id.
///
/// Disabled triggers and plain elements resolve to `None`, so a click on them
/// never reaches a handler.
pub fn find_clickable<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    find_element(root, id).filter(|element| element.clickable && !element.disabled)
}

/// Ids of all clickable, enabled elements in document order.
pub fn collect_clickable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect(root, &mut ids);
    ids
}

fn collect(element: &Element, ids: &mut Vec<String>) {
    if element.clickable && !element.disabled {
        ids.push(element.id.clone());
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect(child, ids);
        }
    }
}
