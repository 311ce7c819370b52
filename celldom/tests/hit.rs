use celldom::{collect_clickable, find_clickable, Element};

fn tree() -> Element {
    Element::col()
        .id("root")
        .child(Element::text("label").id("label"))
        .child(Element::button("ok").id("ok"))
        .child(Element::button("off").id("off").disabled(true))
        .child(Element::row().child(Element::button("nested").id("nested")))
}

#[test]
fn test_find_clickable_returns_enabled_button() {
    let root = tree();
    assert_eq!(find_clickable(&root, "ok").map(|e| e.id.as_str()), Some("ok"));
    assert_eq!(
        find_clickable(&root, "nested").map(|e| e.id.as_str()),
        Some("nested")
    );
}

#[test]
fn test_find_clickable_skips_disabled_and_plain() {
    let root = tree();
    assert!(find_clickable(&root, "off").is_none());
    assert!(find_clickable(&root, "label").is_none());
    assert!(find_clickable(&root, "missing").is_none());
}

#[test]
fn test_collect_clickable_in_document_order() {
    assert_eq!(collect_clickable(&tree()), vec!["ok", "nested"]);
}
