use super::*;

// =============================================================
// Selector rendering
// =============================================================

#[test]
fn selector_to_css_renders_each_form() {
    assert_eq!(Selector::Tag("form").to_css(), "form");
    assert_eq!(Selector::Class("nav-link").to_css(), ".nav-link");
    assert_eq!(Selector::TagClass("table", "table").to_css(), "table.table");
    assert_eq!(Selector::TagAttr { tag: "input", attr: "required", value: None }.to_css(), "input[required]");
    assert_eq!(
        Selector::TagAttr { tag: "input", attr: "type", value: Some("search") }.to_css(),
        "input[type=\"search\"]"
    );
}

#[test]
fn selector_any_of_joins_parts() {
    let parts = [Selector::Tag("a"), Selector::Tag("button")];
    assert_eq!(Selector::AnyOf(&parts).to_css(), "a, button");
    assert_eq!(Selector::AnyOf(&parts).to_string(), "a, button");
}

// =============================================================
// MemoryDom queries
// =============================================================

#[test]
fn query_all_returns_document_order() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let first = dom.append(root, "div");
    let nested = dom.append(first, "p");
    let second = dom.append(root, "p");

    assert_eq!(dom.query_all(None, &Selector::Tag("p")), vec![nested, second]);
    assert_eq!(dom.query_all(Some(&first), &Selector::Tag("p")), vec![nested]);
    assert_eq!(dom.query(None, &Selector::Tag("div")), Some(first));
}

#[test]
fn query_all_excludes_scope_itself() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let div = dom.append(root, "div");
    assert!(dom.query_all(Some(&div), &Selector::Tag("div")).is_empty());
}

#[test]
fn matches_tag_attr_with_and_without_value() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let input = dom.append(root, "input");
    dom.set_attribute(&input, "type", "search");

    assert!(dom.matches(&input, &Selector::TagAttr { tag: "input", attr: "type", value: None }));
    assert!(dom.matches(&input, &Selector::TagAttr { tag: "input", attr: "type", value: Some("search") }));
    assert!(!dom.matches(&input, &Selector::TagAttr { tag: "input", attr: "type", value: Some("text") }));
    assert!(!dom.matches(&input, &Selector::TagAttr { tag: "input", attr: "name", value: None }));
}

#[test]
fn closest_walks_inclusive_ancestors() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let form = dom.append(root, "form");
    let label = dom.append(form, "label");
    let input = dom.append(label, "input");

    assert_eq!(dom.closest(&input, &Selector::Tag("form")), Some(form));
    assert_eq!(dom.closest(&input, &Selector::Tag("input")), Some(input));
    assert_eq!(dom.closest(&input, &Selector::Tag("table")), None);
}

// =============================================================
// MemoryDom mutation
// =============================================================

#[test]
fn classes_are_deduplicated_and_removable() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let el = dom.append(root, "div");
    dom.add_class(&el, "alert");
    dom.add_class(&el, "alert");
    dom.add_class(&el, "fade-in");
    assert_eq!(dom.classes(el), vec!["alert".to_owned(), "fade-in".to_owned()]);

    dom.remove_class(&el, "alert");
    assert!(!dom.has_class(&el, "alert"));
    assert!(dom.has_class(&el, "fade-in"));
}

#[test]
fn text_concatenates_descendants_and_set_text_replaces_children() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let cell = dom.append(root, "td");
    let link = dom.append_text(cell, "a", "Don ");
    dom.append_text(cell, "span", "Quijote");
    assert_eq!(dom.text(&cell), "Don Quijote");

    dom.set_text(&cell, "Hamlet");
    assert_eq!(dom.text(&cell), "Hamlet");
    assert!(dom.children(&cell).is_empty());
    assert!(!dom.is_connected(&link));
}

#[test]
fn append_child_moves_existing_nodes() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let body = dom.append(root, "tbody");
    let a = dom.append(body, "tr");
    let b = dom.append(body, "tr");

    dom.append_child(&body, &a);
    assert_eq!(dom.children(&body), vec![b, a]);
}

#[test]
fn prepend_child_inserts_before_first() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let region = dom.append(root, "div");
    let older = dom.append(region, "p");
    let newer = dom.create_element("p").expect("memory tree creates any tag");
    dom.prepend_child(&region, &newer);
    assert_eq!(dom.children(&region), vec![newer, older]);
}

#[test]
fn append_child_refuses_cycles() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let outer = dom.append(root, "div");
    let inner = dom.append(outer, "div");
    dom.append_child(&inner, &outer);
    assert_eq!(dom.parent(&inner), Some(outer));
    assert_eq!(dom.parent(&outer), Some(root));
}

#[test]
fn remove_disconnects_subtree() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let outer = dom.append(root, "div");
    let inner = dom.append(outer, "span");
    assert!(dom.is_connected(&inner));

    dom.remove(&outer);
    assert!(!dom.is_connected(&outer));
    assert!(!dom.is_connected(&inner));
    assert!(dom.contains(&outer, &inner));
}

#[test]
fn disabled_and_required_read_attributes() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let button = dom.append(root, "button");
    assert!(!dom.is_disabled(&button));
    dom.set_disabled(&button, true);
    assert!(dom.is_disabled(&button));
    dom.set_disabled(&button, false);
    assert!(!dom.is_disabled(&button));

    let input = dom.append(root, "input");
    assert!(!dom.is_required(&input));
    dom.set_attribute(&input, "required", "");
    assert!(dom.is_required(&input));
}

#[test]
fn submit_and_activate_are_recorded() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let form = dom.append(root, "form");
    let link = dom.append(root, "a");
    dom.submit(&form);
    dom.activate(&link);
    assert_eq!(dom.submissions(), &[form]);
    assert_eq!(dom.activations(), &[link]);
}

#[test]
fn styles_set_and_remove() {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let card = dom.append(root, "div");
    dom.set_style(&card, "height", "320px");
    assert_eq!(dom.style(card, "height"), Some("320px"));
    dom.remove_style(&card, "height");
    assert_eq!(dom.style(card, "height"), None);
}

#[test]
fn memory_tree_compares_text_with_native_collation() {
    let dom = MemoryDom::new();
    assert_eq!(dom.compare_text("łukasz", "mora"), std::cmp::Ordering::Less);
    assert_eq!(dom.compare_text("ñandú", "nube"), std::cmp::Ordering::Greater);
}
