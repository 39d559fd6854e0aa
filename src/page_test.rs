use super::*;
use crate::dom::{MemoryDom, NodeId};

/// `form > input[required] + button[type=submit]` inside a `.container`,
/// plus a sortable table and a loan button.
fn full_page() -> (Page<MemoryDom>, NodeId, NodeId, NodeId) {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let region = dom.append(root, "div");
    dom.add_class(&region, "container");
    let form = dom.append(region, "form");
    let input = dom.append(form, "input");
    dom.set_attribute(&input, "required", "");
    let button = dom.append_text(form, "button", "Enviar");
    dom.set_attribute(&button, "type", "submit");

    let table = dom.append(region, "table");
    dom.add_class(&table, "table");
    let head = dom.append(table, "thead");
    let head_row = dom.append(head, "tr");
    dom.append_text(head_row, "th", "Titulo");
    dom.append(table, "tbody");

    let loan = dom.append_text(region, "button", "Solicitar");
    dom.add_class(&loan, "btn-prestamo");
    dom.set_attribute(&loan, "data-libro-id", "3");

    let mut page = Page::new(dom, UiConfig::default());
    page.attach(0);
    (page, region, form, input)
}

#[test]
fn event_kind_names_and_bubbling() {
    assert_eq!(EventKind::Focus.as_str(), "focus");
    assert_eq!(EventKind::Submit.as_str(), "submit");
    assert!(!EventKind::Focus.bubbles());
    assert!(!EventKind::Blur.bubbles());
    assert!(EventKind::Click.bubbles());
    assert!(EventKind::Input.bubbles());
}

#[test]
fn attach_registers_one_listener_per_concern() {
    let (page, ..) = full_page();
    let handlers = page.listeners().iter().map(|listener| listener.handler).collect::<Vec<_>>();
    // focus + blur for the input, the button is not a field.
    assert_eq!(handlers.iter().filter(|h| matches!(h, Handler::FieldFocus)).count(), 1);
    assert_eq!(handlers.iter().filter(|h| matches!(h, Handler::FieldBlur)).count(), 1);
    assert_eq!(handlers.iter().filter(|h| matches!(h, Handler::FormSubmit)).count(), 1);
    assert!(handlers.contains(&Handler::SortColumn { column: 0 }));
    assert!(handlers.contains(&Handler::LoanClick));
    assert_eq!(handlers.len(), 5);
}

#[test]
fn focus_does_not_reach_ancestors() {
    let (mut page, _, form, input) = full_page();
    // A focus listener on the form must not see a focus on the input.
    page.listen(form, EventKind::Focus, Handler::FieldFocus);
    page.dispatch(&input, EventKind::Focus, 0);
    assert!(page.dom().has_class(&input, "focused"));
    assert!(!page.dom().has_class(&form, "focused"));
}

#[test]
fn submit_bubbles_from_inner_target() {
    let (mut page, _, _, input) = full_page();
    assert_eq!(page.dispatch(&input, EventKind::Submit, 0), EventOutcome::PreventDefault);
    assert!(page.dom().has_class(&input, "is-invalid"));
}

#[test]
fn invoke_runs_a_single_listener_by_id() {
    let (mut page, _, _, input) = full_page();
    let id = page
        .listeners()
        .iter()
        .position(|listener| listener.handler == Handler::FieldFocus)
        .expect("focus listener");
    assert_eq!(page.invoke(id, &input, 0), EventOutcome::Continue);
    assert!(page.dom().has_class(&input, "focused"));
}

#[test]
fn unknown_listener_is_ignored() {
    let (mut page, _, _, input) = full_page();
    assert_eq!(page.invoke(1_000, &input, 0), EventOutcome::Continue);
}

#[test]
fn take_requests_drains_the_outbox() {
    let (mut page, region, ..) = full_page();
    let loan = page.dom().query(Some(&region), &crate::dom::Selector::Class("btn-prestamo")).expect("loan button");
    page.dispatch(&loan, EventKind::Click, 0);
    assert_eq!(page.take_requests().len(), 1);
    assert!(page.take_requests().is_empty());
    assert_eq!(page.in_flight(), 1);
}

#[test]
fn notify_goes_to_the_region() {
    let (mut page, region, ..) = full_page();
    let record = page.notify("Hola", Severity::Info, 0).expect("region");
    let first = page.dom().children(&region)[0];
    assert_eq!(page.dom().attribute(&first, "data-notification-id"), Some(record.id.to_string()));
    assert_eq!(page.next_deadline(), Some(5_000));
}

#[test]
fn run_due_reports_nothing_when_idle() {
    let (mut page, ..) = full_page();
    assert_eq!(page.run_due(u64::MAX), 0);
}
