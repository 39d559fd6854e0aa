//! Click-to-sort table headers and whole-row links.
//!
//! Sorting moves the existing row elements; nothing is re-created, so any
//! listeners or markers on rows survive. The only state is the `asc`/`desc`
//! marker on the header last clicked, and at most one header per table
//! carries one.

#[cfg(test)]
#[path = "table_sorter_test.rs"]
mod table_sorter_test;

use crate::consts::{NO_SORT, TABLE_CLASS};
use crate::dom::{Dom, Selector};
use crate::page::{EventKind, Handler, Page};
use crate::state::sort::SortState;
use crate::util::collate::sort_key;

const INTERACTIVE_PARTS: [Selector<'static>; 2] = [Selector::Tag("a"), Selector::Tag("button")];
const INTERACTIVE: Selector<'static> = Selector::AnyOf(&INTERACTIVE_PARTS);
const CELL_PARTS: [Selector<'static>; 2] = [Selector::Tag("td"), Selector::Tag("th")];
const CELL: Selector<'static> = Selector::AnyOf(&CELL_PARTS);
const ROW_GROUP_PARTS: [Selector<'static>; 2] = [Selector::Tag("tbody"), Selector::Tag("tfoot")];
const ROW_GROUP: Selector<'static> = Selector::AnyOf(&ROW_GROUP_PARTS);

pub(crate) fn attach<D: Dom>(page: &mut Page<D>) -> usize {
    let mut sortable = 0;
    for table in page.dom.query_all(None, &Selector::Class(TABLE_CLASS)) {
        for row in body_rows(&page.dom, &table) {
            if page.dom.query(Some(&row), &Selector::Tag("a")).is_some() {
                page.dom.set_style(&row, "cursor", "pointer");
                page.listen(row, EventKind::Click, Handler::RowClick);
            }
        }
        for (column, header) in headers(&page.dom, &table).into_iter().enumerate() {
            if page.dom.has_class(&header, NO_SORT) {
                continue;
            }
            page.dom.set_style(&header, "cursor", "pointer");
            page.listen(header, EventKind::Click, Handler::SortColumn { column });
            sortable += 1;
        }
    }
    sortable
}

/// Column headers of `table`: the `th` cells of its `thead`, or without one,
/// every `th` outside the body and footer.
fn headers<D: Dom>(dom: &D, table: &D::Node) -> Vec<D::Node> {
    if let Some(thead) = dom.query(Some(table), &Selector::Tag("thead")) {
        return dom.query_all(Some(&thead), &Selector::Tag("th"));
    }
    dom.query_all(Some(table), &Selector::Tag("th"))
        .into_iter()
        .filter(|th| dom.closest(th, &ROW_GROUP).is_none_or(|group| !dom.contains(table, &group)))
        .collect()
}

fn body<D: Dom>(dom: &D, table: &D::Node) -> Option<D::Node> {
    dom.query(Some(table), &Selector::Tag("tbody"))
}

fn body_rows<D: Dom>(dom: &D, table: &D::Node) -> Vec<D::Node> {
    body(dom, table).map_or_else(Vec::new, |tbody| {
        dom.children(&tbody).into_iter().filter(|row| dom.matches(row, &Selector::Tag("tr"))).collect()
    })
}

fn cell_key<D: Dom>(dom: &D, row: &D::Node, column: usize) -> String {
    dom.children(row)
        .into_iter()
        .filter(|cell| dom.matches(cell, &CELL))
        .nth(column)
        .map(|cell| sort_key(&dom.text(&cell)))
        .unwrap_or_default()
}

pub(crate) fn on_header_click<D: Dom>(page: &mut Page<D>, header: &D::Node, column: usize) {
    let Some(table) = page.dom.closest(header, &Selector::Tag("table")) else {
        return;
    };
    let Some(tbody) = body(&page.dom, &table) else {
        return;
    };
    let direction = SortState::read(&page.dom, header).toggled();
    sort_table(&mut page.dom, &table, &tbody, column, direction);
    direction.project(&mut page.dom, header);
    log::debug!("table sorted: column={column} direction={direction:?}");
}

/// Clear every header marker, then stable-sort body rows by `column`.
fn sort_table<D: Dom>(dom: &mut D, table: &D::Node, tbody: &D::Node, column: usize, direction: SortState) {
    for th in headers(dom, table) {
        SortState::Unsorted.project(dom, &th);
    }

    let mut keyed = body_rows(dom, table)
        .into_iter()
        .map(|row| (cell_key(dom, &row, column), row))
        .collect::<Vec<_>>();
    keyed.sort_by(|(a, _), (b, _)| direction.orient(dom.compare_text(a, b)));

    for (_, row) in &keyed {
        dom.append_child(tbody, row);
    }
}

pub(crate) fn on_row_click<D: Dom>(page: &mut Page<D>, row: &D::Node, target: &D::Node) {
    if let Some(hit) = page.dom.closest(target, &INTERACTIVE) {
        if page.dom.contains(row, &hit) {
            return;
        }
    }
    if let Some(link) = page.dom.query(Some(row), &Selector::Tag("a")) {
        page.dom.activate(&link);
    }
}
