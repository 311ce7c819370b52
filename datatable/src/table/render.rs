//! Element builders for the table parts.
//!
//! Everything here is pure: handlers are registered separately in `events`.

use celldom::{Element, Style, Tag, TextAlign};

use super::action::{Action, ActionLayout};
use super::column::Column;
use super::ids;
use super::pagination::{PageEntry, Pager};
use crate::record::Record;

pub const ACTIONS_HEADER: &str = "Actions";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";
/// Visible content of the disclosure trigger.
pub const MENU_GLYPH: &str = "⋯";
/// Accessible label of the disclosure trigger.
pub const MENU_LABEL: &str = "Open menu";
pub const PREVIOUS_LABEL: &str = "‹ Previous";
pub const NEXT_LABEL: &str = "Next ›";
pub const ELLIPSIS: &str = "…";

pub fn header_row(columns: &[Column], layout: ActionLayout) -> Element {
    let mut row = Element::new(Tag::Row).children(columns.iter().map(|column| {
        Element::new(Tag::HeaderCell)
            .maybe_class(column.class.as_deref())
            .child(Element::text(&column.header))
    }));

    if layout.has_column() {
        row = row.child(
            Element::new(Tag::HeaderCell)
                .text_align(TextAlign::Right)
                .child(Element::text(ACTIONS_HEADER)),
        );
    }

    row
}

/// One body row: a cell per column in column order, then the actions cell.
pub fn data_row(
    table_id: &str,
    index: usize,
    row: &Record,
    columns: &[Column],
    actions: &[Action],
    open_menu: Option<usize>,
) -> Element {
    let mut element = Element::new(Tag::Row)
        .id(ids::row(table_id, index))
        .children(columns.iter().map(|column| {
            Element::new(Tag::Cell)
                .maybe_class(column.class.as_deref())
                .child(column.resolve(row))
        }));

    if let Some(trigger) = render_actions(table_id, index, actions, open_menu) {
        element = element.child(
            Element::new(Tag::Cell)
                .text_align(TextAlign::Right)
                .child(trigger),
        );
    }

    element
}

/// Trigger element(s) for one row, or `None` when there are no actions.
pub fn render_actions(
    table_id: &str,
    row_index: usize,
    actions: &[Action],
    open_menu: Option<usize>,
) -> Option<Element> {
    match ActionLayout::for_actions(actions) {
        ActionLayout::None => None,
        ActionLayout::Inline => actions.first().map(|action| {
            let content = action.icon.as_deref().unwrap_or(&action.label);
            Element::button(content)
                .id(ids::row_action(table_id, row_index))
                .label(&action.label)
                .style(action.variant.style())
        }),
        ActionLayout::Menu => {
            let open = open_menu == Some(row_index);
            let trigger = Element::button(MENU_GLYPH)
                .id(ids::menu_trigger(table_id, row_index))
                .label(MENU_LABEL)
                .active(open)
                .data("expanded", open.to_string());

            if !open {
                return Some(trigger);
            }

            let items = actions.iter().enumerate().map(|(index, action)| {
                let mut item = Element::new(Tag::MenuItem)
                    .id(ids::menu_item(table_id, row_index, index))
                    .clickable(true)
                    .label(&action.label)
                    .style(action.variant.style())
                    .gap(1);
                if let Some(icon) = &action.icon {
                    item = item.child(Element::text(icon));
                }
                item.child(Element::text(&action.label))
            });

            Some(
                Element::row().child(trigger).child(
                    Element::new(Tag::Menu)
                        .id(ids::menu(table_id, row_index))
                        .direction(celldom::Direction::Row)
                        .children(items),
                ),
            )
        }
    }
}

/// `page_size` placeholder rows shaped like real rows.
pub fn render_skeleton(
    table_id: &str,
    column_count: usize,
    actions_present: bool,
    page_size: usize,
) -> Vec<Element> {
    let cells = column_count + usize::from(actions_present);
    (0..page_size)
        .map(|index| {
            Element::new(Tag::Row)
                .id(ids::skeleton_row(table_id, index))
                .children((0..cells).map(|_| Element::new(Tag::Cell).child(Element::skeleton())))
        })
        .collect()
}

/// The single full-width row shown when there is nothing to display.
pub fn empty_row(table_id: &str, content: Option<Element>, span: usize) -> Element {
    let content = content.unwrap_or_else(|| {
        Element::text(DEFAULT_EMPTY_MESSAGE).style(Style::new().dim())
    });
    let span = u16::try_from(span).unwrap_or(u16::MAX);

    Element::new(Tag::Row).id(ids::empty(table_id)).child(
        Element::new(Tag::Cell)
            .colspan(span)
            .text_align(TextAlign::Center)
            .child(content),
    )
}

/// Previous, page window and next controls; `None` for a single page.
pub fn pagination_nav(table_id: &str, pager: &Pager) -> Option<Element> {
    if !pager.is_paginated() {
        return None;
    }

    let previous = Element::button(PREVIOUS_LABEL)
        .id(ids::previous(table_id))
        .disabled(!pager.has_previous());
    let next = Element::button(NEXT_LABEL)
        .id(ids::next(table_id))
        .disabled(!pager.has_next());

    let entries = pager.window().into_iter().map(|entry| match entry {
        PageEntry::Page { number, active } => Element::button(number.to_string())
            .id(ids::page(table_id, number))
            .active(active),
        PageEntry::Ellipsis(_) => Element::new(Tag::Ellipsis).child(Element::text(ELLIPSIS)),
    });

    Some(
        Element::new(Tag::Nav)
            .id(ids::nav(table_id))
            .direction(celldom::Direction::Row)
            .child(previous)
            .children(entries)
            .child(next),
    )
}
