//! Element ids of everything the table renders.
//!
//! Ids are derived from the table id so handlers registered during a render
//! line up with the elements of that same render.

pub fn table(table_id: &str) -> String {
    format!("{table_id}-table")
}

pub fn nav(table_id: &str) -> String {
    format!("{table_id}-nav")
}

pub fn page(table_id: &str, number: u32) -> String {
    format!("{table_id}-page-{number}")
}

pub fn previous(table_id: &str) -> String {
    format!("{table_id}-prev")
}

pub fn next(table_id: &str) -> String {
    format!("{table_id}-next")
}

pub fn row(table_id: &str, row: usize) -> String {
    format!("{table_id}-row-{row}")
}

pub fn skeleton_row(table_id: &str, row: usize) -> String {
    format!("{table_id}-skeleton-{row}")
}

pub fn empty(table_id: &str) -> String {
    format!("{table_id}-empty")
}

pub fn row_action(table_id: &str, row: usize) -> String {
    format!("{table_id}-row-{row}-action")
}

pub fn menu_trigger(table_id: &str, row: usize) -> String {
    format!("{table_id}-row-{row}-menu")
}

pub fn menu(table_id: &str, row: usize) -> String {
    format!("{table_id}-row-{row}-menu-items")
}

pub fn menu_item(table_id: &str, row: usize, action: usize) -> String {
    format!("{table_id}-row-{row}-action-{action}")
}
