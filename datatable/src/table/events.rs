//! Click handler registration for table triggers.

use std::rc::Rc;

use log::debug;

use super::action::{Action, ActionLayout};
use super::ids;
use super::pagination::Pager;
use super::state::DataTableState;
use super::PageChangeHandler;
use crate::handlers::{HandlerRegistry, ON_CLICK};
use crate::record::Record;
use crate::state::State;

/// Register page links plus previous/next.
///
/// Every request goes through [`Pager::request`], so a stale or disabled
/// control can never push an out-of-range page to the host. An accepted
/// request closes the open row menu, since row positions then refer to
/// other records.
pub(super) fn register_page_handlers(
    registry: &HandlerRegistry,
    table_id: &str,
    pager: Pager,
    on_change: &PageChangeHandler,
    state: &State<DataTableState>,
) {
    let targets = pager
        .window()
        .into_iter()
        .filter_map(|entry| entry.number())
        .map(|number| (ids::page(table_id, number), number))
        .chain([
            (ids::previous(table_id), pager.previous()),
            (ids::next(table_id), pager.next()),
        ]);

    for (element_id, page) in targets {
        let on_change = Rc::clone(on_change);
        let menu_state = state.clone();
        registry.register(
            &element_id,
            ON_CLICK,
            Rc::new(move || {
                if pager.contains(page) {
                    menu_state.update(DataTableState::close);
                }
                pager.request(page, &*on_change);
            }),
        );
    }
}

/// Register the triggers of one row.
///
/// Menu items are only registered while that row's menu is open, matching
/// what was rendered.
pub(super) fn register_row_handlers(
    registry: &HandlerRegistry,
    table_id: &str,
    row_index: usize,
    row: &Rc<Record>,
    actions: &[Action],
    state: &State<DataTableState>,
) {
    match ActionLayout::for_actions(actions) {
        ActionLayout::None => {}
        ActionLayout::Inline => {
            if let Some(action) = actions.first() {
                let action = action.clone();
                let row = Rc::clone(row);
                registry.register(
                    &ids::row_action(table_id, row_index),
                    ON_CLICK,
                    Rc::new(move || action.invoke(&row)),
                );
            }
        }
        ActionLayout::Menu => {
            let menu_state = state.clone();
            registry.register(
                &ids::menu_trigger(table_id, row_index),
                ON_CLICK,
                Rc::new(move || {
                    menu_state.update(|s| s.toggle(row_index));
                    debug!("menu of row {row_index} now {:?}", menu_state.get().open_menu());
                }),
            );

            if !state.with(|s| s.is_open(row_index)) {
                return;
            }

            for (index, action) in actions.iter().enumerate() {
                let action = action.clone();
                let row = Rc::clone(row);
                let menu_state = state.clone();
                registry.register(
                    &ids::menu_item(table_id, row_index, index),
                    ON_CLICK,
                    Rc::new(move || {
                        menu_state.update(DataTableState::close);
                        action.invoke(&row);
                    }),
                );
            }
        }
    }
}
