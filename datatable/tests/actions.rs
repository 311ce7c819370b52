use std::cell::RefCell;
use std::rc::Rc;

use celldom::element::{find_by_tag, find_element};
use celldom::{Element, Tag, find_clickable};
use datatable::prelude::*;
use datatable::table::render::{MENU_GLYPH, MENU_LABEL};

type Log = Rc<RefCell<Vec<String>>>;

fn rows() -> Vec<Record> {
    vec![
        Record::new().set("id", "1").set("code", "EDU"),
        Record::new().set("id", "2").set("code", "SPT"),
    ]
}

fn logging_action(label: &'static str, log: &Log) -> Action {
    let log = Rc::clone(log);
    Action::new(label, move |row| {
        let id = row.get_str("id").unwrap_or("?");
        log.borrow_mut().push(format!("{label}:{id}"));
    })
}

struct Harness {
    registry: HandlerRegistry,
    menus: State<DataTableState>,
    actions: Vec<Action>,
}

impl Harness {
    fn new(actions: Vec<Action>) -> Self {
        Self {
            registry: HandlerRegistry::new(),
            menus: State::new(DataTableState::new()),
            actions,
        }
    }

    /// One render pass, clearing handlers from the previous one.
    fn render(&self) -> Element {
        self.registry.clear();
        DataTable::new(rows(), vec![Column::new("code", "Code")])
            .unwrap()
            .actions(self.actions.clone())
            .state(&self.menus)
            .build(&self.registry)
    }

    /// Click an element the way a host would: only rendered, enabled triggers.
    fn click(&self, root: &Element, id: &str) -> bool {
        find_clickable(root, id).is_some() && self.registry.dispatch(id, ON_CLICK)
    }
}

// ============================================================================
// Single action
// ============================================================================

#[test]
fn test_single_action_renders_inline_trigger() {
    let log = Log::default();
    let harness = Harness::new(vec![logging_action("Edit", &log).icon("✎")]);
    let root = harness.render();

    let trigger = find_element(&root, "table-row-0-action").unwrap();
    assert_eq!(trigger.tag, Tag::Button);
    assert_eq!(trigger.text_content(), "✎");
    assert_eq!(trigger.label.as_deref(), Some("Edit"));
    assert!(find_element(&root, "table-row-0-menu").is_none());
    assert!(find_by_tag(&root, Tag::Menu).is_empty());
}

#[test]
fn test_single_action_without_icon_shows_label() {
    let log = Log::default();
    let harness = Harness::new(vec![logging_action("Edit", &log)]);
    let root = harness.render();

    let trigger = find_element(&root, "table-row-1-action").unwrap();
    assert_eq!(trigger.text_content(), "Edit");
}

#[test]
fn test_single_action_invokes_handler_with_row() {
    let log = Log::default();
    let harness = Harness::new(vec![logging_action("Edit", &log)]);
    let root = harness.render();

    assert!(harness.click(&root, "table-row-1-action"));
    assert!(harness.click(&root, "table-row-0-action"));
    assert_eq!(*log.borrow(), vec!["Edit:2", "Edit:1"]);
    assert_eq!(harness.menus.get().open_menu(), None);
}

#[test]
fn test_single_action_uses_variant_style() {
    let log = Log::default();
    let harness = Harness::new(vec![
        logging_action("Delete", &log).variant(Variant::Destructive),
    ]);
    let root = harness.render();

    let trigger = find_element(&root, "table-row-0-action").unwrap();
    assert_eq!(trigger.style, Variant::Destructive.style());
    assert_eq!(Action::new("x", |_| {}).variant, Variant::Ghost);
}

// ============================================================================
// Menu
// ============================================================================

fn menu_harness(log: &Log) -> Harness {
    Harness::new(vec![
        logging_action("Edit", log).icon("✎"),
        logging_action("Delete", log),
    ])
}

#[test]
fn test_multiple_actions_render_closed_disclosure_triggers() {
    let log = Log::default();
    let harness = menu_harness(&log);
    let root = harness.render();

    for row in 0..2 {
        let trigger = find_element(&root, &format!("table-row-{row}-menu")).unwrap();
        assert_eq!(trigger.text_content(), MENU_GLYPH);
        assert_eq!(trigger.label.as_deref(), Some(MENU_LABEL));
        assert!(!trigger.active);
    }
    assert!(find_by_tag(&root, Tag::Menu).is_empty());
    assert!(find_element(&root, "table-row-0-action").is_none());
}

#[test]
fn test_opening_second_menu_closes_first() {
    let log = Log::default();
    let harness = menu_harness(&log);

    let root = harness.render();
    assert!(harness.click(&root, "table-row-0-menu"));
    assert_eq!(harness.menus.get().open_menu(), Some(0));

    let root = harness.render();
    assert_eq!(find_by_tag(&root, Tag::Menu).len(), 1);
    assert!(find_element(&root, "table-row-0-menu-items").is_some());

    assert!(harness.click(&root, "table-row-1-menu"));
    assert_eq!(harness.menus.get().open_menu(), Some(1));

    let root = harness.render();
    let menus = find_by_tag(&root, Tag::Menu);
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].id, "table-row-1-menu-items");
    assert!(find_element(&root, "table-row-1-menu").unwrap().active);
    assert!(!find_element(&root, "table-row-0-menu").unwrap().active);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_clicking_open_trigger_closes_menu() {
    let log = Log::default();
    let harness = menu_harness(&log);

    let root = harness.render();
    harness.click(&root, "table-row-0-menu");
    let root = harness.render();
    harness.click(&root, "table-row-0-menu");

    assert_eq!(harness.menus.get().open_menu(), None);
    assert!(find_by_tag(&harness.render(), Tag::Menu).is_empty());
}

#[test]
fn test_menu_items_list_every_action_with_icon() {
    let log = Log::default();
    let harness = menu_harness(&log);

    let root = harness.render();
    harness.click(&root, "table-row-1-menu");
    let root = harness.render();

    let items: Vec<String> = find_by_tag(&root, Tag::MenuItem)
        .iter()
        .map(|item| item.text_content())
        .collect();
    assert_eq!(items, vec!["✎ Edit", "Delete"]);
}

#[test]
fn test_selecting_item_closes_menu_and_runs_action() {
    let log = Log::default();
    let harness = menu_harness(&log);

    let root = harness.render();
    harness.click(&root, "table-row-1-menu");
    let root = harness.render();

    assert!(harness.click(&root, "table-row-1-action-1"));
    assert_eq!(*log.borrow(), vec!["Delete:2"]);
    assert_eq!(harness.menus.get().open_menu(), None);
}

#[test]
fn test_items_of_closed_menu_are_not_clickable() {
    let log = Log::default();
    let harness = menu_harness(&log);

    let root = harness.render();
    assert!(!harness.click(&root, "table-row-0-action-0"));
    assert!(!harness.registry.dispatch("table-row-0-action-0", ON_CLICK));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_fresh_state_has_no_open_menu() {
    let log = Log::default();
    let harness = menu_harness(&log);
    let root = harness.render();
    harness.click(&root, "table-row-0-menu");

    // A remount starts from a fresh state.
    let remounted = Harness::new(harness.actions.clone());
    assert_eq!(remounted.menus.get().open_menu(), None);
    assert!(find_by_tag(&remounted.render(), Tag::Menu).is_empty());
}

// ============================================================================
// DataTableState
// ============================================================================

#[test]
fn test_state_set_open_ignores_close_from_other_row() {
    let mut state = DataTableState::new();
    state.set_open(2, true);
    state.set_open(1, false);
    assert_eq!(state.open_menu(), Some(2));

    state.set_open(2, false);
    assert_eq!(state.open_menu(), None);
}

#[test]
fn test_state_open_replaces_previous() {
    let mut state = DataTableState::new();
    state.open(0);
    state.open(3);
    assert!(state.is_open(3));
    assert!(!state.is_open(0));

    state.toggle(3);
    assert_eq!(state.open_menu(), None);
}

// ============================================================================
// Menus across page changes
// ============================================================================

fn render_page(
    registry: &HandlerRegistry,
    menus: &State<DataTableState>,
    current: &State<u32>,
    actions: &[Action],
) -> Element {
    registry.clear();
    let target = current.clone();
    DataTable::new(rows(), vec![Column::new("code", "Code")])
        .unwrap()
        .actions(actions.to_vec())
        .current_page(current.get())
        .total_pages(3)
        .on_page_change(move |page| target.set(page))
        .state(menus)
        .build(registry)
}

#[test]
fn test_page_change_closes_open_menu() {
    let log = Log::default();
    let actions = vec![logging_action("Edit", &log), logging_action("Delete", &log)];
    let registry = HandlerRegistry::new();
    let menus = State::new(DataTableState::new());
    let current = State::new(1u32);

    render_page(&registry, &menus, &current, &actions);
    assert!(registry.dispatch("table-row-0-menu", ON_CLICK));
    let root = render_page(&registry, &menus, &current, &actions);
    assert!(find_clickable(&root, "table-row-0-action-0").is_some());

    assert!(registry.dispatch("table-page-2", ON_CLICK));
    assert_eq!(current.get(), 2);
    assert_eq!(menus.get().open_menu(), None);

    let root = render_page(&registry, &menus, &current, &actions);
    assert!(find_clickable(&root, "table-row-0-action-0").is_none());
    assert!(!registry.dispatch("table-row-0-action-0", ON_CLICK));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_rejected_page_request_keeps_menu_open() {
    let log = Log::default();
    let actions = vec![logging_action("Edit", &log), logging_action("Delete", &log)];
    let registry = HandlerRegistry::new();
    let menus = State::new(DataTableState::new());
    let current = State::new(1u32);

    render_page(&registry, &menus, &current, &actions);
    registry.dispatch("table-row-1-menu", ON_CLICK);
    render_page(&registry, &menus, &current, &actions);

    // Previous on page 1 targets page 0, which is dropped
    assert!(registry.dispatch("table-prev", ON_CLICK));
    assert_eq!(current.get(), 1);
    assert_eq!(menus.get().open_menu(), Some(1));
}
