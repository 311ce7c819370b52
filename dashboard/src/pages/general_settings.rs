//! General Settings page: tab strip, search box and the settings table.
//!
//! The page owns filtering and pagination. It hands the table one page of
//! already-filtered rows plus the current/total page counters.

use std::rc::Rc;

use celldom::{Element, Style};
use datatable::prelude::*;
use datatable::table::PLACEHOLDER;
use log::{debug, info, warn};

use crate::error::AppError;
use crate::filter::filter_records;
use crate::navigation::{
    self, GENERAL_SETTINGS_CRUMBS, GENERAL_SETTINGS_TABS, ORGANIZATION_TYPE_TAB, Tab,
};

const ORGANIZATION_TYPES: &str = include_str!("../../fixtures/organization_types.json");

const SEARCH_FIELDS: &[&str] = &["code", "name"];

pub const TABLE_ID: &str = "settings";
pub const ADD_BUTTON_ID: &str = "add-entry";
pub const FILTER_BUTTON_ID: &str = "filter";
pub const SEARCH_ID: &str = "search";

/// State shared with click handlers.
#[derive(Clone)]
struct PageState {
    organizations: State<Vec<Record>>,
    tab: State<Tab>,
    current_page: State<u32>,
    menus: State<DataTableState>,
    filter_active: State<bool>,
    status: State<Option<String>>,
}

impl PageState {
    fn select_tab(&self, tab: Tab) {
        if self.tab.get() == tab {
            return;
        }
        debug!("switching to tab {}", tab.value);
        self.tab.set(tab);
        self.current_page.set(1);
        self.menus.set(DataTableState::new());
    }

    fn edit(&self, row: &Record) {
        let code = row.get_str("code").unwrap_or(PLACEHOLDER);
        info!("edit requested for {code}");
        self.status.set(Some(format!("Editing {code}")));
    }

    fn delete(&self, row: &Record) {
        let code = row.get_str("code").unwrap_or(PLACEHOLDER).to_string();
        let id = row.get("id").cloned();
        self.organizations
            .update(|rows| rows.retain(|r| r.get("id") != id.as_ref()));
        info!("deleted {code}");
        self.status.set(Some(format!("Deleted {code}")));
    }
}

pub struct GeneralSettings {
    state: PageState,
    query: String,
    loading: bool,
    page_size: usize,
}

impl GeneralSettings {
    /// Create the page with the bundled organization types.
    ///
    /// An unknown `default_tab` falls back to Organization Type.
    pub fn new(page_size: usize, default_tab: &str) -> Result<Self, AppError> {
        let organizations: Vec<Record> = serde_json::from_str(ORGANIZATION_TYPES)?;
        let tab = navigation::find_tab(default_tab).copied().unwrap_or_else(|| {
            warn!(
                "unknown default tab {default_tab}, using {}",
                ORGANIZATION_TYPE_TAB.value
            );
            ORGANIZATION_TYPE_TAB
        });

        Ok(Self {
            state: PageState {
                organizations: State::new(organizations),
                tab: State::new(tab),
                current_page: State::new(1),
                menus: State::new(DataTableState::new()),
                filter_active: State::new(false),
                status: State::new(None),
            },
            query: String::new(),
            loading: false,
            page_size: page_size.max(1),
        })
    }

    pub fn active_tab(&self) -> Tab {
        self.state.tab.get()
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page.get()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> Option<String> {
        self.state.status.get()
    }

    pub fn organization_count(&self) -> usize {
        self.state.organizations.with(Vec::len)
    }

    /// Replace the search query. A new query starts again from page 1.
    pub fn set_query(&mut self, query: &str) {
        let query = query.trim();
        if query == self.query {
            return;
        }
        debug!("search query changed to {query:?}");
        self.query = query.to_string();
        self.state.current_page.set(1);
        self.state.menus.set(DataTableState::new());
    }

    pub fn select_tab(&self, value: &str) -> Result<(), AppError> {
        let tab = navigation::find_tab(value)
            .ok_or_else(|| AppError::UnknownTab(value.to_string()))?;
        self.state.select_tab(*tab);
        Ok(())
    }

    /// Toggle the loading placeholder. Returns the new loading flag.
    pub fn toggle_loading(&mut self) -> bool {
        self.loading = !self.loading;
        self.loading
    }

    /// Rows of the active tab matching the search query.
    fn matching_rows(&self) -> Vec<Record> {
        if self.state.tab.get() != ORGANIZATION_TYPE_TAB {
            return Vec::new();
        }
        self.state
            .organizations
            .with(|rows| filter_records(&self.query, rows, SEARCH_FIELDS))
    }

    /// Build the page element and register its click handlers.
    pub fn element(&self, registry: &HandlerRegistry) -> Result<Element, AppError> {
        let tab = self.state.tab.get();
        let requested = self.state.current_page.get();
        let (rows, current, total) = paginate(self.matching_rows(), self.page_size, requested);
        if current != requested {
            // Rows were removed from under the current page
            self.state.current_page.set(current);
        }

        let header = Element::col()
            .child(Element::text("General Settings").style(Style::new().bold()))
            .child(navigation::breadcrumb(GENERAL_SETTINGS_CRUMBS));

        let tabs = {
            let state = self.state.clone();
            navigation::tab_strip(GENERAL_SETTINGS_TABS, tab.value, registry, move |value| {
                if let Some(tab) = navigation::find_tab(value) {
                    state.select_tab(*tab);
                }
            })
        };

        let status = self
            .state
            .status
            .get()
            .map(|message| Element::text(message).style(Style::new().italic()));

        let table = self
            .table(tab, rows, current, total)?
            .state(&self.state.menus)
            .build(registry);

        Ok(Element::col()
            .id("general-settings")
            .gap(1)
            .child(header)
            .child(tabs)
            .child(self.toolbar(tab, registry))
            .children(status)
            .child(table))
    }

    fn toolbar(&self, tab: Tab, registry: &HandlerRegistry) -> Element {
        let add = Element::button(format!("Add {}", tab.label))
            .id(ADD_BUTTON_ID)
            .style(Variant::Default.style());
        let status = self.state.status.clone();
        registry.register(
            ADD_BUTTON_ID,
            ON_CLICK,
            Rc::new(move || {
                status.set(Some(format!("Adding {} is not available yet", tab.label)));
            }),
        );

        let search = Element::input(self.query.clone())
            .id(SEARCH_ID)
            .label("Search...");

        let filter_active = self.state.filter_active.get();
        let variant = if filter_active {
            Variant::Default
        } else {
            Variant::Secondary
        };
        let filter = Element::button("Filter")
            .id(FILTER_BUTTON_ID)
            .label("Filter")
            .active(filter_active)
            .style(variant.style());
        let toggle = self.state.filter_active.clone();
        registry.register(
            FILTER_BUTTON_ID,
            ON_CLICK,
            Rc::new(move || toggle.update(|active| *active = !*active)),
        );

        Element::row().id("toolbar").child(add).child(search).child(filter)
    }

    fn table(
        &self,
        tab: Tab,
        rows: Vec<Record>,
        current: u32,
        total: u32,
    ) -> Result<DataTable, AppError> {
        let columns = vec![
            Column::new("code", "Code").class("code").render(|row| match row.get_str("code") {
                Some(code) => Element::text(code).style(Style::new().bold()),
                None => Element::text(PLACEHOLDER).style(Style::new().dim()),
            }),
            Column::new("name", tab.label),
            Column::new("members", "Members"),
        ];

        let edit = {
            let state = self.state.clone();
            Action::new("Edit", move |row| state.edit(row)).icon("✎")
        };
        let delete = {
            let state = self.state.clone();
            Action::new("Delete", move |row| state.delete(row))
                .icon("✖")
                .variant(Variant::Destructive)
        };

        let message = if self.query.is_empty() {
            format!("No {} entries yet", tab.label)
        } else {
            format!("No {} entries match \"{}\"", tab.label, self.query)
        };

        let pages = self.state.current_page.clone();
        Ok(DataTable::new(rows, columns)?
            .id(TABLE_ID)
            .actions(vec![edit, delete])
            .page_size(self.page_size)
            .current_page(current)
            .total_pages(total)
            .on_page_change(move |page| pages.set(page))
            .loading(self.loading)
            .empty_state(Element::text(message).style(Style::new().dim())))
    }
}

/// Slice `rows` into the requested page.
///
/// Returns the page rows, the page actually shown (clamped into range) and
/// the page count, which is at least 1.
fn paginate(rows: Vec<Record>, page_size: usize, requested: u32) -> (Vec<Record>, u32, u32) {
    let page_size = page_size.max(1);
    let total = u32::try_from(rows.len().div_ceil(page_size).max(1)).unwrap_or(u32::MAX);
    let current = requested.clamp(1, total);
    let start = (current as usize - 1) * page_size;
    let page = rows.into_iter().skip(start).take(page_size).collect();
    (page, current, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    use celldom::{find_clickable, render_plain};

    fn screen(element: &Element) -> String {
        render_plain(element).join("\n")
    }

    fn rendered(page: &GeneralSettings, registry: &HandlerRegistry) -> Element {
        registry.clear();
        page.element(registry).unwrap()
    }

    fn numbered(count: usize) -> Vec<Record> {
        (0..count).map(|i| Record::new().set("id", i as i64)).collect()
    }

    #[test]
    fn test_paginate_slices_pages() {
        let (rows, current, total) = paginate(numbered(23), 10, 3);
        assert_eq!((rows.len(), current, total), (3, 3, 3));
        assert_eq!(rows[0].get("id"), Some(&Value::Int(20)));
    }

    #[test]
    fn test_paginate_empty_has_one_page() {
        let (rows, current, total) = paginate(Vec::new(), 10, 1);
        assert!(rows.is_empty());
        assert_eq!((current, total), (1, 1));
    }

    #[test]
    fn test_paginate_clamps_requested_page() {
        let (rows, current, total) = paginate(numbered(12), 10, 5);
        assert_eq!((rows.len(), current, total), (2, 2, 2));
    }

    #[test]
    fn test_first_page_of_organizations() {
        let page = GeneralSettings::new(10, "organization-type").unwrap();
        let registry = HandlerRegistry::new();
        let element = rendered(&page, &registry);
        let text = screen(&element);

        assert_eq!(page.organization_count(), 23);
        assert!(text.contains("Educational Institution"));
        assert!(!text.contains("Youth League"));
        assert!(find_clickable(&element, "settings-page-3").is_some());
        assert!(find_clickable(&element, "settings-page-4").is_none());
    }

    #[test]
    fn test_page_click_moves_page() {
        let page = GeneralSettings::new(10, "organization-type").unwrap();
        let registry = HandlerRegistry::new();
        rendered(&page, &registry);

        assert!(registry.dispatch("settings-page-2", ON_CLICK));
        assert_eq!(page.current_page(), 2);

        let text = screen(&rendered(&page, &registry));
        assert!(text.contains("Youth League"));
    }

    #[test]
    fn test_new_query_resets_to_first_page() {
        let mut page = GeneralSettings::new(10, "organization-type").unwrap();
        let registry = HandlerRegistry::new();
        rendered(&page, &registry);
        registry.dispatch("settings-page-3", ON_CLICK);
        assert_eq!(page.current_page(), 3);

        page.set_query("club");
        assert_eq!(page.current_page(), 1);
        assert_eq!(page.query(), "club");

        let element = rendered(&page, &registry);
        let text = screen(&element);
        assert!(text.contains("Sports Club"));
        assert!(!text.contains("Educational Institution"));
        assert!(find_clickable(&element, "settings-page-2").is_none());
    }

    #[test]
    fn test_query_without_matches_shows_message() {
        let mut page = GeneralSettings::new(10, "organization-type").unwrap();
        page.set_query("xq");
        let text = screen(&rendered(&page, &HandlerRegistry::new()));
        assert!(text.contains("No Organization Type entries match \"xq\""));
    }

    #[test]
    fn test_delete_from_row_menu() {
        let page = GeneralSettings::new(10, "organization-type").unwrap();
        let registry = HandlerRegistry::new();
        rendered(&page, &registry);

        // Menu items exist only while the menu is open
        assert!(!registry.dispatch("settings-row-0-action-1", ON_CLICK));
        assert!(registry.dispatch("settings-row-0-menu", ON_CLICK));
        rendered(&page, &registry);
        assert!(registry.dispatch("settings-row-0-action-1", ON_CLICK));

        assert_eq!(page.organization_count(), 22);
        assert_eq!(page.status().as_deref(), Some("Deleted EDU"));
        let text = screen(&rendered(&page, &registry));
        assert!(!text.contains("Educational Institution"));
    }

    #[test]
    fn test_edit_sets_status() {
        let page = GeneralSettings::new(10, "organization-type").unwrap();
        let registry = HandlerRegistry::new();
        rendered(&page, &registry);
        registry.dispatch("settings-row-1-menu", ON_CLICK);
        rendered(&page, &registry);
        registry.dispatch("settings-row-1-action-0", ON_CLICK);

        assert_eq!(page.status().as_deref(), Some("Editing CLB"));
        assert_eq!(page.organization_count(), 23);
    }

    #[test]
    fn test_deleting_last_row_of_last_page_moves_back() {
        let page = GeneralSettings::new(11, "organization-type").unwrap();
        let registry = HandlerRegistry::new();
        rendered(&page, &registry);
        registry.dispatch("settings-page-3", ON_CLICK);
        rendered(&page, &registry);
        registry.dispatch("settings-row-0-menu", ON_CLICK);
        rendered(&page, &registry);
        registry.dispatch("settings-row-0-action-1", ON_CLICK);

        rendered(&page, &registry);
        assert_eq!(page.current_page(), 2);
    }

    #[test]
    fn test_tab_click_switches_table() {
        let page = GeneralSettings::new(10, "organization-type").unwrap();
        let registry = HandlerRegistry::new();
        rendered(&page, &registry);

        assert!(registry.dispatch("tab-age-group", ON_CLICK));
        assert_eq!(page.active_tab().value, "age-group");

        let text = screen(&rendered(&page, &registry));
        assert!(text.contains("No Age Group entries yet"));
        assert!(text.contains("Add Age Group"));
    }

    #[test]
    fn test_unknown_tab_is_rejected() {
        let page = GeneralSettings::new(10, "organization-type").unwrap();
        assert!(matches!(page.select_tab("nope"), Err(AppError::UnknownTab(_))));
    }

    #[test]
    fn test_unknown_default_tab_falls_back() {
        let page = GeneralSettings::new(10, "bogus").unwrap();
        assert_eq!(page.active_tab(), ORGANIZATION_TYPE_TAB);
    }

    #[test]
    fn test_loading_hides_rows() {
        let mut page = GeneralSettings::new(3, "organization-type").unwrap();
        assert!(page.toggle_loading());
        let text = screen(&rendered(&page, &HandlerRegistry::new()));
        assert!(!text.contains("EDU"));
        assert_eq!(text.matches(celldom::render::SKELETON_FILL).count(), 3 * 4);
    }

    #[test]
    fn test_filter_button_toggles() {
        let page = GeneralSettings::new(10, "organization-type").unwrap();
        let registry = HandlerRegistry::new();
        let element = rendered(&page, &registry);
        assert!(!find_clickable(&element, FILTER_BUTTON_ID).unwrap().active);

        registry.dispatch(FILTER_BUTTON_ID, ON_CLICK);
        let element = rendered(&page, &registry);
        assert!(find_clickable(&element, FILTER_BUTTON_ID).unwrap().active);
    }
}
