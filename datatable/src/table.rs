//! Data table widget: rows, columns, row actions and page navigation.
//!
//! Each render pass is in one of three shapes: loading (placeholder rows),
//! empty (a single message row) or populated (one row per record). The page
//! selector is computed on every pass regardless of which shape applies.

mod action;
mod column;
mod events;
pub mod ids;
mod pagination;
pub mod render;
mod state;

use std::rc::Rc;

pub use action::{Action, ActionHandler, ActionLayout, Variant};
pub use column::{CellRenderer, CellSource, Column, PLACEHOLDER, validate_columns};
pub use pagination::{Edge, MAX_VISIBLE_PAGES, PageEntry, Pager, compute_window};
pub use state::DataTableState;

use celldom::{Element, Tag};
use log::trace;

use crate::error::TableError;
use crate::handlers::HandlerRegistry;
use crate::record::Record;
use crate::state::State;

/// Receives the new page number after a valid navigation request.
pub type PageChangeHandler = Rc<dyn Fn(u32)>;

pub const DEFAULT_PAGE_SIZE: usize = 10;

// =============================================================================
// DataTable Widget
// =============================================================================

/// Typestate marker: table needs a state reference.
pub struct NeedsState;

/// Typestate marker: table has a state reference.
pub struct HasTableState<'a>(pub(crate) &'a State<DataTableState>);

/// A data table builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let menus = State::new(DataTableState::new());
/// let element = DataTable::new(rows, vec![Column::new("code", "Code")])?
///     .action(Action::new("Edit", |row| edit(row)))
///     .current_page(2)
///     .total_pages(7)
///     .on_page_change(move |page| current.set(page))
///     .state(&menus)
///     .build(&registry);
/// ```
pub struct DataTable<S = NeedsState> {
    state_marker: S,
    id: String,
    data: Vec<Record>,
    columns: Vec<Column>,
    actions: Vec<Action>,
    page_size: usize,
    current_page: u32,
    total_pages: u32,
    on_page_change: PageChangeHandler,
    loading: bool,
    empty_state: Option<Element>,
}

impl DataTable<NeedsState> {
    /// Create a table over `data` with the given columns.
    ///
    /// Fails if two columns share a key.
    pub fn new(data: Vec<Record>, columns: Vec<Column>) -> Result<Self, TableError> {
        validate_columns(&columns)?;
        Ok(Self {
            state_marker: NeedsState,
            id: "table".into(),
            data,
            columns,
            actions: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            total_pages: 1,
            on_page_change: Rc::new(|_| {}),
            loading: false,
            empty_state: None,
        })
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<DataTableState>) -> DataTable<HasTableState<'_>> {
        DataTable {
            state_marker: HasTableState(s),
            id: self.id,
            data: self.data,
            columns: self.columns,
            actions: self.actions,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            on_page_change: self.on_page_change,
            loading: self.loading,
            empty_state: self.empty_state,
        }
    }
}

impl<S> DataTable<S> {
    /// Set the table id; all element ids are derived from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the row actions.
    pub fn actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    /// Append one row action.
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Rows per page; only sizes the loading placeholder.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// 1-based active page.
    pub fn current_page(mut self, page: u32) -> Self {
        self.current_page = page;
        self
    }

    pub fn total_pages(mut self, total: u32) -> Self {
        self.total_pages = total;
        self
    }

    pub fn on_page_change(mut self, handler: impl Fn(u32) + 'static) -> Self {
        self.on_page_change = Rc::new(handler);
        self
    }

    /// Show placeholder rows instead of data.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Content shown when there are no rows and nothing is loading.
    pub fn empty_state(mut self, content: Element) -> Self {
        self.empty_state = Some(content);
        self
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.current_page, self.total_pages)
    }
}

impl<'a> DataTable<HasTableState<'a>> {
    /// Build the table element and register its click handlers.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let state = self.state_marker.0;
        let table_id = self.id.as_str();
        let layout = ActionLayout::for_actions(&self.actions);
        let pager = Pager::new(self.current_page, self.total_pages);

        let body_rows = if self.loading {
            render::render_skeleton(
                table_id,
                self.columns.len(),
                layout.has_column(),
                self.page_size,
            )
        } else if self.data.is_empty() {
            let span = self.columns.len() + usize::from(layout.has_column());
            vec![render::empty_row(table_id, self.empty_state, span)]
        } else {
            let open_menu = state.with(DataTableState::open_menu);
            self.data
                .into_iter()
                .enumerate()
                .map(|(index, row)| {
                    let element = render::data_row(
                        table_id,
                        index,
                        &row,
                        &self.columns,
                        &self.actions,
                        open_menu,
                    );
                    let row = Rc::new(row);
                    events::register_row_handlers(
                        registry,
                        table_id,
                        index,
                        &row,
                        &self.actions,
                        state,
                    );
                    element
                })
                .collect()
        };

        trace!(
            "building {table_id}: {} body rows, loading={}, page {}/{}",
            body_rows.len(),
            self.loading,
            pager.current_page,
            pager.total_pages
        );

        let table = Element::new(Tag::Table)
            .id(ids::table(table_id))
            .child(Element::new(Tag::Head).child(render::header_row(&self.columns, layout)))
            .child(Element::new(Tag::Body).children(body_rows));

        let mut root = Element::col().id(table_id).gap(1).child(table);

        if let Some(nav) = render::pagination_nav(table_id, &pager) {
            events::register_page_handlers(
                registry,
                table_id,
                pager,
                &self.on_page_change,
                state,
            );
            root = root.child(nav);
        }

        root
    }
}
