use log::debug;

/// Table-owned interaction state.
///
/// At most one row's action menu is open at a time, identified by the row's
/// position in the current page. A fresh state (on mount) has none open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataTableState {
    open_menu: Option<usize>,
}

impl DataTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row whose menu is open, if any.
    pub fn open_menu(&self) -> Option<usize> {
        self.open_menu
    }

    pub fn is_open(&self, row: usize) -> bool {
        self.open_menu == Some(row)
    }

    /// Open `row`'s menu, closing any other.
    pub fn open(&mut self, row: usize) {
        if let Some(previous) = self.open_menu.filter(|&open| open != row) {
            debug!("closing menu of row {previous}");
        }
        self.open_menu = Some(row);
    }

    pub fn close(&mut self) {
        self.open_menu = None;
    }

    /// Apply an open/close request from `row`'s trigger.
    ///
    /// Closing only takes effect when `row` is the open one.
    pub fn set_open(&mut self, row: usize, open: bool) {
        if open {
            self.open(row);
        } else if self.is_open(row) {
            self.close();
        }
    }

    pub fn toggle(&mut self, row: usize) {
        let open = !self.is_open(row);
        self.set_open(row, open);
    }
}
