//! Windowed page selection.
//!
//! The window always shows the current page, keeps the first and last page
//! one step away, and only uses an ellipsis when at least one page is hidden.

use log::debug;

/// Numbered slots shown around the current page.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Which side of the numbered run an ellipsis stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// One entry of the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEntry {
    Page { number: u32, active: bool },
    /// Non-selectable marker for skipped pages.
    Ellipsis(Edge),
}

impl PageEntry {
    pub fn number(&self) -> Option<u32> {
        match self {
            PageEntry::Page { number, .. } => Some(*number),
            PageEntry::Ellipsis(_) => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PageEntry::Page { active: true, .. })
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis(_))
    }
}

/// Compute the page selector entries for `current_page` of `total_pages`.
///
/// `max_visible` bounds the numbered run around the current page (at least
/// one slot is always used); the first and last page may be added outside it.
pub fn compute_window(current_page: u32, total_pages: u32, max_visible: u32) -> Vec<PageEntry> {
    let max_visible = max_visible.max(1);
    let page = |number: u32| PageEntry::Page {
        number,
        active: number == current_page,
    };

    if total_pages <= max_visible {
        return (1..=total_pages).map(page).collect();
    }

    let mut start = current_page.saturating_sub(max_visible / 2).max(1);
    let end = total_pages.min(start.saturating_add(max_visible - 1));

    // Clamped at the last page: slide left to keep the run full.
    if end < start || end - start + 1 < max_visible {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    let mut entries = Vec::with_capacity(max_visible as usize + 4);

    if start > 1 {
        entries.push(PageEntry::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            entries.push(PageEntry::Ellipsis(Edge::Start));
        }
    }

    entries.extend((start..=end).map(page));

    if end < total_pages {
        if end < total_pages - 1 {
            entries.push(PageEntry::Ellipsis(Edge::End));
        }
        entries.push(PageEntry::Page {
            number: total_pages,
            active: false,
        });
    }

    entries
}

/// Caller-owned pagination counters as seen by one render.
///
/// The pager never corrects the counters; it only decides which navigation
/// requests are forwarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl Pager {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Whether `page` is a valid navigation target.
    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// Forward `page` to `on_change` if it is in range.
    ///
    /// Out-of-range requests are dropped without calling `on_change`.
    pub fn request(&self, page: u32, on_change: &dyn Fn(u32)) -> bool {
        if !self.contains(page) {
            debug!(
                "ignoring request for page {page} of {}",
                self.total_pages
            );
            return false;
        }
        on_change(page);
        true
    }

    /// Target of the "previous" control; 0 on the first page.
    pub fn previous(&self) -> u32 {
        self.current_page.saturating_sub(1)
    }

    /// Target of the "next" control.
    pub fn next(&self) -> u32 {
        self.current_page.saturating_add(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The selector is only shown when there is more than one page.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    pub fn window(&self) -> Vec<PageEntry> {
        compute_window(self.current_page, self.total_pages, MAX_VISIBLE_PAGES)
    }
}
