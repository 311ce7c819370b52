use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;

/// Shared UI state with interior mutability.
///
/// `State<T>` is cheap to clone; clones point at the same value, so a click
/// handler can capture one and update what the next render reads. Everything
/// runs on the UI thread, hence `Rc<RefCell<T>>` rather than a lock.
///
/// # Example
///
/// ```ignore
/// let page = State::new(1u32);
/// let handler_page = page.clone();
/// let on_change = move |n| handler_page.set(n);
/// on_change(3);
/// assert_eq!(page.get(), 3);
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Rc<RefCell<T>>,
    dirty: Rc<Cell<bool>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
            dirty: Rc::new(Cell::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.borrow().clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.try_borrow_mut() {
            *guard = value;
            self.dirty.set(true);
        } else {
            warn!("state set while borrowed, update dropped");
        }
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.try_borrow_mut() {
            f(&mut guard);
            self.dirty.set(true);
        } else {
            warn!("state updated while borrowed, update dropped");
        }
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.set(false);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            dirty: Rc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
