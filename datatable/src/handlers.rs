//! Click handler registry.
//!
//! Widgets register closures keyed by `(element_id, event)` while building
//! their element tree; the host looks the clicked element up and dispatches.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

/// Event name used for every trigger the table renders.
pub const ON_CLICK: &str = "on_click";

/// A handler closure. Arguments are captured at registration time.
pub type Handler = Rc<dyn Fn()>;

/// Registry for widget event handlers.
///
/// Maps (element_id, event_type) to handler closures. The host clears it at
/// the start of each render so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Rc<RefCell<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        self.handlers
            .borrow_mut()
            .insert((element_id.to_string(), event.to_string()), handler);
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .borrow()
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Run the handler for an element event. Returns false when none is registered.
    pub fn dispatch(&self, element_id: &str, event: &str) -> bool {
        // The borrow is released before the handler runs.
        let Some(handler) = self.get(element_id, event) else {
            debug!("no {event} handler for {element_id}");
            return false;
        };
        handler();
        true
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
