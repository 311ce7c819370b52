use std::fmt;
use std::rc::Rc;

use celldom::Style;

use crate::record::Record;

/// Called with the row the action was triggered on.
pub type ActionHandler = Rc<dyn Fn(&Record)>;

/// Visual weight of an action trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
    Outline,
    Secondary,
    #[default]
    Ghost,
    Link,
}

impl Variant {
    pub fn style(self) -> Style {
        match self {
            Variant::Default => Style::new().bold(),
            Variant::Destructive => Style::new().bold().underline(),
            Variant::Secondary => Style::new().dim(),
            Variant::Link => Style::new().underline(),
            Variant::Outline | Variant::Ghost => Style::new(),
        }
    }
}

/// A row-level operation.
#[derive(Clone)]
pub struct Action {
    pub label: String,
    /// Glyph shown on the inline trigger and before the label in menus.
    pub icon: Option<String>,
    pub variant: Variant,
    handler: ActionHandler,
}

impl Action {
    pub fn new(label: impl Into<String>, handler: impl Fn(&Record) + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            variant: Variant::default(),
            handler: Rc::new(handler),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Run the handler for `row`.
    pub fn invoke(&self, row: &Record) {
        (self.handler)(row);
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// How a row's actions are presented, decided once per table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionLayout {
    /// No actions: no trigger and no actions column.
    None,
    /// Exactly one action, bound directly to an inline trigger.
    Inline,
    /// Several actions behind a per-row disclosure menu.
    Menu,
}

impl ActionLayout {
    pub fn for_actions(actions: &[Action]) -> Self {
        match actions.len() {
            0 => ActionLayout::None,
            1 => ActionLayout::Inline,
            _ => ActionLayout::Menu,
        }
    }

    pub fn has_column(self) -> bool {
        self != ActionLayout::None
    }
}
