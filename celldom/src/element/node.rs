use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Style, Tag, TextAlign};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,
    pub gap: u16,
    /// Number of table columns a cell covers. Ignored outside tables.
    pub colspan: u16,
    pub text_align: TextAlign,

    // Visual
    pub style: Style,
    /// Host-supplied style hook (a CSS-like class name), carried through untouched.
    pub class: Option<String>,

    // Interaction
    pub clickable: bool,
    pub disabled: bool,
    pub active: bool,
    /// Accessible label, used by triggers whose visible content is only a glyph.
    pub label: Option<String>,

    // Custom data storage (for handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Box,
            content: Content::None,
            direction: Direction::Column,
            gap: 0,
            colspan: 1,
            text_align: TextAlign::Left,
            style: Style::default(),
            class: None,
            clickable: false,
            disabled: false,
            active: false,
            label: None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        let prefix = match tag {
            Tag::Box => "box",
            Tag::Text => "text",
            Tag::Table => "table",
            Tag::Head => "head",
            Tag::Body => "body",
            Tag::Row => "tr",
            Tag::HeaderCell => "th",
            Tag::Cell => "td",
            Tag::Button => "button",
            Tag::Menu => "menu",
            Tag::MenuItem => "menuitem",
            Tag::Skeleton => "skeleton",
            Tag::Nav => "nav",
            Tag::Ellipsis => "ellipsis",
            Tag::Input => "input",
        };
        Self {
            id: generate_id(prefix),
            tag,
            ..Default::default()
        }
    }

    pub fn box_() -> Self {
        Self::new(Tag::Box)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Text)
        }
    }

    pub fn col() -> Self {
        Self::new(Tag::Box).direction(Direction::Column)
    }

    pub fn row() -> Self {
        Self::new(Tag::Box).direction(Direction::Row)
    }

    /// A clickable trigger with the given visible content.
    pub fn button(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            clickable: true,
            ..Self::new(Tag::Button)
        }
    }

    pub fn skeleton() -> Self {
        Self::new(Tag::Skeleton)
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self {
            content: Content::Text(value.into()),
            ..Self::new(Tag::Input)
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn colspan(mut self, colspan: u16) -> Self {
        self.colspan = colspan.max(1);
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn maybe_class(mut self, class: Option<&str>) -> Self {
        self.class = class.map(str::to_string);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    /// All text below this element, depth first, joined by single spaces.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children
                .iter()
                .map(Element::text_content)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
