//! Rendering of element trees into lines of styled text.
//!
//! Block elements (columns, tables) stack vertically; rows, buttons and table
//! cells flatten into a single line.

mod table;

use log::trace;

use crate::element::{Content, Element};
use crate::text::{align_offset, display_width, truncate_to_width};
use crate::types::{Direction, Tag, TextAlign, TextStyle};

/// Drawn for skeleton elements, which carry no text of their own.
pub const SKELETON_FILL: &str = "░░░░░░░░";

/// Cells wider than this are truncated with an ellipsis.
pub const MAX_CELL_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, style });
        }
    }

    pub fn append(&mut self, other: Line) {
        self.spans.extend(other.spans);
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| display_width(&span.text)).sum()
    }

    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Cut the line down to `max_width` columns, ending in `…` when cut.
    pub fn truncate(self, max_width: usize) -> Line {
        if self.width() <= max_width {
            return self;
        }

        let mut out = Line::new();
        let mut remaining = max_width;
        for span in self.spans {
            let width = display_width(&span.text);
            if width < remaining {
                remaining -= width;
                out.spans.push(span);
                continue;
            }
            out.push(truncate_to_width(&span.text, remaining), span.style);
            break;
        }
        out
    }

    /// Pad with unstyled spaces to `width` columns.
    pub fn pad_to(&mut self, width: usize, align: TextAlign) {
        let current = self.width();
        if current >= width {
            return;
        }

        let left = align_offset(current, width, align);
        let right = width - current - left;
        if left > 0 {
            self.spans.insert(
                0,
                Span {
                    text: " ".repeat(left),
                    style: TextStyle::default(),
                },
            );
        }
        self.push(" ".repeat(right), TextStyle::default());
    }
}

/// Render an element tree into styled lines.
pub fn render(root: &Element) -> Vec<Line> {
    let mut lines = Vec::new();
    render_block(root, TextStyle::default(), &mut lines);
    trace!("rendered {} into {} lines", root.id, lines.len());
    lines
}

/// Render an element tree into plain strings with trailing spaces removed.
pub fn render_plain(root: &Element) -> Vec<String> {
    render(root)
        .iter()
        .map(|line| line.plain().trim_end().to_string())
        .collect()
}

fn render_block(element: &Element, inherited: TextStyle, out: &mut Vec<Line>) {
    let style = inherited.merge(element.style.text_style);

    if element.tag == Tag::Table {
        out.extend(table::render_table(element, style));
        return;
    }

    match &element.content {
        Content::Children(children)
            if element.direction == Direction::Column && is_block(element.tag) =>
        {
            for (index, child) in children.iter().enumerate() {
                if index > 0 {
                    out.extend((0..element.gap).map(|_| Line::new()));
                }
                render_block(child, style, out);
            }
        }
        Content::None if element.tag != Tag::Skeleton => {}
        _ => out.push(render_inline(element, inherited)),
    }
}

fn is_block(tag: Tag) -> bool {
    matches!(tag, Tag::Box | Tag::Body | Tag::Head | Tag::Menu)
}

pub(crate) fn render_inline(element: &Element, inherited: TextStyle) -> Line {
    let mut style = inherited.merge(element.style.text_style);
    if element.disabled {
        style.dim = true;
    }
    if element.active {
        style.reversed = true;
    }

    let mut line = Line::new();
    match element.tag {
        Tag::Skeleton => {
            let fill = TextStyle { dim: true, ..style };
            line.push(SKELETON_FILL, fill);
        }
        Tag::Button | Tag::MenuItem => {
            line.push("[", style);
            line.append(inner_inline(element, style));
            line.push("]", style);
        }
        Tag::Input => {
            line.push("[ ", style);
            let inner = inner_inline(element, style);
            if inner.width() == 0 {
                let hint = element.label.as_deref().unwrap_or_default();
                line.push(hint, TextStyle { dim: true, ..style });
            } else {
                line.append(inner);
            }
            line.push(" ]", style);
        }
        _ => line.append(inner_inline(element, style)),
    }
    line
}

fn inner_inline(element: &Element, style: TextStyle) -> Line {
    let mut line = Line::new();
    match &element.content {
        Content::None => {}
        Content::Text(text) => line.push(text.replace('\n', " "), style),
        Content::Children(children) => {
            let separator = " ".repeat(usize::from(element.gap.max(1)));
            for (index, child) in children.iter().enumerate() {
                let rendered = render_inline(child, style);
                if index > 0 && rendered.width() > 0 && line.width() > 0 {
                    line.push(separator.clone(), TextStyle::default());
                }
                line.append(rendered);
            }
        }
    }
    line
}
