use super::{render_inline, Line, MAX_CELL_WIDTH};
use crate::element::Element;
use crate::text::display_width;
use crate::types::{Tag, TextAlign, TextStyle};

const COLUMN_SEPARATOR: &str = " │ ";
const RULE_SEPARATOR: &str = "─┼─";

struct CellLine {
    line: Line,
    colspan: usize,
    align: TextAlign,
}

struct RowLines {
    header: bool,
    cells: Vec<CellLine>,
}

/// Lay out a table element: column widths come from single-span cells, a
/// spanning cell wider than its columns widens the last column it covers.
pub(super) fn render_table(table: &Element, style: TextStyle) -> Vec<Line> {
    let rows = collect_rows(table, style);
    let column_count = rows
        .iter()
        .map(|row| row.cells.iter().map(|cell| cell.colspan).sum::<usize>())
        .max()
        .unwrap_or(0);

    if column_count == 0 {
        return Vec::new();
    }

    let widths = column_widths(&rows, column_count);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    let mut previous_header = false;

    for row in rows {
        if previous_header && !row.header {
            lines.push(rule(&widths));
        }
        previous_header = row.header;
        lines.push(render_row(row, &widths));
    }

    if previous_header {
        lines.push(rule(&widths));
    }

    lines
}

fn collect_rows(table: &Element, style: TextStyle) -> Vec<RowLines> {
    let mut rows = Vec::new();
    for section in table.child_elements() {
        match section.tag {
            Tag::Head | Tag::Body => {
                let header = section.tag == Tag::Head;
                for row in section.child_elements() {
                    rows.push(collect_cells(row, header, style));
                }
            }
            Tag::Row => rows.push(collect_cells(section, false, style)),
            _ => {}
        }
    }
    rows
}

fn collect_cells(row: &Element, header: bool, style: TextStyle) -> RowLines {
    let cells = row
        .child_elements()
        .iter()
        .map(|cell| {
            let mut cell_style = style;
            if cell.tag == Tag::HeaderCell {
                cell_style.bold = true;
            }
            CellLine {
                line: render_inline(cell, cell_style).truncate(MAX_CELL_WIDTH),
                colspan: usize::from(cell.colspan.max(1)),
                align: cell.text_align,
            }
        })
        .collect();

    RowLines { header, cells }
}

fn column_widths(rows: &[RowLines], column_count: usize) -> Vec<usize> {
    let mut widths = vec![0; column_count];

    for row in rows {
        let mut column = 0;
        for cell in &row.cells {
            if cell.colspan == 1 && column < column_count {
                widths[column] = widths[column].max(cell.line.width());
            }
            column += cell.colspan;
        }
    }

    for row in rows {
        let mut column = 0;
        for cell in &row.cells {
            if cell.colspan > 1 {
                let last = (column + cell.colspan).min(column_count) - 1;
                let available = spanned_width(&widths[column..=last]);
                let needed = cell.line.width();
                if needed > available {
                    widths[last] += needed - available;
                }
            }
            column += cell.colspan;
        }
    }

    widths
}

fn spanned_width(widths: &[usize]) -> usize {
    let separators = widths.len().saturating_sub(1) * display_width(COLUMN_SEPARATOR);
    widths.iter().sum::<usize>() + separators
}

fn render_row(row: RowLines, widths: &[usize]) -> Line {
    let mut line = Line::new();
    let mut column = 0;

    for cell in row.cells {
        if column >= widths.len() {
            break;
        }
        if column > 0 {
            line.push(COLUMN_SEPARATOR, TextStyle::default());
        }
        let last = (column + cell.colspan).min(widths.len());
        let mut content = cell.line;
        content.pad_to(spanned_width(&widths[column..last]), cell.align);
        line.append(content);
        column = last;
    }

    while column < widths.len() {
        if column > 0 {
            line.push(COLUMN_SEPARATOR, TextStyle::default());
        }
        line.push(" ".repeat(widths[column]), TextStyle::default());
        column += 1;
    }

    line
}

fn rule(widths: &[usize]) -> Line {
    let text = widths
        .iter()
        .map(|width| "─".repeat(*width))
        .collect::<Vec<_>>()
        .join(RULE_SEPARATOR);
    let mut line = Line::new();
    line.push(text, TextStyle { dim: true, ..TextStyle::default() });
    line
}
