use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Print, SetAttribute},
};

use crate::element::Element;
use crate::render::{render, Line};
use crate::types::TextStyle;

/// Line-oriented terminal output. Each frame is printed below the previous one.
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn draw(&mut self, root: &Element) -> io::Result<()> {
        let lines = render(root);
        write_lines(&mut self.out, &lines)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write styled lines, resetting attributes after every span.
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line]) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            apply(out, span.style)?;
            queue!(out, Print(&span.text), SetAttribute(Attribute::Reset))?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn apply<W: Write>(out: &mut W, style: TextStyle) -> io::Result<()> {
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.reversed {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}
