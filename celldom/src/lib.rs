pub mod element;
pub mod hit;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use element::Element;
pub use hit::{collect_clickable, find_clickable};
pub use render::{render, render_plain, Line, Span};
pub use terminal::Terminal;
pub use types::*;
