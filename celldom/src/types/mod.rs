mod enums;
mod style;

pub use enums::{Direction, Tag, TextAlign, TextStyle};
pub use style::Style;
