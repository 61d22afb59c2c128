mod aria;
mod color;
mod edges;
mod enums;
mod style;

pub use aria::{Aria, CheckState, Role, SortOrder};
pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{Border, Direction, Size, TextStyle};
pub use style::Style;
