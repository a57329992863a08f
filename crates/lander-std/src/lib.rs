mod spinner;
mod style;

pub mod print;

pub use spinner::Spinner;
pub use style::is_no_color_set;
pub use style::Style;
