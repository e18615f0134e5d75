pub mod model;
pub mod parse;

pub use model::Color;
pub use parse::{parse_color, ColorParseError};

#[cfg(feature = "color_double_precision")]
pub type ColorFloat = f64;
#[cfg(not(feature = "color_double_precision"))]
pub type ColorFloat = f32;
